//! Response body construction.
//!
//! Serialization failures never escape: a success body that cannot be
//! serialized becomes a `SERIALIZATION_ERROR` envelope, and an error envelope
//! that cannot be serialized falls back to a hand-built JSON object.

use std::any::Any;

use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use exercises_core::error::ErrorCode;
use exercises_core::models::response::{ErrorResponse, SuccessResponse};
use serde::Serialize;

pub const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred while processing your request";

/// Headers attached to every response, success or error.
pub fn fixed_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ),
    ]
}

pub fn success<T: Serialize>(
    status: StatusCode,
    body: &SuccessResponse<T>,
    request_id: &str,
) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => json(status, bytes),
        Err(e) => {
            tracing::error!(error = %e, request_id, "failed to serialize success response");
            error(
                ErrorCode::Serialization,
                "Failed to serialize response",
                request_id,
            )
        }
    }
}

pub fn error(code: ErrorCode, message: &str, request_id: &str) -> Response {
    let status =
        StatusCode::from_u16(code.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = ErrorResponse::new(code, message, request_id);

    let bytes = match serde_json::to_vec(&body) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, request_id, "failed to serialize error response");
            minimal_error_body(code, message, request_id)
        }
    };

    json(status, bytes)
}

/// Last-resort error body built without going through the envelope types.
pub fn minimal_error_body(code: ErrorCode, message: &str, request_id: &str) -> Vec<u8> {
    serde_json::json!({
        "success": false,
        "error": {
            "code": code.as_str(),
            "message": message,
            "requestId": request_id,
        },
    })
    .to_string()
    .into_bytes()
}

/// Body for a handler that panicked. No request id is recoverable here.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");

    error(ErrorCode::Internal, INTERNAL_ERROR_MESSAGE, "unknown")
}

fn json(status: StatusCode, bytes: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        bytes,
    )
        .into_response()
}

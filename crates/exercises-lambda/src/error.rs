use axum::response::Response;
use exercises_core::error::ErrorCode;
use exercises_storage::error::StorageError;

use crate::response;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    InvalidMethod(String),
    ExerciseNotFound(String),
    RouteNotFound(String),
    Storage(StorageError),
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::InvalidMethod(_) => ErrorCode::InvalidMethod,
            ApiError::ExerciseNotFound(_) => ErrorCode::ExerciseNotFound,
            ApiError::RouteNotFound(_) => ErrorCode::NotFound,
            ApiError::Storage(e) => e.code(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidMethod(_) => "Only GET method is supported".to_string(),
            ApiError::ExerciseNotFound(id) => format!("Exercise with ID '{id}' not found"),
            ApiError::RouteNotFound(path) => format!("No route matches path '{path}'"),
            ApiError::Storage(e) => e.to_string(),
        }
    }

    /// Log the error and render it as an error envelope.
    pub fn render(self, request_id: &str) -> Response {
        let code = self.code();
        match &self {
            ApiError::InvalidMethod(method) => {
                tracing::warn!(method = %method, request_id, "invalid HTTP method");
            }
            ApiError::ExerciseNotFound(id) => {
                tracing::warn!(exercise_id = %id, request_id, "exercise not found");
            }
            ApiError::RouteNotFound(path) => {
                tracing::warn!(path = %path, request_id, "no route for path");
            }
            ApiError::Storage(e) => {
                tracing::error!(code = %code, error = %e, request_id, "service error");
            }
        }

        response::error(code, &self.message(), request_id)
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Storage(e)
    }
}

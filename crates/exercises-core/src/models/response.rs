//! Response envelopes.
//!
//! Every body is either a [`SuccessResponse`] or an [`ErrorResponse`],
//! discriminated on the wire by the `success` flag.

use jiff::Timestamp;
use serde::Serialize;
use ts_rs::TS;

use crate::error::ErrorCode;
use crate::models::exercise::EnrichedExercise;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
    pub timestamp: Timestamp,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: Timestamp::now(),
        }
    }
}

/// List payload. `count` is always the length of `exercises`.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseList<T> {
    pub exercises: Vec<T>,
    pub count: usize,
}

impl<T> From<Vec<T>> for ExerciseList<T> {
    fn from(exercises: Vec<T>) -> Self {
        let count = exercises.len();
        Self { exercises, count }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SingleExercise {
    pub exercise: EnrichedExercise,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
    pub timestamp: Timestamp,
    pub request_id: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code,
                message: message.into(),
                timestamp: Timestamp::now(),
                request_id: request_id.into(),
            },
        }
    }
}

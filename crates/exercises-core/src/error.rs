use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Machine-readable error codes carried in error envelopes.
///
/// Each code maps to exactly one HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum ErrorCode {
    #[serde(rename = "INVALID_METHOD")]
    InvalidMethod,
    #[serde(rename = "EXERCISE_NOT_FOUND")]
    ExerciseNotFound,
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    #[serde(rename = "DYNAMODB_ERROR")]
    DynamoDb,
    #[serde(rename = "S3_ERROR")]
    S3,
    #[serde(rename = "SERIALIZATION_ERROR")]
    Serialization,
    #[serde(rename = "INTERNAL_ERROR")]
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidMethod => "INVALID_METHOD",
            ErrorCode::ExerciseNotFound => "EXERCISE_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DynamoDb => "DYNAMODB_ERROR",
            ErrorCode::S3 => "S3_ERROR",
            ErrorCode::Serialization => "SERIALIZATION_ERROR",
            ErrorCode::Internal => "INTERNAL_ERROR",
        }
    }

    /// HTTP status code returned alongside this error code.
    pub fn status(self) -> u16 {
        match self {
            ErrorCode::InvalidMethod => 400,
            ErrorCode::ExerciseNotFound | ErrorCode::NotFound => 404,
            ErrorCode::DynamoDb
            | ErrorCode::S3
            | ErrorCode::Serialization
            | ErrorCode::Internal => 500,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable '{0}' is not set")]
    Missing(&'static str),

    #[error("{name} must be an integer number of minutes, got '{value}'")]
    InvalidExpiration { name: &'static str, value: String },

    #[error("{name} must be between 1 and {max} minutes, got {minutes}")]
    ExpirationOutOfRange {
        name: &'static str,
        minutes: u64,
        max: u32,
    },
}

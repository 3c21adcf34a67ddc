use exercises_core::error::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("media key cannot be null or empty")]
    EmptyKey,

    #[error("failed to retrieve exercises from DynamoDB: {0}")]
    Scan(String),

    #[error("failed to retrieve exercise from DynamoDB: {0}")]
    GetItem(String),

    #[error("exercise {id} could not be read: {source}")]
    InvalidItem {
        id: String,
        #[source]
        source: ItemError,
    },

    #[error("failed to generate presigned URL: {0}")]
    Presign(String),
}

impl StorageError {
    /// Error code reported to API callers.
    ///
    /// A blank media key is a data problem in the record, but it surfaces
    /// through signing and is reported as an S3 failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            StorageError::Scan(_)
            | StorageError::GetItem(_)
            | StorageError::InvalidItem { .. } => ErrorCode::DynamoDb,
            StorageError::EmptyKey | StorageError::Presign(_) => ErrorCode::S3,
        }
    }
}

/// Why a raw DynamoDB item could not be mapped to an exercise record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("missing required attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("attribute {0} is not a string")]
    NotAString(&'static str),
}

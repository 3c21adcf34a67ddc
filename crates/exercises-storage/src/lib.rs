//! exercises-storage
//!
//! DynamoDB record lookups and S3 presigned URLs. Thin wrappers around the
//! AWS SDK behind the [`records::RecordStore`] and [`objects::UrlSigner`]
//! traits.

pub mod client;
pub mod error;
pub mod item;
pub mod objects;
pub mod records;

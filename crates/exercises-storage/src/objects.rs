use std::future::Future;
use std::time::Duration;

use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use exercises_core::config::Config;
use exercises_core::models::exercise::SignedUrl;
use jiff::{SignedDuration, Timestamp};

use crate::error::StorageError;

/// Produces time-limited fetch URLs for media objects.
pub trait UrlSigner: Send + Sync + 'static {
    /// Sign `key`. Blank keys are rejected without contacting the store.
    fn sign(&self, key: &str) -> impl Future<Output = Result<SignedUrl, StorageError>> + Send;
}

/// [`UrlSigner`] that presigns S3 `GetObject` requests against one bucket.
#[derive(Clone)]
pub struct S3UrlSigner {
    client: Client,
    bucket: String,
    lifetime: Duration,
}

impl S3UrlSigner {
    pub fn new(client: Client, config: &Config) -> Self {
        tracing::info!(
            bucket = %config.bucket_name,
            url_expiration_minutes = config.url_expiration_minutes,
            "url signer initialized"
        );
        Self {
            client,
            bucket: config.bucket_name.clone(),
            lifetime: config.url_lifetime(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl UrlSigner for S3UrlSigner {
    async fn sign(&self, key: &str) -> Result<SignedUrl, StorageError> {
        if key.trim().is_empty() {
            tracing::warn!("attempted to presign an empty media key");
            return Err(StorageError::EmptyKey);
        }

        let url = presign_get(&self.client, &self.bucket, key, self.lifetime)
            .await
            .inspect_err(|e| tracing::error!(key, error = %e, "presign failed"))?;
        let expires_at = expiry_after(self.lifetime)?;

        tracing::debug!(key, "generated presigned url");
        Ok(SignedUrl { url, expires_at })
    }
}

/// Generate a presigned GET URL for an object.
pub async fn presign_get(
    client: &Client,
    bucket: &str,
    key: &str,
    expires_in: Duration,
) -> Result<String, StorageError> {
    let presign_config = PresigningConfig::builder()
        .expires_in(expires_in)
        .build()
        .map_err(|e| StorageError::Presign(e.to_string()))?;

    let presigned = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .presigned(presign_config)
        .await
        .map_err(|e| StorageError::Presign(e.to_string()))?;

    Ok(presigned.uri().to_string())
}

/// The instant a URL signed now with `lifetime` stops working.
///
/// Computed locally rather than read back from S3.
pub fn expiry_after(lifetime: Duration) -> Result<Timestamp, StorageError> {
    let lifetime =
        SignedDuration::try_from(lifetime).map_err(|e| StorageError::Presign(e.to_string()))?;
    Timestamp::now()
        .checked_add(lifetime)
        .map_err(|e| StorageError::Presign(e.to_string()))
}

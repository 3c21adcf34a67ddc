//! Deployment configuration read from the process environment.
//!
//! Loaded once at startup and handed to each gateway constructor.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const TABLE_NAME_VAR: &str = "DYNAMODB_TABLE_NAME";
pub const BUCKET_NAME_VAR: &str = "S3_BUCKET_NAME";
pub const URL_EXPIRATION_VAR: &str = "PRESIGNED_URL_EXPIRATION_MINUTES";
pub const REGION_VAR: &str = "AWS_REGION";

pub const DEFAULT_URL_EXPIRATION_MINUTES: u32 = 60;
pub const DEFAULT_REGION: &str = "us-east-1";

/// S3 rejects presigned URLs that live longer than seven days.
pub const MAX_URL_EXPIRATION_MINUTES: u32 = 7 * 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    pub bucket_name: String,
    pub url_expiration_minutes: u32,
    pub region: String,
}

impl Config {
    /// Load from the real process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = required(&lookup, TABLE_NAME_VAR)?;
        let bucket_name = required(&lookup, BUCKET_NAME_VAR)?;

        let url_expiration_minutes = match lookup(URL_EXPIRATION_VAR) {
            Some(raw) => parse_expiration(&raw)?,
            None => DEFAULT_URL_EXPIRATION_MINUTES,
        };

        let region = lookup(REGION_VAR)
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let config = Config {
            table_name,
            bucket_name,
            url_expiration_minutes,
            region,
        };

        tracing::info!(
            region = %config.region,
            table = %config.table_name,
            bucket = %config.bucket_name,
            url_expiration_minutes = config.url_expiration_minutes,
            "configuration loaded"
        );

        Ok(config)
    }

    /// Lifetime of every presigned URL.
    pub fn url_lifetime(&self) -> Duration {
        Duration::from_secs(u64::from(self.url_expiration_minutes) * 60)
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parse_expiration(raw: &str) -> Result<u32, ConfigError> {
    let minutes: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidExpiration {
            name: URL_EXPIRATION_VAR,
            value: raw.to_string(),
        })?;

    if minutes == 0 || minutes > u64::from(MAX_URL_EXPIRATION_MINUTES) {
        return Err(ConfigError::ExpirationOutOfRange {
            name: URL_EXPIRATION_VAR,
            minutes,
            max: MAX_URL_EXPIRATION_MINUTES,
        });
    }

    // Bounded above by MAX_URL_EXPIRATION_MINUTES, so this always fits.
    Ok(minutes as u32)
}

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Load the shared AWS SDK configuration for `region`.
///
/// Credentials come from the default provider chain (the Lambda execution
/// role in production).
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}

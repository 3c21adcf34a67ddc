use exercises_catalog::Catalog;
use exercises_core::config::Config;
use exercises_lambda::app;
use exercises_lambda::state::AppState;
use exercises_storage::client::load_sdk_config;
use exercises_storage::objects::S3UrlSigner;
use exercises_storage::records::DynamoRecordStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    let sdk_config = load_sdk_config(&config.region).await;

    let store = DynamoRecordStore::new(aws_sdk_dynamodb::Client::new(&sdk_config), &config);
    let signer = S3UrlSigner::new(aws_sdk_s3::Client::new(&sdk_config), &config);
    let state = AppState::new(Catalog::new(store, signer));

    tracing::info!("lambda handler initialized");

    lambda_http::run(app::router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}

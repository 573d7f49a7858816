use crate::error::{StorageError, StorageResult};
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::config::ProvideCredentials;
use aws_sdk_s3::Client;
use std::time::Duration;
use tracing::debug;

/// Per-operation timeout applied to every S3 call.
///
/// The pipeline is strictly sequential, so one hung call would hang the
/// whole invocation; an explicit bound replaces the SDK's ambient default.
const OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds an S3 client from the ambient credential chain.
///
/// Retries are disabled: every step of the issuance pipeline is fail-fast,
/// and a failed request must never end up half-published. The credential
/// chain is resolved once up front so that a credential-less invocation
/// fails before any storage call is attempted.
pub async fn load_client(region: &str) -> StorageResult<Client> {
    let timeout_config = TimeoutConfig::builder()
        .operation_timeout(OPERATION_TIMEOUT)
        .build();

    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .retry_config(RetryConfig::disabled())
        .timeout_config(timeout_config)
        .load()
        .await;

    preflight_credentials(&config).await?;

    debug!(region = %region, "initialized S3 client");
    Ok(Client::new(&config))
}

/// Resolves the credential chain once, before any client is handed out.
async fn preflight_credentials(config: &SdkConfig) -> StorageResult<()> {
    let provider = config
        .credentials_provider()
        .ok_or_else(|| StorageError::Credentials("no credential provider configured".to_string()))?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| StorageError::Credentials(e.to_string()))?;
    Ok(())
}

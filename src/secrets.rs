//! Secret store access.
//!
//! The connection string may live in AWS Secrets Manager instead of the
//! environment. `SecretStore` is the seam; `AwsSecretsManager` is the only
//! production implementation.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::DisplayErrorContext;

use crate::error::AppError;

/// Looks up secret payloads by identifier and region.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the string payload of a secret. `Ok(None)` means the secret exists
    /// but carries no string value (binary secrets).
    async fn secret_string(&self, secret_id: &str, region: &str)
        -> Result<Option<String>, AppError>;
}

/// AWS Secrets Manager client built from the default credential chain.
///
/// A fresh SDK config and client are created per lookup so the region can
/// follow the environment of each request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsSecretsManager;

#[async_trait]
impl SecretStore for AwsSecretsManager {
    async fn secret_string(
        &self,
        secret_id: &str,
        region: &str,
    ) -> Result<Option<String>, AppError> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        let client = aws_sdk_secretsmanager::Client::new(&sdk_config);

        tracing::debug!(secret_id, region, "Fetching connection string secret");

        let output = client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| {
                AppError::SecretStore(format!(
                    "failed to get secret value: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        Ok(output.secret_string().map(str::to_string))
    }
}

//! Connection string resolution.
//!
//! The connection string comes from exactly one of two places: a secret in the
//! secret store (when `DOCDB_EXAMPLE_CONNECTION_STRING_SECRET_ID` is set) or the
//! `DOCDB_EXAMPLE_CONNECTION_STRING` variable. Settings are read again on every
//! request; nothing is cached.

use std::fmt;

use crate::error::AppError;
use crate::secrets::SecretStore;

/// Identifier of the secret holding the connection string
pub const SECRET_ID_ENV: &str = "DOCDB_EXAMPLE_CONNECTION_STRING_SECRET_ID";

/// Region of the secret store; required when a secret id is set
pub const SECRET_REGION_ENV: &str = "DOCDB_EXAMPLE_CONNECTION_STRING_SECRET_REGION";

/// Connection string used directly when no secret resolves
pub const CONNECTION_STRING_ENV: &str = "DOCDB_EXAMPLE_CONNECTION_STRING";

/// Raw connection settings as found in the environment. Empty values count as unset.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub secret_id: Option<String>,
    pub secret_region: Option<String>,
    pub connection_string: Option<String>,
}

// Connection strings embed credentials.
impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("secret_id", &self.secret_id)
            .field("secret_region", &self.secret_region)
            .field(
                "connection_string",
                &self.connection_string.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl ConnectionSettings {
    /// Read the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            secret_id: non_empty(SECRET_ID_ENV),
            secret_region: non_empty(SECRET_REGION_ENV),
            connection_string: non_empty(CONNECTION_STRING_ENV),
        }
    }

    /// Resolve the connection string, querying the secret store when a secret id is set.
    pub async fn resolve(&self, secrets: &dyn SecretStore) -> Result<String, AppError> {
        let mut connection_string = String::new();

        if let Some(secret_id) = &self.secret_id {
            let region = self.secret_region.as_deref().ok_or_else(|| {
                AppError::Config(format!("the {} environment variable is not set", SECRET_REGION_ENV))
            })?;

            connection_string = secrets
                .secret_string(secret_id, region)
                .await?
                .ok_or_else(|| {
                    AppError::SecretStore(format!("secret {} has no string value", secret_id))
                })?;

            tracing::debug!(secret_id = %secret_id, region, "Resolved connection string from secret store");
        }

        if connection_string.is_empty() {
            if let Some(direct) = &self.connection_string {
                connection_string = direct.clone();
            }
        }

        if connection_string.is_empty() {
            return Err(AppError::Config(format!(
                "the {} or {} environment variable is not set",
                SECRET_ID_ENV, CONNECTION_STRING_ENV
            )));
        }

        Ok(connection_string)
    }
}

/// Where request handlers obtain their connection settings.
#[derive(Debug, Clone, Default)]
pub enum SettingsSource {
    /// Re-read the process environment on every request
    #[default]
    Environment,
    /// Fixed settings, independent of the environment
    Fixed(ConnectionSettings),
}

impl SettingsSource {
    pub fn load(&self) -> ConnectionSettings {
        match self {
            SettingsSource::Environment => ConnectionSettings::from_env(),
            SettingsSource::Fixed(settings) => settings.clone(),
        }
    }
}

//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::secrets::SecretStore;
use crate::settings::SettingsSource;
use crate::store::CounterBackend;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds no database client: each hit resolves its connection settings and
/// connects through `backend` from scratch.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub settings: SettingsSource,
    pub secrets: Arc<dyn SecretStore>,
    pub backend: Arc<dyn CounterBackend>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        settings: SettingsSource,
        secrets: Arc<dyn SecretStore>,
        backend: Arc<dyn CounterBackend>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            settings,
            secrets,
            backend,
        }
    }
}

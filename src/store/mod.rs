//! Counter storage.
//!
//! `CounterBackend` opens a connection for one request and hands back a
//! `CounterStore` bound to the counter document. The increment must be a single
//! atomic operation in the backing store: concurrent hits never lose updates.
//!
//! - [`mongo`]: MongoDB / Amazon DocumentDB via the official driver
//! - [`memory`]: process-local counter used by the test suite

pub mod memory;
pub mod mongo;

use async_trait::async_trait;

use crate::config::DatabaseConfig;
use crate::error::AppError;

pub use memory::MemoryBackend;
pub use mongo::MongoBackend;

/// Atomic increment-and-fetch of a single counter.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Increment the counter by one, creating it on first use, and return the new value.
    async fn increment(&self) -> Result<i64, AppError>;
}

/// Opens counter stores from a resolved connection string.
#[async_trait]
pub trait CounterBackend: Send + Sync {
    async fn connect(&self, connection_string: &str) -> Result<Box<dyn CounterStore>, AppError>;
}

/// Location of the counter document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterNamespace {
    pub database: String,
    pub collection: String,
    pub counter_id: String,
}

impl From<&DatabaseConfig> for CounterNamespace {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            database: config.name.clone(),
            collection: config.collection.clone(),
            counter_id: config.counter_id.clone(),
        }
    }
}

impl Default for CounterNamespace {
    fn default() -> Self {
        Self::from(&DatabaseConfig::default())
    }
}

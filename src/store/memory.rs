//! In-process counter backend.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{CounterBackend, CounterStore};
use crate::error::AppError;

/// Counter held in process memory, shared by every store it hands out.
///
/// Records the connection strings it was asked to connect with.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    counter: Arc<AtomicI64>,
    connections: Arc<Mutex<Vec<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counter value
    pub fn value(&self) -> i64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Connection strings seen by `connect`, in call order
    pub fn connections(&self) -> Vec<String> {
        self.connections
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CounterBackend for MemoryBackend {
    async fn connect(&self, connection_string: &str) -> Result<Box<dyn CounterStore>, AppError> {
        if let Ok(mut seen) = self.connections.lock() {
            seen.push(connection_string.to_string());
        }
        Ok(Box::new(MemoryCounterStore {
            counter: Arc::clone(&self.counter),
        }))
    }
}

struct MemoryCounterStore {
    counter: Arc<AtomicI64>,
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment(&self) -> Result<i64, AppError> {
        Ok(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

//! In-memory key-value store.

use dashmap::DashMap;
use inroad_core::{InroadResult, KeyValueStore};

/// Concurrent in-memory store for tests and single-run usage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> InroadResult<Option<String>> {
        Ok(self.map.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> InroadResult<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

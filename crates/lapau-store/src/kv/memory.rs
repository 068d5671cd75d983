//! In-memory implementation of the key-value backend
//!
//! Keeps slices in a process-local map. Used by tests and demos where
//! nothing should touch the filesystem.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use lapau_core::RepoResult;

use super::backend::KvBackend;

/// Map-backed slice storage
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slices: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect a stored slice, test helper
    pub fn dump(&self, key: &str) -> Option<serde_json::Value> {
        self.slices.lock().get(key).cloned()
    }
}

#[async_trait]
impl KvBackend for MemoryBackend {
    async fn load(&self, key: &str) -> RepoResult<Option<serde_json::Value>> {
        Ok(self.slices.lock().get(key).cloned())
    }

    async fn save(&self, key: &str, value: &serde_json::Value) -> RepoResult<()> {
        self.slices.lock().insert(key.to_string(), value.clone());
        Ok(())
    }
}

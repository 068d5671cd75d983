//! Key-value backend port
//!
//! The store persists each state slice as a whole JSON value under a
//! string key: `load` on startup, `save` replacing the slice on every
//! mutation. No partial writes, no deltas. Durability is the backend's
//! problem; last-write-wins is the implicit concurrency model.

use async_trait::async_trait;

use lapau_core::RepoResult;

/// Slice key names, matching the persisted layout of the original app
pub mod keys {
    pub const USERS: &str = "users";
    pub const THREADS: &str = "threads";
    pub const COMMENTS: &str = "comments";
    pub const REPORTS: &str = "reports";
    pub const ADS: &str = "ads";
    pub const CURRENT_USER: &str = "currentUser";
}

/// Key-value persistence port for named state slices
#[async_trait]
pub trait KvBackend: Send + Sync {
    /// Load the slice stored under `key`, `None` when absent
    async fn load(&self, key: &str) -> RepoResult<Option<serde_json::Value>>;

    /// Replace the slice stored under `key`
    async fn save(&self, key: &str, value: &serde_json::Value) -> RepoResult<()>;
}

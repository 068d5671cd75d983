//! JSON file implementation of the key-value backend
//!
//! One `<key>.json` file per slice under a data directory. Writes go to
//! a temp file first and are renamed into place, so a crash mid-write
//! leaves the previous slice intact.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument};

use lapau_common::config::StorageConfig;
use lapau_core::{DomainError, RepoResult};

use super::backend::KvBackend;

/// File-per-slice JSON backend
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    data_dir: PathBuf,
    pretty: bool,
}

impl JsonFileBackend {
    /// Create a backend rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            data_dir: data_dir.into(),
            pretty,
        }
    }

    /// Create a backend from the application's storage configuration
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.data_dir.clone(), config.pretty)
    }

    fn slice_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    async fn ensure_dir(&self) -> RepoResult<()> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| storage_error(&self.data_dir, e))
    }
}

fn storage_error(path: &Path, e: std::io::Error) -> DomainError {
    DomainError::StorageError(format!("{}: {e}", path.display()))
}

#[async_trait]
impl KvBackend for JsonFileBackend {
    #[instrument(skip(self))]
    async fn load(&self, key: &str) -> RepoResult<Option<serde_json::Value>> {
        let path = self.slice_path(key);

        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_error(&path, e)),
        };

        let value = serde_json::from_str(&raw).map_err(|e| {
            DomainError::StorageError(format!("corrupt slice {}: {e}", path.display()))
        })?;

        debug!(key, "slice loaded");
        Ok(Some(value))
    }

    #[instrument(skip(self, value))]
    async fn save(&self, key: &str, value: &serde_json::Value) -> RepoResult<()> {
        self.ensure_dir().await?;

        let raw = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(|e| DomainError::StorageError(format!("encode slice {key}: {e}")))?;

        let path = self.slice_path(key);
        let tmp = self.data_dir.join(format!("{key}.json.tmp"));

        fs::write(&tmp, raw)
            .await
            .map_err(|e| storage_error(&tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| storage_error(&path, e))?;

        debug!(key, "slice saved");
        Ok(())
    }
}

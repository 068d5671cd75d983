//! Slice-store implementation of SessionRepository

use async_trait::async_trait;
use tracing::instrument;

use lapau_core::traits::{RepoResult, SessionRepository};
use lapau_core::User;

use crate::store::SliceStore;

/// Slice-store implementation of the `currentUser` singleton slice
#[derive(Clone)]
pub struct KvSessionRepository {
    store: SliceStore,
}

impl KvSessionRepository {
    /// Create a new KvSessionRepository
    pub fn new(store: SliceStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for KvSessionRepository {
    #[instrument(skip(self))]
    async fn current_user(&self) -> RepoResult<Option<User>> {
        Ok(self.store.read(|s| s.current_user.clone()))
    }

    #[instrument(skip(self, user))]
    async fn set_current_user(&self, user: Option<&User>) -> RepoResult<()> {
        self.store.write(|s| s.current_user = user.cloned());
        self.store.persist_current_user().await
    }
}

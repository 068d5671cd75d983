//! Slice-store implementation of ThreadRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use lapau_core::traits::{RepoResult, ThreadRepository};
use lapau_core::{DomainError, Thread, ThreadStatus};

use crate::store::SliceStore;

/// Slice-store implementation of ThreadRepository
#[derive(Clone)]
pub struct KvThreadRepository {
    store: SliceStore,
}

impl KvThreadRepository {
    /// Create a new KvThreadRepository
    pub fn new(store: SliceStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ThreadRepository for KvThreadRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Thread>> {
        Ok(self
            .store
            .read(|s| s.threads.iter().find(|t| t.id == id).cloned()))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Thread>> {
        Ok(self.store.read(|s| s.threads.clone()))
    }

    #[instrument(skip(self))]
    async fn list_by_status(&self, status: ThreadStatus) -> RepoResult<Vec<Thread>> {
        Ok(self.store.read(|s| {
            s.threads
                .iter()
                .filter(|t| t.status == status)
                .cloned()
                .collect()
        }))
    }

    #[instrument(skip(self))]
    async fn list_by_author(&self, author_id: Uuid) -> RepoResult<Vec<Thread>> {
        Ok(self.store.read(|s| {
            s.threads
                .iter()
                .filter(|t| t.author_id == author_id)
                .cloned()
                .collect()
        }))
    }

    #[instrument(skip(self, thread))]
    async fn create(&self, thread: &Thread) -> RepoResult<()> {
        // Newest first, matching the insertion order the feed relies on
        self.store.write(|s| s.threads.insert(0, thread.clone()));
        self.store.persist_threads().await
    }

    #[instrument(skip(self, thread))]
    async fn update(&self, thread: &Thread) -> RepoResult<()> {
        let replaced = self.store.write(|s| {
            match s.threads.iter_mut().find(|t| t.id == thread.id) {
                Some(slot) => {
                    *slot = thread.clone();
                    true
                }
                None => false,
            }
        });

        if !replaced {
            return Err(DomainError::ThreadNotFound(thread.id));
        }
        self.store.persist_threads().await
    }
}

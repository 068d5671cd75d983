//! Slice-store implementation of CommentRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use lapau_core::traits::{CommentRepository, RepoResult};
use lapau_core::{Comment, DomainError};

use crate::store::SliceStore;

/// Slice-store implementation of CommentRepository
#[derive(Clone)]
pub struct KvCommentRepository {
    store: SliceStore,
}

impl KvCommentRepository {
    /// Create a new KvCommentRepository
    pub fn new(store: SliceStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentRepository for KvCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>> {
        Ok(self
            .store
            .read(|s| s.comments.iter().find(|c| c.id == id).cloned()))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Comment>> {
        Ok(self.store.read(|s| s.comments.clone()))
    }

    #[instrument(skip(self))]
    async fn list_by_thread(&self, thread_id: Uuid) -> RepoResult<Vec<Comment>> {
        Ok(self.store.read(|s| {
            s.comments
                .iter()
                .filter(|c| c.thread_id == thread_id)
                .cloned()
                .collect()
        }))
    }

    #[instrument(skip(self, comment))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.store.write(|s| s.comments.push(comment.clone()));
        self.store.persist_comments().await
    }

    #[instrument(skip(self, comment))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let replaced = self.store.write(|s| {
            match s.comments.iter_mut().find(|c| c.id == comment.id) {
                Some(slot) => {
                    *slot = comment.clone();
                    true
                }
                None => false,
            }
        });

        if !replaced {
            return Err(DomainError::CommentNotFound(comment.id));
        }
        self.store.persist_comments().await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let removed = self.store.write(|s| {
            let before = s.comments.len();
            s.comments.retain(|c| c.id != id);
            s.comments.len() != before
        });

        if !removed {
            return Err(DomainError::CommentNotFound(id));
        }
        self.store.persist_comments().await
    }
}

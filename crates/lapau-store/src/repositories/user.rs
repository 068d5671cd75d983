//! Slice-store implementation of UserRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use lapau_core::traits::{RepoResult, UserRepository};
use lapau_core::{DomainError, User};

use crate::store::SliceStore;

/// Slice-store implementation of UserRepository
#[derive(Clone)]
pub struct KvUserRepository {
    store: SliceStore,
}

impl KvUserRepository {
    /// Create a new KvUserRepository
    pub fn new(store: SliceStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for KvUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self
            .store
            .read(|s| s.users.iter().find(|u| u.id == id).cloned()))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        // Case-sensitive exact match, as the forum always compared names
        Ok(self
            .store
            .read(|s| s.users.iter().find(|u| u.username == username).cloned()))
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self
            .store
            .read(|s| s.users.iter().any(|u| u.username == username)))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        Ok(self.store.read(|s| s.users.clone()))
    }

    #[instrument(skip(self, user))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        self.store.write(|s| s.users.push(user.clone()));
        self.store.persist_users().await
    }

    #[instrument(skip(self, user))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let replaced = self.store.write(|s| {
            match s.users.iter_mut().find(|u| u.id == user.id) {
                Some(slot) => {
                    *slot = user.clone();
                    true
                }
                None => false,
            }
        });

        if !replaced {
            return Err(DomainError::UserNotFound(user.id));
        }
        self.store.persist_users().await
    }
}

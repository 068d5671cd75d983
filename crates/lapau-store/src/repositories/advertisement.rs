//! Slice-store implementation of AdRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use lapau_core::traits::{AdRepository, RepoResult};
use lapau_core::{AdPlacement, Advertisement, DomainError};

use crate::store::SliceStore;

/// Slice-store implementation of AdRepository
#[derive(Clone)]
pub struct KvAdRepository {
    store: SliceStore,
}

impl KvAdRepository {
    /// Create a new KvAdRepository
    pub fn new(store: SliceStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AdRepository for KvAdRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Advertisement>> {
        Ok(self.store.read(|s| s.ads.iter().find(|a| a.id == id).cloned()))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Advertisement>> {
        Ok(self.store.read(|s| s.ads.clone()))
    }

    #[instrument(skip(self))]
    async fn list_active_by_placement(
        &self,
        placement: AdPlacement,
    ) -> RepoResult<Vec<Advertisement>> {
        Ok(self.store.read(|s| {
            s.ads
                .iter()
                .filter(|a| a.is_active() && a.placement == placement)
                .cloned()
                .collect()
        }))
    }

    #[instrument(skip(self, ad))]
    async fn create(&self, ad: &Advertisement) -> RepoResult<()> {
        self.store.write(|s| s.ads.push(ad.clone()));
        self.store.persist_ads().await
    }

    #[instrument(skip(self, ad))]
    async fn update(&self, ad: &Advertisement) -> RepoResult<()> {
        let replaced = self.store.write(|s| {
            match s.ads.iter_mut().find(|a| a.id == ad.id) {
                Some(slot) => {
                    *slot = ad.clone();
                    true
                }
                None => false,
            }
        });

        if !replaced {
            return Err(DomainError::AdNotFound(ad.id));
        }
        self.store.persist_ads().await
    }
}

//! Feed service
//!
//! Read-side composition of the home feed: approval filtering, search,
//! category selection, recency ordering, trending ranking, and ad slot
//! interleaving. Nothing here mutates state.

use tracing::instrument;

use lapau_core::{AdPlacement, CategoryFilter, Thread, ThreadStatus};

use crate::dto::{AdResponse, FeedItem, ThreadResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// How many threads the trending list shows
const TRENDING_LIMIT: usize = 5;

/// Feed indices after which an in-feed ad unit is slotted
const AD_SLOTS: [usize; 2] = [2, 5];

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compose the home feed
    ///
    /// Only approved threads are ever visible. A non-empty search query
    /// matches title or content case-insensitively and bypasses the
    /// category filter entirely, which is the behavior the forum always
    /// had. Results are ordered newest first; ties keep insertion order.
    #[instrument(skip(self))]
    pub async fn compose(
        &self,
        filter: CategoryFilter,
        search: Option<&str>,
    ) -> ServiceResult<Vec<ThreadResponse>> {
        let approved = self.approved_threads().await?;

        let mut threads: Vec<Thread> = match search.filter(|q| !q.is_empty()) {
            Some(query) => approved
                .into_iter()
                .filter(|t| t.matches_search(query))
                .collect(),
            None => approved
                .into_iter()
                .filter(|t| filter.matches(t.category))
                .collect(),
        };

        // Stable sort: same-instant threads keep their insertion order
        threads.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(threads.iter().map(ThreadResponse::from).collect())
    }

    /// The top five threads by trending score
    ///
    /// Score is `comment_count * 2 + total reactions`; ties keep the
    /// collection order.
    #[instrument(skip(self))]
    pub async fn trending(&self) -> ServiceResult<Vec<ThreadResponse>> {
        let mut threads = self.approved_threads().await?;
        threads.sort_by(|a, b| b.trending_score().cmp(&a.trending_score()));
        threads.truncate(TRENDING_LIMIT);

        Ok(threads.iter().map(ThreadResponse::from).collect())
    }

    /// Compose the feed with in-feed ad units slotted in
    ///
    /// One active between-threads ad lands after the third feed item
    /// and one after the sixth, each only when that many feed items and
    /// ads exist. Fixed positions, not adaptive density.
    #[instrument(skip(self))]
    pub async fn compose_with_ads(
        &self,
        filter: CategoryFilter,
        search: Option<&str>,
    ) -> ServiceResult<Vec<FeedItem>> {
        let threads = self.compose(filter, search).await?;
        let ads = self
            .ctx
            .ad_repo()
            .list_active_by_placement(AdPlacement::BetweenThreads)
            .await?;

        let mut items = Vec::with_capacity(threads.len() + AD_SLOTS.len());
        for (index, thread) in threads.into_iter().enumerate() {
            items.push(FeedItem::Thread(thread));
            if let Some(slot) = AD_SLOTS.iter().position(|&at| at == index) {
                if let Some(ad) = ads.get(slot) {
                    items.push(FeedItem::Ad(AdResponse::from(ad)));
                }
            }
        }
        Ok(items)
    }

    /// Active sidebar ads in stored order
    #[instrument(skip(self))]
    pub async fn sidebar_ads(&self) -> ServiceResult<Vec<AdResponse>> {
        let ads = self
            .ctx
            .ad_repo()
            .list_active_by_placement(AdPlacement::Sidebar)
            .await?;
        Ok(ads.iter().map(AdResponse::from).collect())
    }

    async fn approved_threads(&self) -> ServiceResult<Vec<Thread>> {
        Ok(self
            .ctx
            .thread_repo()
            .list_by_status(ThreadStatus::Approved)
            .await?)
    }
}

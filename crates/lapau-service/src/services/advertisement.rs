//! Advertisement service
//!
//! Ads are administered externally; this service serves placement
//! queries and counts click-throughs.

use tracing::{info, instrument};
use uuid::Uuid;

use lapau_core::AdPlacement;

use crate::dto::AdResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Advertisement service
pub struct AdService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdService<'a> {
    /// Create a new AdService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Active ads for a placement, in stored order
    #[instrument(skip(self))]
    pub async fn list_active(&self, placement: AdPlacement) -> ServiceResult<Vec<AdResponse>> {
        let ads = self
            .ctx
            .ad_repo()
            .list_active_by_placement(placement)
            .await?;
        Ok(ads.iter().map(AdResponse::from).collect())
    }

    /// Count one click-through, returning the new total
    #[instrument(skip(self))]
    pub async fn record_click(&self, ad_id: Uuid) -> ServiceResult<u64> {
        let mut ad = self
            .ctx
            .ad_repo()
            .find_by_id(ad_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Advertisement", ad_id.to_string()))?;

        ad.record_click();
        self.ctx.ad_repo().update(&ad).await?;

        info!(ad_id = %ad.id, clicks = ad.clicks, "Ad click recorded");
        Ok(ad.clicks)
    }
}

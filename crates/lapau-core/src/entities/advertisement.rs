//! Advertisement entity - a sponsored content unit

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serving state of an ad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    #[default]
    Active,
    Inactive,
}

/// Where an ad unit is slotted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdPlacement {
    Sidebar,
    BetweenThreads,
}

/// Advertisement entity
///
/// Ads are seeded and administered by an external collaborator; the core
/// only filters them into the feed and counts click-throughs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub status: AdStatus,
    pub placement: AdPlacement,
    pub clicks: u64,
}

impl Advertisement {
    /// Create a new active Advertisement
    pub fn new(id: Uuid, title: String, content: String, placement: AdPlacement) -> Self {
        Self {
            id,
            title,
            content,
            image_url: None,
            target_url: None,
            status: AdStatus::Active,
            placement,
            clicks: 0,
        }
    }

    /// Check if the ad may currently be served
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == AdStatus::Active
    }

    /// Count one click-through
    pub fn record_click(&mut self) {
        self.clicks += 1;
    }
}

//! Persisted advertisement slice shape

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lapau_core::{AdPlacement, AdStatus};

/// Advertisement record as stored in the `ads` slice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdModel {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    pub status: AdStatus,
    pub placement: AdPlacement,
    #[serde(default)]
    pub clicks: u64,
}

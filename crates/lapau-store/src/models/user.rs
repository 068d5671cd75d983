//! Persisted user slice shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lapau_core::{UserLevel, UserRole};

/// User record as stored in the `users` slice
///
/// CamelCase keys and millisecond timestamps keep the files readable by
/// anything that understood the original app's persisted state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub level: UserLevel,
    pub total_posts: u32,
    pub total_reactions: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_color: Option<String>,
    #[serde(default, rename = "isUMKMVerified")]
    pub is_umkm_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umkm_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umkm_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
}

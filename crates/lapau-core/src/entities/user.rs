//! User entity - a forum member and their reputation record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::UserLevel;

/// Role of a forum member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// User entity
///
/// `total_posts` counts approved, non-anonymous threads. `total_reactions`
/// is the reaction total credited by the reaction engine. `level` is stored
/// for display but recomputed inside every totals mutator, so it cannot
/// drift from the totals it is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub level: UserLevel,
    pub total_posts: u32,
    pub total_reactions: u32,
    pub created_at: DateTime<Utc>,
    pub is_premium: bool,
    pub premium_color: Option<String>,
    pub is_umkm_verified: bool,
    pub umkm_name: Option<String>,
    pub umkm_description: Option<String>,
    pub avatar_color: Option<String>,
}

impl User {
    /// Create a new User with the lowest tier and zero totals
    pub fn new(id: Uuid, username: String) -> Self {
        Self::with_role(id, username, UserRole::User)
    }

    /// Create a new User with an explicit role
    pub fn with_role(id: Uuid, username: String, role: UserRole) -> Self {
        Self {
            id,
            username,
            role,
            level: UserLevel::AnakLapau,
            total_posts: 0,
            total_reactions: 0,
            created_at: Utc::now(),
            is_premium: false,
            premium_color: None,
            is_umkm_verified: false,
            umkm_name: None,
            umkm_description: None,
            avatar_color: None,
        }
    }

    /// Check if the user is an admin
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Credit one approved post and refresh the tier
    pub fn record_approved_post(&mut self) {
        self.total_posts += 1;
        self.refresh_level();
    }

    /// Replace the reaction total and refresh the tier
    pub fn set_reaction_total(&mut self, total: u32) {
        self.total_reactions = total;
        self.refresh_level();
    }

    /// Grant the premium badge
    pub fn grant_premium(&mut self, color: Option<String>) {
        self.is_premium = true;
        self.premium_color = color;
    }

    /// Mark the user as a verified UMKM owner
    pub fn verify_umkm(&mut self, name: String, description: String) {
        self.is_umkm_verified = true;
        self.umkm_name = Some(name);
        self.umkm_description = Some(description);
    }

    fn refresh_level(&mut self) {
        self.level = UserLevel::for_activity(self.total_posts, self.total_reactions);
    }
}

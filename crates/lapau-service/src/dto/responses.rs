//! Response DTOs handed to the presentation layer

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use lapau_core::{
    AdPlacement, Advertisement, Category, Comment, Media, ReactionBoard, Report, ReportStatus,
    Thread, ThreadStatus, User, UserLevel, UserRole,
};

/// User as shown on cards and profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub level: UserLevel,
    pub level_name: &'static str,
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

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
            level: user.level,
            level_name: user.level.display_name(),
            total_posts: user.total_posts,
            total_reactions: user.total_reactions,
            created_at: user.created_at,
            is_premium: user.is_premium,
            premium_color: user.premium_color.clone(),
            is_umkm_verified: user.is_umkm_verified,
            umkm_name: user.umkm_name.clone(),
            umkm_description: user.umkm_description.clone(),
            avatar_color: user.avatar_color.clone(),
        }
    }
}

/// Thread as shown in feeds and detail views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub status: ThreadStatus,
    pub created_at: DateTime<Utc>,
    pub reactions: ReactionBoard,
    pub comment_count: u32,
    pub is_anonymous: bool,
    pub rejection_note: Option<String>,
    pub media: Vec<Media>,
}

impl From<&Thread> for ThreadResponse {
    fn from(thread: &Thread) -> Self {
        Self {
            id: thread.id,
            author_id: thread.author_id,
            author_username: thread.author_username.clone(),
            title: thread.title.clone(),
            content: thread.content.clone(),
            category: thread.category,
            status: thread.status,
            created_at: thread.created_at,
            reactions: thread.reactions.clone(),
            comment_count: thread.comment_count,
            is_anonymous: thread.is_anonymous,
            rejection_note: thread.rejection_note.clone(),
            media: thread.media.clone(),
        }
    }
}

/// Comment as shown under a thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub parent_id: Option<Uuid>,
    pub is_petuah: bool,
    pub is_anonymous: bool,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            thread_id: comment.thread_id,
            author_id: comment.author_id,
            author_username: comment.author_username.clone(),
            content: comment.content.clone(),
            created_at: comment.created_at,
            parent_id: comment.parent_id,
            is_petuah: comment.is_petuah,
            is_anonymous: comment.is_anonymous,
        }
    }
}

/// Report as shown in the moderation queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportResponse {
    pub id: Uuid,
    pub thread_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,
    pub reporter_id: Uuid,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
}

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        let (thread_id, comment_id) = match report.target {
            lapau_core::ReportTarget::Thread(id) => (Some(id), None),
            lapau_core::ReportTarget::Comment(id) => (None, Some(id)),
        };

        Self {
            id: report.id,
            thread_id,
            comment_id,
            reporter_id: report.reporter_id,
            reason: report.reason.clone(),
            created_at: report.created_at,
            status: report.status,
        }
    }
}

/// Advertisement as shown in a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub placement: AdPlacement,
}

impl From<&Advertisement> for AdResponse {
    fn from(ad: &Advertisement) -> Self {
        Self {
            id: ad.id,
            title: ad.title.clone(),
            content: ad.content.clone(),
            image_url: ad.image_url.clone(),
            target_url: ad.target_url.clone(),
            placement: ad.placement,
        }
    }
}

/// One slot of the composed feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeedItem {
    Thread(ThreadResponse),
    Ad(AdResponse),
}

/// A profile view: the user plus their approved threads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub threads: Vec<ThreadResponse>,
}

/// Thread-shaped award winner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadAward {
    pub thread_id: Uuid,
    pub title: String,
    pub count: usize,
}

/// User-shaped award winner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAward {
    pub user_id: Uuid,
    pub username: String,
    pub count: usize,
}

/// The four community awards; absent winners mean an empty pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct AwardsResponse {
    pub most_active_thread: Option<ThreadAward>,
    pub top_rendang_user: Option<UserAward>,
    pub wisest_commenter: Option<UserAward>,
    pub most_controversial_thread: Option<ThreadAward>,
}

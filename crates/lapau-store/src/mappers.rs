//! Entity ↔ model mappers

use lapau_core::{
    Advertisement, Comment, DomainError, Report, ReportTarget, Thread, User,
};

use crate::models::{AdModel, CommentModel, ReportModel, ThreadModel, UserModel};

// ============================================================================
// User
// ============================================================================

impl From<&User> for UserModel {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
            level: user.level,
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

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        Self {
            id: model.id,
            username: model.username,
            role: model.role,
            level: model.level,
            total_posts: model.total_posts,
            total_reactions: model.total_reactions,
            created_at: model.created_at,
            is_premium: model.is_premium,
            premium_color: model.premium_color,
            is_umkm_verified: model.is_umkm_verified,
            umkm_name: model.umkm_name,
            umkm_description: model.umkm_description,
            avatar_color: model.avatar_color,
        }
    }
}

// ============================================================================
// Thread
// ============================================================================

impl From<&Thread> for ThreadModel {
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

impl From<ThreadModel> for Thread {
    fn from(model: ThreadModel) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            author_username: model.author_username,
            title: model.title,
            content: model.content,
            category: model.category,
            status: model.status,
            created_at: model.created_at,
            reactions: model.reactions,
            comment_count: model.comment_count,
            is_anonymous: model.is_anonymous,
            rejection_note: model.rejection_note,
            media: model.media,
        }
    }
}

// ============================================================================
// Comment
// ============================================================================

impl From<&Comment> for CommentModel {
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

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Self {
            id: model.id,
            thread_id: model.thread_id,
            author_id: model.author_id,
            author_username: model.author_username,
            content: model.content,
            created_at: model.created_at,
            parent_id: model.parent_id,
            is_petuah: model.is_petuah,
            is_anonymous: model.is_anonymous,
        }
    }
}

// ============================================================================
// Report
// ============================================================================

impl From<&Report> for ReportModel {
    fn from(report: &Report) -> Self {
        let (thread_id, comment_id) = match report.target {
            ReportTarget::Thread(id) => (Some(id), None),
            ReportTarget::Comment(id) => (None, Some(id)),
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

impl TryFrom<ReportModel> for Report {
    type Error = DomainError;

    fn try_from(model: ReportModel) -> Result<Self, Self::Error> {
        let target = match (model.thread_id, model.comment_id) {
            (Some(thread_id), None) => ReportTarget::Thread(thread_id),
            (None, Some(comment_id)) => ReportTarget::Comment(comment_id),
            _ => {
                return Err(DomainError::StorageError(format!(
                    "report {} must reference exactly one of thread or comment",
                    model.id
                )));
            }
        };

        Ok(Self {
            id: model.id,
            target,
            reporter_id: model.reporter_id,
            reason: model.reason,
            created_at: model.created_at,
            status: model.status,
        })
    }
}

// ============================================================================
// Advertisement
// ============================================================================

impl From<&Advertisement> for AdModel {
    fn from(ad: &Advertisement) -> Self {
        Self {
            id: ad.id,
            title: ad.title.clone(),
            content: ad.content.clone(),
            image_url: ad.image_url.clone(),
            target_url: ad.target_url.clone(),
            status: ad.status,
            placement: ad.placement,
            clicks: ad.clicks,
        }
    }
}

impl From<AdModel> for Advertisement {
    fn from(model: AdModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            image_url: model.image_url,
            target_url: model.target_url,
            status: model.status,
            placement: model.placement,
            clicks: model.clicks,
        }
    }
}

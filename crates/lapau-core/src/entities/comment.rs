//! Comment entity - a reply to a thread

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::thread::ANONYMOUS_AUTHOR;
use crate::entities::User;

/// Comment entity
///
/// `parent_id`, when set, references another comment on the same thread.
/// The data model allows arbitrary reply chains; presentation collapses
/// anything deeper than one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub parent_id: Option<Uuid>,
    /// Admin-curated "wise comment" badge
    pub is_petuah: bool,
    pub is_anonymous: bool,
}

impl Comment {
    /// Create a new Comment
    pub fn new(
        id: Uuid,
        thread_id: Uuid,
        author: &User,
        content: String,
        parent_id: Option<Uuid>,
        is_anonymous: bool,
    ) -> Self {
        let author_username = if is_anonymous {
            ANONYMOUS_AUTHOR.to_string()
        } else {
            author.username.clone()
        };

        Self {
            id,
            thread_id,
            author_id: author.id,
            author_username,
            content,
            created_at: Utc::now(),
            parent_id,
            is_petuah: false,
            is_anonymous,
        }
    }

    /// Check if this comment replies to another comment
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Flip the petuah badge
    pub fn toggle_petuah(&mut self) {
        self.is_petuah = !self.is_petuah;
    }
}

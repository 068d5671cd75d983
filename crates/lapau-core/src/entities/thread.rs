//! Thread entity - a top-level forum post

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Media, User};
use crate::error::DomainError;
use crate::value_objects::{Category, ReactionBoard, ReactionKind};

/// Display name substituted when a post is anonymous
pub const ANONYMOUS_AUTHOR: &str = "Urang Anonim";

/// Moderation state of a thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ThreadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Thread entity
///
/// Threads start `Pending` and move to `Approved` or `Rejected` exactly
/// once; both outcomes are terminal. `comment_count` is kept consistent
/// with the comment collection by the comment mutators below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: Uuid,
    pub author_id: Uuid,
    /// Denormalized display name; the anonymous label when `is_anonymous`
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

impl Thread {
    /// Create a new pending thread
    pub fn new(
        id: Uuid,
        author: &User,
        title: String,
        content: String,
        category: Category,
        is_anonymous: bool,
    ) -> Self {
        let author_username = if is_anonymous {
            ANONYMOUS_AUTHOR.to_string()
        } else {
            author.username.clone()
        };

        Self {
            id,
            author_id: author.id,
            author_username,
            title,
            content,
            category,
            status: ThreadStatus::Pending,
            created_at: Utc::now(),
            reactions: ReactionBoard::new(),
            comment_count: 0,
            is_anonymous,
            rejection_note: None,
            media: Vec::new(),
        }
    }

    /// Check if the thread has passed moderation
    #[inline]
    pub fn is_approved(&self) -> bool {
        self.status == ThreadStatus::Approved
    }

    /// Approve the thread
    ///
    /// Only valid from `Pending`; approval is terminal and may happen at
    /// most once, which keeps the author's post total from being credited
    /// twice.
    pub fn approve(&mut self) -> Result<(), DomainError> {
        self.transition_to(ThreadStatus::Approved)?;
        Ok(())
    }

    /// Reject the thread, keeping the moderator's optional note
    pub fn reject(&mut self, note: Option<String>) -> Result<(), DomainError> {
        self.transition_to(ThreadStatus::Rejected)?;
        self.rejection_note = note;
        Ok(())
    }

    fn transition_to(&mut self, next: ThreadStatus) -> Result<(), DomainError> {
        if self.status != ThreadStatus::Pending {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Credit one live comment
    pub fn record_comment_added(&mut self) {
        self.comment_count += 1;
    }

    /// Remove one live comment, never dropping below zero
    pub fn record_comment_removed(&mut self) {
        self.comment_count = self.comment_count.saturating_sub(1);
    }

    /// Ranking score: comments weigh double, reactions single
    #[must_use]
    pub fn trending_score(&self) -> u32 {
        self.comment_count * 2 + self.reactions.total() as u32
    }

    /// Heat score over the two sharp-tongued kinds only
    #[must_use]
    pub fn controversy_score(&self) -> usize {
        self.reactions.count(ReactionKind::Asin) + self.reactions.count(ReactionKind::SambaLado)
    }

    /// Case-insensitive substring match over title or content
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }
}

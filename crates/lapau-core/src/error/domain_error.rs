//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::entities::ThreadStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Unknown username: {0}")]
    UnknownUsername(String),

    #[error("Thread not found: {0}")]
    ThreadNotFound(Uuid),

    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    #[error("Report not found: {0}")]
    ReportNotFound(Uuid),

    #[error("Advertisement not found: {0}")]
    AdNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown reaction kind: {0}")]
    UnknownReaction(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Parent comment {0} does not belong to this thread")]
    ParentCommentMismatch(Uuid),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Admin role required")]
    AdminOnly,

    #[error("Only the comment author or an admin may delete a comment")]
    NotCommentAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition {
        from: ThreadStatus,
        to: ThreadStatus,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for presentation layers
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::UnknownUsername(_) => "UNKNOWN_USERNAME",
            Self::ThreadNotFound(_) => "UNKNOWN_THREAD",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReportNotFound(_) => "UNKNOWN_REPORT",
            Self::AdNotFound(_) => "UNKNOWN_AD",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UnknownReaction(_) => "UNKNOWN_REACTION",
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            Self::ParentCommentMismatch(_) => "PARENT_COMMENT_MISMATCH",

            // Authorization
            Self::AdminOnly => "ADMIN_ONLY",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",

            // Conflict
            Self::UsernameTaken(_) => "USERNAME_TAKEN",
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",

            // Infrastructure
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UnknownUsername(_)
                | Self::ThreadNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ReportNotFound(_)
                | Self::AdNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::UnknownReaction(_)
                | Self::UnknownCategory(_)
                | Self::ParentCommentMismatch(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AdminOnly | Self::NotCommentAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken(_) | Self::InvalidStatusTransition { .. }
        )
    }
}

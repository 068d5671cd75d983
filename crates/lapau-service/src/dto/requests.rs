//! Request DTOs for the presentation layer
//!
//! All mutating request DTOs implement `Deserialize` and `Validate`;
//! services re-validate every request instead of trusting the caller.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use lapau_core::Media;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 20, message = "Username must be 3-20 characters"))]
    pub username: String,
}

/// User login request
///
/// The password is received for form compatibility and never checked;
/// the forum authenticates by username lookup only.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Thread Requests
// ============================================================================

/// Create thread request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThreadRequest {
    #[validate(length(min = 1, max = 120, message = "Title must be 1-120 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,

    /// Category identifier, e.g. "lapau-umum"
    pub category: String,

    #[serde(default)]
    pub is_anonymous: bool,

    /// Already-encoded attachment descriptors
    #[serde(default)]
    pub media: Vec<Media>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Add comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCommentRequest {
    pub thread_id: Uuid,

    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,

    /// Reply target; must be a comment on the same thread
    pub parent_id: Option<Uuid>,

    #[serde(default)]
    pub is_anonymous: bool,
}

// ============================================================================
// Moderation Requests
// ============================================================================

/// Report request; exactly one of the two references must be set
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReportRequest {
    pub thread_id: Option<Uuid>,
    pub comment_id: Option<Uuid>,

    #[validate(length(max = 500, message = "Reason must be at most 500 characters"))]
    pub reason: Option<String>,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// UMKM verification request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UmkmVerificationRequest {
    #[validate(length(min = 1, max = 100, message = "Business name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "Description must be 1-500 characters"))]
    pub description: String,
}

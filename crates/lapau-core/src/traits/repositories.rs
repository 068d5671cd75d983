//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the storage layer provides
//! the implementation over the persisted state slices.

use async_trait::async_trait;

use crate::entities::{
    AdPlacement, Advertisement, Comment, Report, Thread, ThreadStatus, User,
};
use crate::error::DomainError;
use uuid::Uuid;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by exact, case-sensitive username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken (case-sensitive)
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// List all users in registration order
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Thread Repository
// ============================================================================

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Find thread by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Thread>>;

    /// List all threads, newest first (insertion order)
    async fn list(&self) -> RepoResult<Vec<Thread>>;

    /// List threads in a given moderation state
    async fn list_by_status(&self, status: ThreadStatus) -> RepoResult<Vec<Thread>>;

    /// List threads authored by a given user
    async fn list_by_author(&self, author_id: Uuid) -> RepoResult<Vec<Thread>>;

    /// Create a new thread at the head of the collection
    async fn create(&self, thread: &Thread) -> RepoResult<()>;

    /// Update an existing thread
    async fn update(&self, thread: &Thread) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>>;

    /// List all comments in creation order
    async fn list(&self) -> RepoResult<Vec<Comment>>;

    /// List comments on a thread in creation order
    async fn list_by_thread(&self, thread_id: Uuid) -> RepoResult<Vec<Comment>>;

    /// Create a new comment at the tail of the collection
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update an existing comment
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Remove a comment
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Find report by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Report>>;

    /// List all reports in creation order
    async fn list(&self) -> RepoResult<Vec<Report>>;

    /// List reports still awaiting review
    async fn list_pending(&self) -> RepoResult<Vec<Report>>;

    /// Create a new report
    async fn create(&self, report: &Report) -> RepoResult<()>;

    /// Mark every pending report against a thread as reviewed,
    /// returning how many were closed
    async fn mark_reviewed_for_thread(&self, thread_id: Uuid) -> RepoResult<usize>;

    /// Mark every pending report against a comment as reviewed,
    /// returning how many were closed
    async fn mark_reviewed_for_comment(&self, comment_id: Uuid) -> RepoResult<usize>;
}

// ============================================================================
// Advertisement Repository
// ============================================================================

#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Find ad by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Advertisement>>;

    /// List all ads
    async fn list(&self) -> RepoResult<Vec<Advertisement>>;

    /// List active ads for a placement, in stored order
    async fn list_active_by_placement(
        &self,
        placement: AdPlacement,
    ) -> RepoResult<Vec<Advertisement>>;

    /// Create a new ad
    async fn create(&self, ad: &Advertisement) -> RepoResult<()>;

    /// Update an existing ad
    async fn update(&self, ad: &Advertisement) -> RepoResult<()>;
}

// ============================================================================
// Session Repository
// ============================================================================

/// The nullable `current_user` singleton slice
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Get the signed-in user, if any
    async fn current_user(&self) -> RepoResult<Option<User>>;

    /// Replace the signed-in user (None signs out)
    async fn set_current_user(&self, user: Option<&User>) -> RepoResult<()>;
}

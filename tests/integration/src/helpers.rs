//! Test helpers for integration tests
//!
//! Spins up a complete service context over the in-memory backend so
//! tests exercise the whole stack without touching the filesystem.

use std::path::PathBuf;
use std::sync::Arc;

use lapau_core::{User, UserRole};
use lapau_service::dto::{CreateThreadRequest, RegisterRequest, UserResponse};
use lapau_service::{
    AdService, AuthService, AwardsService, CommentService, FeedService, ModerationService,
    ReactionService, ServiceContext, ThreadService, UserService,
};
use lapau_store::MemoryBackend;

use crate::fixtures::unique_suffix;

/// A forum wired over an in-memory backend
pub struct TestForum {
    pub ctx: ServiceContext,
}

impl TestForum {
    /// Start a forum with empty collections
    pub async fn start() -> Self {
        let ctx = ServiceContext::open(Arc::new(MemoryBackend::new()))
            .await
            .expect("failed to open in-memory context");
        Self { ctx }
    }

    // === Services ===

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.ctx)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(&self.ctx)
    }

    pub fn threads(&self) -> ThreadService<'_> {
        ThreadService::new(&self.ctx)
    }

    pub fn comments(&self) -> CommentService<'_> {
        CommentService::new(&self.ctx)
    }

    pub fn reactions(&self) -> ReactionService<'_> {
        ReactionService::new(&self.ctx)
    }

    pub fn moderation(&self) -> ModerationService<'_> {
        ModerationService::new(&self.ctx)
    }

    pub fn feed(&self) -> FeedService<'_> {
        FeedService::new(&self.ctx)
    }

    pub fn awards(&self) -> AwardsService<'_> {
        AwardsService::new(&self.ctx)
    }

    pub fn ads(&self) -> AdService<'_> {
        AdService::new(&self.ctx)
    }

    // === Shortcuts ===

    /// Register a user through the auth service
    pub async fn register(&self, username: &str) -> UserResponse {
        self.auth()
            .register(RegisterRequest {
                username: username.to_string(),
            })
            .await
            .expect("registration failed")
    }

    /// Create an admin directly in the user collection
    pub async fn create_admin(&self, username: &str) -> User {
        let admin = User::with_role(self.ctx.generate_id(), username.to_string(), UserRole::Admin);
        self.ctx
            .user_repo()
            .create(&admin)
            .await
            .expect("admin creation failed");
        admin
    }

    /// Submit a thread and approve it through moderation
    pub async fn approved_thread(
        &self,
        author_id: uuid::Uuid,
        admin_id: uuid::Uuid,
        title: &str,
    ) -> uuid::Uuid {
        let thread = self
            .threads()
            .create_thread(author_id, thread_request(title, "lapau-umum"))
            .await
            .expect("thread creation failed");
        self.moderation()
            .approve(admin_id, thread.id)
            .await
            .expect("approval failed");
        thread.id
    }
}

/// A well-formed thread request
pub fn thread_request(title: &str, category: &str) -> CreateThreadRequest {
    CreateThreadRequest {
        title: title.to_string(),
        content: format!("isi dari {title}"),
        category: category.to_string(),
        is_anonymous: false,
        media: Vec::new(),
    }
}

/// A scratch directory for file-backend tests
pub fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!(
        "lapau-integration-{}-{}",
        std::process::id(),
        unique_suffix()
    ))
}

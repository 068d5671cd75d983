//! Thread service
//!
//! Creates threads into the moderation queue and serves single-thread
//! lookups.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use lapau_core::{Category, Thread, User};

use crate::dto::{CreateThreadRequest, ThreadResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Thread service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new thread in the `Pending` state
    ///
    /// Requires an authenticated actor; anonymous threads mask the
    /// author name while keeping the author id for ownership checks.
    #[instrument(skip(self, request))]
    pub async fn create_thread(
        &self,
        actor_id: Uuid,
        request: CreateThreadRequest,
    ) -> ServiceResult<ThreadResponse> {
        let actor = self.require_actor(actor_id).await?;
        request.validate()?;
        let category = Category::parse(&request.category)?;

        let mut thread = Thread::new(
            self.ctx.generate_id(),
            &actor,
            request.title,
            request.content,
            category,
            request.is_anonymous,
        );
        thread.media = request.media;

        self.ctx.thread_repo().create(&thread).await?;

        info!(
            thread_id = %thread.id,
            category = %thread.category,
            is_anonymous = thread.is_anonymous,
            "Thread submitted for review"
        );
        Ok(ThreadResponse::from(&thread))
    }

    /// Get a thread by id
    #[instrument(skip(self))]
    pub async fn get_thread(&self, thread_id: Uuid) -> ServiceResult<ThreadResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", thread_id.to_string()))?;

        Ok(ThreadResponse::from(&thread))
    }

    async fn require_actor(&self, actor_id: Uuid) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", actor_id.to_string()))
    }
}

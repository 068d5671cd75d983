//! Comment service
//!
//! Adds comments under a thread, keeping the thread's denormalized
//! `comment_count` in step with the collection.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use lapau_core::{Comment, DomainError, User};

use crate::dto::{AddCommentRequest, CommentResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a thread
    ///
    /// A reply's `parent_id` must reference a comment on the same
    /// thread. The owning thread's `comment_count` is incremented in
    /// the same operation.
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        actor_id: Uuid,
        request: AddCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let actor = self.require_actor(actor_id).await?;
        request.validate()?;

        let mut thread = self
            .ctx
            .thread_repo()
            .find_by_id(request.thread_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", request.thread_id.to_string()))?;

        if let Some(parent_id) = request.parent_id {
            let parent = self
                .ctx
                .comment_repo()
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Comment", parent_id.to_string()))?;
            if parent.thread_id != thread.id {
                return Err(DomainError::ParentCommentMismatch(parent_id).into());
            }
        }

        let comment = Comment::new(
            self.ctx.generate_id(),
            thread.id,
            &actor,
            request.content,
            request.parent_id,
            request.is_anonymous,
        );
        self.ctx.comment_repo().create(&comment).await?;

        thread.record_comment_added();
        self.ctx.thread_repo().update(&thread).await?;

        info!(
            comment_id = %comment.id,
            thread_id = %thread.id,
            is_reply = comment.is_reply(),
            "Comment added"
        );
        Ok(CommentResponse::from(&comment))
    }

    /// List a thread's comments in creation order
    #[instrument(skip(self))]
    pub async fn list_for_thread(&self, thread_id: Uuid) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().list_by_thread(thread_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    async fn require_actor(&self, actor_id: Uuid) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", actor_id.to_string()))
    }
}

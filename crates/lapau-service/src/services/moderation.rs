//! Moderation service
//!
//! Thread review (approve/reject), comment removal, petuah curation,
//! and the report queue. The service is the single authority on who may
//! do what: every operation takes an explicit actor and re-checks the
//! role instead of trusting the caller.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use lapau_core::{DomainError, Report, ReportTarget, User};

use crate::dto::{ReportRequest, ReportResponse, ThreadResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Approve a pending thread
    ///
    /// Only valid from `Pending`, so a repeated approval cannot credit
    /// the author twice. A non-anonymous author gains one approved
    /// post; pending reports against the thread are closed.
    #[instrument(skip(self))]
    pub async fn approve(&self, actor_id: Uuid, thread_id: Uuid) -> ServiceResult<ThreadResponse> {
        self.require_admin(actor_id).await?;

        let mut thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", thread_id.to_string()))?;

        thread.approve()?;
        self.ctx.thread_repo().update(&thread).await?;

        if !thread.is_anonymous {
            if let Some(mut author) = self.ctx.user_repo().find_by_id(thread.author_id).await? {
                author.record_approved_post();
                self.ctx.user_repo().update(&author).await?;
            }
        }

        let closed = self
            .ctx
            .report_repo()
            .mark_reviewed_for_thread(thread.id)
            .await?;

        info!(thread_id = %thread.id, reports_closed = closed, "Thread approved");
        Ok(ThreadResponse::from(&thread))
    }

    /// Reject a pending thread, keeping the moderator's optional note
    #[instrument(skip(self, note))]
    pub async fn reject(
        &self,
        actor_id: Uuid,
        thread_id: Uuid,
        note: Option<String>,
    ) -> ServiceResult<ThreadResponse> {
        self.require_admin(actor_id).await?;

        let mut thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", thread_id.to_string()))?;

        thread.reject(note)?;
        self.ctx.thread_repo().update(&thread).await?;

        let closed = self
            .ctx
            .report_repo()
            .mark_reviewed_for_thread(thread.id)
            .await?;

        info!(thread_id = %thread.id, reports_closed = closed, "Thread rejected");
        Ok(ThreadResponse::from(&thread))
    }

    /// Delete a comment
    ///
    /// Allowed for the comment's author and for admins. The owning
    /// thread's `comment_count` drops by one, floored at zero, and
    /// pending reports against the comment are closed.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, actor_id: Uuid, comment_id: Uuid) -> ServiceResult<()> {
        let actor = self.require_actor(actor_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        if comment.author_id != actor.id && !actor.is_admin() {
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(comment.id).await?;

        if let Some(mut thread) = self.ctx.thread_repo().find_by_id(comment.thread_id).await? {
            thread.record_comment_removed();
            self.ctx.thread_repo().update(&thread).await?;
        }

        let closed = self
            .ctx
            .report_repo()
            .mark_reviewed_for_comment(comment.id)
            .await?;

        info!(
            comment_id = %comment.id,
            thread_id = %comment.thread_id,
            reports_closed = closed,
            "Comment deleted"
        );
        Ok(())
    }

    /// Toggle the petuah badge on a comment, admin only
    #[instrument(skip(self))]
    pub async fn mark_petuah(&self, actor_id: Uuid, comment_id: Uuid) -> ServiceResult<bool> {
        self.require_admin(actor_id).await?;

        let mut comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        comment.toggle_petuah();
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment.id, is_petuah = comment.is_petuah, "Petuah toggled");
        Ok(comment.is_petuah)
    }

    /// File a report against a thread or a comment
    ///
    /// The target must exist and be exactly one of the two references.
    #[instrument(skip(self, request))]
    pub async fn report(
        &self,
        actor_id: Uuid,
        request: ReportRequest,
    ) -> ServiceResult<ReportResponse> {
        let actor = self.require_actor(actor_id).await?;
        request.validate()?;

        let target = match (request.thread_id, request.comment_id) {
            (Some(thread_id), None) => {
                self.ctx
                    .thread_repo()
                    .find_by_id(thread_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Thread", thread_id.to_string()))?;
                ReportTarget::Thread(thread_id)
            }
            (None, Some(comment_id)) => {
                self.ctx
                    .comment_repo()
                    .find_by_id(comment_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;
                ReportTarget::Comment(comment_id)
            }
            _ => {
                return Err(ServiceError::validation(
                    "a report must reference exactly one of thread or comment",
                ));
            }
        };

        let report = Report::new(self.ctx.generate_id(), target, actor.id, request.reason);
        self.ctx.report_repo().create(&report).await?;

        info!(report_id = %report.id, "Report filed");
        Ok(ReportResponse::from(&report))
    }

    /// Threads awaiting review, admin only
    #[instrument(skip(self))]
    pub async fn list_pending_threads(&self, actor_id: Uuid) -> ServiceResult<Vec<ThreadResponse>> {
        self.require_admin(actor_id).await?;

        let threads = self
            .ctx
            .thread_repo()
            .list_by_status(lapau_core::ThreadStatus::Pending)
            .await?;
        Ok(threads.iter().map(ThreadResponse::from).collect())
    }

    /// All reports, admin only
    #[instrument(skip(self))]
    pub async fn list_reports(&self, actor_id: Uuid) -> ServiceResult<Vec<ReportResponse>> {
        self.require_admin(actor_id).await?;

        let reports = self.ctx.report_repo().list().await?;
        Ok(reports.iter().map(ReportResponse::from).collect())
    }

    async fn require_actor(&self, actor_id: Uuid) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", actor_id.to_string()))
    }

    async fn require_admin(&self, actor_id: Uuid) -> ServiceResult<User> {
        let actor = self.require_actor(actor_id).await?;
        if !actor.is_admin() {
            return Err(DomainError::AdminOnly.into());
        }
        Ok(actor)
    }
}

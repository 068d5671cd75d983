//! Reaction service
//!
//! Toggles a user's single reaction on a thread and keeps the author's
//! reaction total in step.

use tracing::{debug, info, instrument};
use uuid::Uuid;

use lapau_core::{BoardChange, ReactionKind, User};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// What a toggle request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// The actor now reacts with the kind
    Added(ReactionKind),
    /// The actor's reaction of the kind was removed
    Removed(ReactionKind),
    /// Self-reaction on an owned, non-anonymous thread; nothing changed
    Ignored,
}

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the actor's reaction of `kind` on a thread
    ///
    /// A second toggle of the same kind removes it; a different kind
    /// moves the reaction, so the actor appears under at most one kind.
    /// Authors cannot react to their own thread unless it was posted
    /// anonymously; that case is a silent no-op rather than an error.
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        actor_id: Uuid,
        thread_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<ReactionOutcome> {
        let actor = self.require_actor(actor_id).await?;

        let mut thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thread", thread_id.to_string()))?;

        if thread.author_id == actor.id && !thread.is_anonymous {
            debug!(thread_id = %thread.id, "Self-reaction ignored");
            return Ok(ReactionOutcome::Ignored);
        }

        let change = thread.reactions.toggle(actor.id, kind);
        let reaction_total = thread.reactions.total() as u32;
        self.ctx.thread_repo().update(&thread).await?;

        // Credit the author with the total of this one thread. This is
        // the scoping the forum always had: the stored user total tracks
        // the most recently reacted thread, not a sum over all threads.
        if !thread.is_anonymous {
            if let Some(mut author) = self.ctx.user_repo().find_by_id(thread.author_id).await? {
                author.set_reaction_total(reaction_total);
                self.ctx.user_repo().update(&author).await?;
            }
        }

        let outcome = match change {
            BoardChange::Added => ReactionOutcome::Added(kind),
            BoardChange::Removed => ReactionOutcome::Removed(kind),
        };
        info!(thread_id = %thread.id, kind = %kind, ?outcome, "Reaction toggled");
        Ok(outcome)
    }

    /// Toggle a reaction given by its wire name
    ///
    /// Unknown kinds are rejected before any state is touched.
    #[instrument(skip(self))]
    pub async fn toggle_named(
        &self,
        actor_id: Uuid,
        thread_id: Uuid,
        kind: &str,
    ) -> ServiceResult<ReactionOutcome> {
        let kind = ReactionKind::parse(kind)?;
        self.toggle(actor_id, thread_id, kind).await
    }

    async fn require_actor(&self, actor_id: Uuid) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", actor_id.to_string()))
    }
}

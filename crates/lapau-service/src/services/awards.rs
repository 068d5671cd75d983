//! Awards service
//!
//! Derives the four community awards from the current collections.
//! Every derivation is first-winner-on-ties and yields no winner when
//! its candidate pool is empty.

use std::collections::HashMap;

use tracing::instrument;
use uuid::Uuid;

use lapau_core::{ReactionKind, Thread, ThreadStatus, User};

use crate::dto::{AwardsResponse, ThreadAward, UserAward};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Awards service
pub struct AwardsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AwardsService<'a> {
    /// Create a new AwardsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute all four awards over approved threads and all comments
    #[instrument(skip(self))]
    pub async fn compute(&self) -> ServiceResult<AwardsResponse> {
        let threads = self
            .ctx
            .thread_repo()
            .list_by_status(ThreadStatus::Approved)
            .await?;
        let users = self.ctx.user_repo().list().await?;
        let comments = self.ctx.comment_repo().list().await?;

        let most_active_thread = max_thread(&threads, |t| t.comment_count as usize);
        let most_controversial_thread = max_thread(&threads, Thread::controversy_score);
        let top_rendang_user = top_rendang(&users, &threads);
        let wisest_commenter = wisest(&users, &comments);

        Ok(AwardsResponse {
            most_active_thread,
            top_rendang_user,
            wisest_commenter,
            most_controversial_thread,
        })
    }
}

/// Max over threads by `score`; the first encountered thread wins ties.
/// A non-empty pool always yields a winner, even at score zero.
fn max_thread(threads: &[Thread], score: impl Fn(&Thread) -> usize) -> Option<ThreadAward> {
    let mut best: Option<&Thread> = None;
    for thread in threads {
        match best {
            Some(current) if score(thread) <= score(current) => {}
            _ => best = Some(thread),
        }
    }
    best.map(|t| ThreadAward {
        thread_id: t.id,
        title: t.title.clone(),
        count: score(t),
    })
}

/// Per user, the rendang reactions summed across approved threads they
/// authored; highest wins, user collection order breaks ties.
fn top_rendang(users: &[User], threads: &[Thread]) -> Option<UserAward> {
    let mut best: Option<UserAward> = None;
    for user in users {
        let count: usize = threads
            .iter()
            .filter(|t| t.author_id == user.id)
            .map(|t| t.reactions.count(ReactionKind::Rendang))
            .sum();

        match &best {
            Some(current) if count <= current.count => {}
            _ => {
                best = Some(UserAward {
                    user_id: user.id,
                    username: user.username.clone(),
                    count,
                });
            }
        }
    }
    best
}

/// Petuah comments grouped by author; highest count wins, first
/// occurrence order breaks ties. No petuah comments means no winner.
fn wisest(users: &[User], comments: &[lapau_core::Comment]) -> Option<UserAward> {
    let mut counts: HashMap<Uuid, usize> = HashMap::new();
    let mut order: Vec<Uuid> = Vec::new();

    for comment in comments.iter().filter(|c| c.is_petuah) {
        let entry = counts.entry(comment.author_id).or_insert(0);
        if *entry == 0 {
            order.push(comment.author_id);
        }
        *entry += 1;
    }

    let mut best: Option<(Uuid, usize)> = None;
    for author_id in order {
        let count = counts[&author_id];
        match best {
            Some((_, current)) if count <= current => {}
            _ => best = Some((author_id, count)),
        }
    }

    let (author_id, count) = best?;
    let user = users.iter().find(|u| u.id == author_id)?;
    Some(UserAward {
        user_id: user.id,
        username: user.username.clone(),
        count,
    })
}

//! Service context - dependency container for services
//!
//! Holds the repositories every service operates on.

use std::sync::Arc;

use uuid::Uuid;

use lapau_core::traits::{
    AdRepository, CommentRepository, ReportRepository, SessionRepository, ThreadRepository,
    UserRepository,
};
use lapau_store::{
    KvAdRepository, KvBackend, KvCommentRepository, KvReportRepository, KvSessionRepository,
    KvThreadRepository, KvUserRepository, SliceStore,
};

use super::error::ServiceResult;

/// Service context containing all dependencies
///
/// This is the dependency container passed to every service. It holds
/// the repositories for the five collections plus the session slice, and
/// generates entity ids.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    report_repo: Arc<dyn ReportRepository>,
    ad_repo: Arc<dyn AdRepository>,
    session_repo: Arc<dyn SessionRepository>,
}

impl ServiceContext {
    /// Create a new service context from explicit repositories
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        report_repo: Arc<dyn ReportRepository>,
        ad_repo: Arc<dyn AdRepository>,
        session_repo: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            user_repo,
            thread_repo,
            comment_repo,
            report_repo,
            ad_repo,
            session_repo,
        }
    }

    /// Open the slice store on `backend` and wire up the standard
    /// repository set
    pub async fn open(backend: Arc<dyn KvBackend>) -> ServiceResult<Self> {
        let store = SliceStore::open(backend).await?;
        Ok(Self::new(
            Arc::new(KvUserRepository::new(store.clone())),
            Arc::new(KvThreadRepository::new(store.clone())),
            Arc::new(KvCommentRepository::new(store.clone())),
            Arc::new(KvReportRepository::new(store.clone())),
            Arc::new(KvAdRepository::new(store.clone())),
            Arc::new(KvSessionRepository::new(store)),
        ))
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the thread repository
    pub fn thread_repo(&self) -> &dyn ThreadRepository {
        self.thread_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    /// Get the advertisement repository
    pub fn ad_repo(&self) -> &dyn AdRepository {
        self.ad_repo.as_ref()
    }

    /// Get the session repository
    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    // === IDs ===

    /// Generate a new entity id
    pub fn generate_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

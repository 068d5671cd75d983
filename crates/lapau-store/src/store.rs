//! Shared in-memory state mirrored into the key-value backend
//!
//! All repositories operate on one `SliceStore`: reads clone out of the
//! in-memory collections, writes mutate them under the lock and then
//! persist the affected slice as a whole value. There is a single
//! logical actor, so the lock only guards against torn reads, not
//! concurrent editors.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, instrument};

use lapau_core::{
    Advertisement, Comment, DomainError, RepoResult, Report, Thread, User,
};

use crate::kv::{keys, KvBackend};
use crate::models::{AdModel, CommentModel, ReportModel, ThreadModel, UserModel};

/// The five collections plus the session singleton
#[derive(Debug, Default)]
pub(crate) struct ForumState {
    pub users: Vec<User>,
    pub threads: Vec<Thread>,
    pub comments: Vec<Comment>,
    pub reports: Vec<Report>,
    pub ads: Vec<Advertisement>,
    pub current_user: Option<User>,
}

struct StoreInner {
    backend: Arc<dyn KvBackend>,
    state: RwLock<ForumState>,
}

/// Handle to the loaded state slices
#[derive(Clone)]
pub struct SliceStore {
    inner: Arc<StoreInner>,
}

fn encode_error(slice: &str, e: serde_json::Error) -> DomainError {
    DomainError::StorageError(format!("encode {slice} slice: {e}"))
}

fn decode_error(slice: &str, e: serde_json::Error) -> DomainError {
    DomainError::StorageError(format!("decode {slice} slice: {e}"))
}

impl SliceStore {
    /// Load every slice from the backend
    ///
    /// Absent slices become empty collections; a slice that exists but
    /// cannot be decoded is a storage error, not silently dropped data.
    #[instrument(skip(backend))]
    pub async fn open(backend: Arc<dyn KvBackend>) -> RepoResult<Self> {
        let users: Vec<User> = match backend.load(keys::USERS).await? {
            Some(value) => serde_json::from_value::<Vec<UserModel>>(value)
                .map_err(|e| decode_error(keys::USERS, e))?
                .into_iter()
                .map(User::from)
                .collect(),
            None => Vec::new(),
        };

        let threads: Vec<Thread> = match backend.load(keys::THREADS).await? {
            Some(value) => serde_json::from_value::<Vec<ThreadModel>>(value)
                .map_err(|e| decode_error(keys::THREADS, e))?
                .into_iter()
                .map(Thread::from)
                .collect(),
            None => Vec::new(),
        };

        let comments: Vec<Comment> = match backend.load(keys::COMMENTS).await? {
            Some(value) => serde_json::from_value::<Vec<CommentModel>>(value)
                .map_err(|e| decode_error(keys::COMMENTS, e))?
                .into_iter()
                .map(Comment::from)
                .collect(),
            None => Vec::new(),
        };

        let reports: Vec<Report> = match backend.load(keys::REPORTS).await? {
            Some(value) => serde_json::from_value::<Vec<ReportModel>>(value)
                .map_err(|e| decode_error(keys::REPORTS, e))?
                .into_iter()
                .map(Report::try_from)
                .collect::<Result<_, _>>()?,
            None => Vec::new(),
        };

        let ads: Vec<Advertisement> = match backend.load(keys::ADS).await? {
            Some(value) => serde_json::from_value::<Vec<AdModel>>(value)
                .map_err(|e| decode_error(keys::ADS, e))?
                .into_iter()
                .map(Advertisement::from)
                .collect(),
            None => Vec::new(),
        };

        let current_user: Option<User> = match backend.load(keys::CURRENT_USER).await? {
            Some(value) => serde_json::from_value::<Option<UserModel>>(value)
                .map_err(|e| decode_error(keys::CURRENT_USER, e))?
                .map(User::from),
            None => None,
        };

        info!(
            users = users.len(),
            threads = threads.len(),
            comments = comments.len(),
            reports = reports.len(),
            ads = ads.len(),
            "state slices loaded"
        );

        Ok(Self {
            inner: Arc::new(StoreInner {
                backend,
                state: RwLock::new(ForumState {
                    users,
                    threads,
                    comments,
                    reports,
                    ads,
                    current_user,
                }),
            }),
        })
    }

    /// Whether every seeded collection is empty (first-run check)
    pub fn is_unseeded(&self) -> bool {
        self.read(|s| {
            s.users.is_empty() && s.threads.is_empty() && s.comments.is_empty() && s.ads.is_empty()
        })
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&ForumState) -> R) -> R {
        f(&self.inner.state.read())
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut ForumState) -> R) -> R {
        f(&mut self.inner.state.write())
    }

    // === Slice persistence ===
    //
    // Serialization happens under the read lock; the backend write does
    // not, so a slow disk never blocks other readers.

    pub(crate) async fn persist_users(&self) -> RepoResult<()> {
        let value = self
            .read(|s| serde_json::to_value(s.users.iter().map(UserModel::from).collect::<Vec<_>>()))
            .map_err(|e| encode_error(keys::USERS, e))?;
        self.inner.backend.save(keys::USERS, &value).await
    }

    pub(crate) async fn persist_threads(&self) -> RepoResult<()> {
        let value = self
            .read(|s| {
                serde_json::to_value(s.threads.iter().map(ThreadModel::from).collect::<Vec<_>>())
            })
            .map_err(|e| encode_error(keys::THREADS, e))?;
        self.inner.backend.save(keys::THREADS, &value).await
    }

    pub(crate) async fn persist_comments(&self) -> RepoResult<()> {
        let value = self
            .read(|s| {
                serde_json::to_value(s.comments.iter().map(CommentModel::from).collect::<Vec<_>>())
            })
            .map_err(|e| encode_error(keys::COMMENTS, e))?;
        self.inner.backend.save(keys::COMMENTS, &value).await
    }

    pub(crate) async fn persist_reports(&self) -> RepoResult<()> {
        let value = self
            .read(|s| {
                serde_json::to_value(s.reports.iter().map(ReportModel::from).collect::<Vec<_>>())
            })
            .map_err(|e| encode_error(keys::REPORTS, e))?;
        self.inner.backend.save(keys::REPORTS, &value).await
    }

    pub(crate) async fn persist_ads(&self) -> RepoResult<()> {
        let value = self
            .read(|s| serde_json::to_value(s.ads.iter().map(AdModel::from).collect::<Vec<_>>()))
            .map_err(|e| encode_error(keys::ADS, e))?;
        self.inner.backend.save(keys::ADS, &value).await
    }

    pub(crate) async fn persist_current_user(&self) -> RepoResult<()> {
        let value = self
            .read(|s| serde_json::to_value(s.current_user.as_ref().map(UserModel::from)))
            .map_err(|e| encode_error(keys::CURRENT_USER, e))?;
        self.inner.backend.save(keys::CURRENT_USER, &value).await
    }
}

impl std::fmt::Debug for SliceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (users, threads, comments) =
            self.read(|s| (s.users.len(), s.threads.len(), s.comments.len()));
        f.debug_struct("SliceStore")
            .field("users", &users)
            .field("threads", &threads)
            .field("comments", &comments)
            .finish()
    }
}

//! Slice-store implementation of ReportRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use lapau_core::traits::{RepoResult, ReportRepository};
use lapau_core::Report;

use crate::store::SliceStore;

/// Slice-store implementation of ReportRepository
#[derive(Clone)]
pub struct KvReportRepository {
    store: SliceStore,
}

impl KvReportRepository {
    /// Create a new KvReportRepository
    pub fn new(store: SliceStore) -> Self {
        Self { store }
    }

    async fn mark_reviewed_where(
        &self,
        matcher: impl Fn(&Report) -> bool + Send,
    ) -> RepoResult<usize> {
        let closed = self.store.write(|s| {
            let mut closed = 0;
            for report in s.reports.iter_mut() {
                if report.is_pending() && matcher(report) {
                    report.mark_reviewed();
                    closed += 1;
                }
            }
            closed
        });

        if closed > 0 {
            self.store.persist_reports().await?;
        }
        Ok(closed)
    }
}

#[async_trait]
impl ReportRepository for KvReportRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Report>> {
        Ok(self
            .store
            .read(|s| s.reports.iter().find(|r| r.id == id).cloned()))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Report>> {
        Ok(self.store.read(|s| s.reports.clone()))
    }

    #[instrument(skip(self))]
    async fn list_pending(&self) -> RepoResult<Vec<Report>> {
        Ok(self.store.read(|s| {
            s.reports
                .iter()
                .filter(|r| r.is_pending())
                .cloned()
                .collect()
        }))
    }

    #[instrument(skip(self, report))]
    async fn create(&self, report: &Report) -> RepoResult<()> {
        self.store.write(|s| s.reports.push(report.clone()));
        self.store.persist_reports().await
    }

    #[instrument(skip(self))]
    async fn mark_reviewed_for_thread(&self, thread_id: Uuid) -> RepoResult<usize> {
        self.mark_reviewed_where(move |r| r.concerns_thread(thread_id))
            .await
    }

    #[instrument(skip(self))]
    async fn mark_reviewed_for_comment(&self, comment_id: Uuid) -> RepoResult<usize> {
        self.mark_reviewed_where(move |r| r.concerns_comment(comment_id))
            .await
    }
}

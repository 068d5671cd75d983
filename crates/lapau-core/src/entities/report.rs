//! Report entity - a flag raised against a thread or a comment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a report points at
///
/// Exactly one reference, by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTarget {
    Thread(Uuid),
    Comment(Uuid),
}

/// Review state of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending,
    Reviewed,
}

/// Report entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: Uuid,
    pub target: ReportTarget,
    pub reporter_id: Uuid,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
}

impl Report {
    /// Create a new pending Report
    pub fn new(id: Uuid, target: ReportTarget, reporter_id: Uuid, reason: Option<String>) -> Self {
        Self {
            id,
            target,
            reporter_id,
            reason,
            created_at: Utc::now(),
            status: ReportStatus::Pending,
        }
    }

    /// Check if the report still awaits review
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == ReportStatus::Pending
    }

    /// Close the report
    pub fn mark_reviewed(&mut self) {
        self.status = ReportStatus::Reviewed;
    }

    /// Check if the report points at the given thread
    #[must_use]
    pub fn concerns_thread(&self, thread_id: Uuid) -> bool {
        matches!(self.target, ReportTarget::Thread(id) if id == thread_id)
    }

    /// Check if the report points at the given comment
    #[must_use]
    pub fn concerns_comment(&self, comment_id: Uuid) -> bool {
        matches!(self.target, ReportTarget::Comment(id) if id == comment_id)
    }
}

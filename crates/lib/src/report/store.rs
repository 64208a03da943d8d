//! In-memory, append-only report collection.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::types::{Aggregate, Report, ReportId, ScanStatus, Severity, language_for};
use crate::clock::{Clock, SystemClock};

/// Insertion-ordered list of reports.
///
/// Ids are assigned as `len + 1` under the write lock, so they are
/// exactly `1..=n` in upload order. Reports are never updated or removed.
/// Cloning is cheap and every clone shares the same list.
#[derive(Clone, Debug)]
pub struct ReportStore {
    reports: Arc<RwLock<Vec<Report>>>,
    clock: Arc<dyn Clock>,
}

impl ReportStore {
    /// Create an empty store stamped with wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store using the given time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            reports: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    /// Record a newly uploaded file.
    ///
    /// The report starts `Pending` with no vulnerabilities at `Low`
    /// severity. Uploading the same name twice yields two reports.
    pub async fn append(&self, file_name: &str, uploaded_by: &str) -> Report {
        let mut reports = self.reports.write().await;
        let report = Report {
            id: ReportId(reports.len() as u64 + 1),
            file_name: file_name.to_string(),
            language: language_for(file_name),
            status: ScanStatus::Pending,
            vulns: 0,
            severity: Severity::Low,
            uploaded_by: uploaded_by.to_string(),
            uploaded_at: self.clock.now(),
        };
        reports.push(report.clone());
        report
    }

    /// Snapshot of every report in upload order.
    pub async fn list_all(&self) -> Vec<Report> {
        self.reports.read().await.clone()
    }

    /// Look up a report by id.
    pub async fn find_by_id(&self, id: ReportId) -> Option<Report> {
        let reports = self.reports.read().await;
        reports.iter().find(|r| r.id == id).cloned()
    }

    /// Recompute the aggregate statistics over every report.
    pub async fn aggregate(&self) -> Aggregate {
        let reports = self.reports.read().await;
        Aggregate::from_reports(reports.iter())
    }

    /// Reports and aggregate taken under one read lock, so the two agree.
    pub async fn snapshot(&self) -> (Vec<Report>, Aggregate) {
        let reports = self.reports.read().await;
        (reports.clone(), Aggregate::from_reports(reports.iter()))
    }

    /// Number of stored reports.
    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }

    /// Whether no report has been recorded yet.
    pub async fn is_empty(&self) -> bool {
        self.reports.read().await.is_empty()
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

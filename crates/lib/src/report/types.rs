//! Report records and the values derived from them.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::constants::UNKNOWN_LANGUAGE;

/// Sequential report identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportId(pub u64);

impl ReportId {
    /// Parse an identifier from a URL path segment.
    ///
    /// Zero, negative and non-numeric input yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(n) => Some(Self(n)),
        }
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Processing state of a report.
///
/// Uploads are recorded before any scanner runs, so `Pending` is the only
/// state produced today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Pending,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scan outcome severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Every severity, lowest first.
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One uploaded artifact and its scan outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: ReportId,
    pub file_name: String,
    /// Capitalized file extension, e.g. `Py` for `scan.py`.
    pub language: String,
    pub status: ScanStatus,
    pub vulns: u32,
    pub severity: Severity,
    /// Username of the session that uploaded the file.
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Counts computed over the full report collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aggregate {
    pub total_scans: usize,
    pub total_vulns: u64,
    pub pending_reports: usize,
    pub low_count: usize,
    pub medium_count: usize,
    pub high_count: usize,
    pub critical_count: usize,
}

impl Aggregate {
    /// Compute the aggregate with a single pass over `reports`.
    pub fn from_reports<'a>(reports: impl IntoIterator<Item = &'a Report>) -> Self {
        let mut agg = Aggregate::default();
        for report in reports {
            agg.total_scans += 1;
            agg.total_vulns += u64::from(report.vulns);
            if report.status == ScanStatus::Pending {
                agg.pending_reports += 1;
            }
            match report.severity {
                Severity::Low => agg.low_count += 1,
                Severity::Medium => agg.medium_count += 1,
                Severity::High => agg.high_count += 1,
                Severity::Critical => agg.critical_count += 1,
            }
        }
        agg
    }

    /// Count for a single severity.
    pub fn severity_count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low_count,
            Severity::Medium => self.medium_count,
            Severity::High => self.high_count,
            Severity::Critical => self.critical_count,
        }
    }
}

/// Derive the display language from a file name.
///
/// Takes the text after the last `.`, or the whole name when there is no
/// `.`, and capitalizes it (first character upper case, the rest lower case).
/// An empty extension gives [`UNKNOWN_LANGUAGE`].
///
/// The first character goes through [`char::to_uppercase`], not Unicode
/// titlecase, so digraphs such as `ǆ` become `Ǆ` rather than `ǅ`.
pub fn language_for(file_name: &str) -> String {
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => file_name,
    };

    let mut chars = ext.chars();
    match chars.next() {
        None => UNKNOWN_LANGUAGE.to_string(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

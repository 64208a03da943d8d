//! Uploaded scan reports and their aggregate statistics.

mod store;
mod types;

pub use store::ReportStore;
pub use types::{Aggregate, Report, ReportId, ScanStatus, Severity, language_for};

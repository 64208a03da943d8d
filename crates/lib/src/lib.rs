//!
//! scandeck: a small session-authenticated dashboard for uploaded scan reports.
//!
//! ## Core Concepts
//!
//! * **Sessions (`session::SessionStore`)**: Opaque cookie tokens mapped to the username that logged in.
//! * **Reports (`report::ReportStore`)**: An append-only, insertion-ordered list of uploaded artifacts
//!   with placeholder scan outcomes and aggregate statistics computed on demand.
//! * **Authenticators (`auth::Authenticator`)**: Pluggable credential checks. The fixed demo account is
//!   the default; an Argon2id-backed user table is available as an alternative.
//! * **Upload sinks (`upload::UploadSink`)**: Where uploaded bytes are persisted before a report is recorded.
//! * **Web layer (`web`)**: The axum router, handlers and inline HTML pages that tie the above together.

pub mod auth;
pub mod clock;
pub mod constants;
pub mod report;
pub mod session;
pub mod upload;
pub mod web;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use report::{Aggregate, Report, ReportId, ReportStore, ScanStatus, Severity};
pub use session::SessionStore;
pub use web::{AppState, router};

/// Result type used throughout the scandeck library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the scandeck library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured credential errors from the auth module
    #[error(transparent)]
    Auth(auth::AuthError),

    /// Structured upload errors from the upload module
    #[error(transparent)]
    Upload(upload::UploadError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Auth(_) => "auth",
            Error::Upload(_) => "upload",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Auth(auth_err) => auth_err.is_not_found(),
            Error::Upload(_) => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Check if this error came from rejected user input rather than the environment.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Upload(upload_err) => upload_err.is_invalid_input(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Upload(upload_err) => upload_err.is_io_error(),
            Error::Auth(_) => false,
        }
    }
}

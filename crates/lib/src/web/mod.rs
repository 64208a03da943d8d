//! Web interface
//!
//! Builds the axum [`Router`] serving login, upload, dashboard and report
//! pages. All state lives in an [`AppState`] value handed to [`router`], so
//! every server (and every test) gets its own isolated stores.

mod handlers;
pub mod templates;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::get,
};
use tower_cookies::CookieManagerLayer;

use crate::{
    auth::{Authenticator, FixedCredentials},
    report::ReportStore,
    session::SessionStore,
    upload::{DiskSink, UploadSink},
};

/// Largest accepted request body for uploads (16 MiB).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub reports: ReportStore,
    pub authenticator: Arc<dyn Authenticator>,
    pub uploads: Arc<dyn UploadSink>,
}

impl AppState {
    /// Create state with empty stores.
    pub fn new(authenticator: Arc<dyn Authenticator>, uploads: Arc<dyn UploadSink>) -> Self {
        Self {
            sessions: SessionStore::new(),
            reports: ReportStore::new(),
            authenticator,
            uploads,
        }
    }

    /// Replace the report store, e.g. with one using a fixed clock.
    pub fn with_reports(mut self, reports: ReportStore) -> Self {
        self.reports = reports;
        self
    }

    /// Demo account credentials with uploads written to `upload_dir`.
    pub fn demo(upload_dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(
            Arc::new(FixedCredentials),
            Arc::new(DiskSink::new(upload_dir)),
        )
    }
}

/// Build the router for the web interface.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/stats", get(handlers::stats))
        .route("/login", get(handlers::login_page).post(handlers::login_submit))
        .route("/logout", get(handlers::logout).post(handlers::logout))
        .route("/dashboard", get(handlers::dashboard))
        .route(
            "/upload",
            get(handlers::upload_page).post(handlers::upload_submit),
        )
        .route("/reports", get(handlers::reports_list))
        .route("/reports/{id}", get(handlers::report_detail))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

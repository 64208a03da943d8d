//! Composing AppState with alternative collaborators.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use scandeck::{
    AppState, ReportId, ReportStore, Result,
    auth::{FixedCredentials, HashedCredentials},
    upload::UploadSink,
};

use crate::helpers::{TestServer, assert_redirect, ok_body, session_token};

/// Keeps uploads in memory so tests can inspect them.
#[derive(Default)]
struct MemorySink {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

#[async_trait]
impl UploadSink for MemorySink {
    async fn store(&self, file_name: &str, contents: &[u8]) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .push((file_name.to_string(), contents.to_vec()));
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[tokio::test]
async fn custom_sink_receives_uploads() {
    let sink = Arc::new(MemorySink::default());
    let state = AppState::new(Arc::new(FixedCredentials), sink.clone());
    let server = TestServer::start_with(state, tempfile::tempdir().unwrap()).await;
    let token = server.login().await;

    server.upload(&token, "main.rs", b"fn main() {}").await;

    let files = sink.files.lock().unwrap().clone();
    assert_eq!(files, vec![("main.rs".to_string(), b"fn main() {}".to_vec())]);
    assert!(server.state.reports.find_by_id(ReportId(1)).await.is_some());
}

#[tokio::test]
async fn separate_states_are_isolated() {
    let first = TestServer::start().await;
    let second = TestServer::start().await;

    let token = first.login().await;
    first.upload(&token, "scan.py", b"a").await;

    assert_eq!(first.state.reports.len().await, 1);
    assert!(second.state.reports.is_empty().await);

    // A session from one server means nothing to the other
    assert_redirect(&second.get_as("/dashboard", &token).await, "/login");
}

#[tokio::test]
async fn preloaded_report_store_is_served() {
    let reports = ReportStore::new();
    reports.append("legacy.c", "admin").await;

    let upload_dir = tempfile::tempdir().unwrap();
    let state = AppState::demo(upload_dir.path()).with_reports(reports);
    let server = TestServer::start_with(state, upload_dir).await;
    let token = server.login().await;

    let body = ok_body(server.get_as("/reports/1", &token).await).await;
    assert!(body.contains("<td>legacy.c</td>"));
    assert!(body.contains("<td>C</td>"));

    // New uploads continue the id sequence
    server.upload(&token, "next.c", b"").await;
    let latest = server.state.reports.find_by_id(ReportId(2)).await.unwrap();
    assert_eq!(latest.file_name, "next.c");
}

#[tokio::test]
#[cfg_attr(miri, ignore)] // Argon2 is extremely slow under Miri
async fn hashed_credentials_drive_login() {
    let auth = HashedCredentials::with_demo_user().unwrap();
    let upload_dir = tempfile::tempdir().unwrap();
    let state = AppState::new(
        Arc::new(auth),
        Arc::new(scandeck::upload::DiskSink::new(upload_dir.path())),
    );
    let server = TestServer::start_with(state, upload_dir).await;

    // The fixed demo password is not accepted here
    let rejected = server.post_login("admin", "admin").await;
    assert!(session_token(&rejected).is_none());

    let accepted = server.post_login("admin", "admin123").await;
    assert_redirect(&accepted, "/dashboard");
    assert!(session_token(&accepted).is_some());

    let health: serde_json::Value = server.get("/health").await.json().await.unwrap();
    assert_eq!(health["auth"], "hashed");
}

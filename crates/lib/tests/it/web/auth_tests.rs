//! Login, logout and session-guard behavior.

use reqwest::StatusCode;

use crate::helpers::{TestServer, assert_redirect, ok_body, session_token};

const PROTECTED: [&str; 5] = ["/dashboard", "/upload", "/reports", "/reports/1", "/reports/abc"];

#[tokio::test]
async fn protected_routes_redirect_without_session() {
    let server = TestServer::start().await;
    for path in PROTECTED {
        let response = server.get(path).await;
        assert_redirect(&response, "/login");
    }
}

#[tokio::test]
async fn protected_routes_redirect_with_unknown_session() {
    let server = TestServer::start().await;
    for path in PROTECTED {
        let response = server.get_as(path, "not-a-real-token").await;
        assert_redirect(&response, "/login");
    }
}

#[tokio::test]
async fn login_with_demo_account_sets_cookie() {
    let server = TestServer::start().await;
    let response = server.post_login("admin", "admin").await;
    assert_redirect(&response, "/dashboard");

    let token = session_token(&response).unwrap();
    assert!(!token.is_empty());
    assert_eq!(
        server.state.sessions.resolve(&token).await.as_deref(),
        Some("admin")
    );

    let body = ok_body(server.get_as("/dashboard", &token).await).await;
    assert!(body.contains("Signed in as admin"));
}

#[tokio::test]
async fn login_cookie_is_http_only() {
    let server = TestServer::start().await;
    let response = server.post_login("admin", "admin").await;
    let header = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("Path=/"));
}

#[tokio::test]
async fn wrong_credentials_show_inline_error() {
    let server = TestServer::start().await;
    for (user, pass) in [("admin", "wrong"), ("root", "admin"), ("", "")] {
        let response = server.post_login(user, pass).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(session_token(&response).is_none());
        let body = response.text().await.unwrap();
        assert!(body.contains("Invalid credentials"));
    }
    assert_eq!(server.state.sessions.session_count().await, 0);
}

#[tokio::test]
async fn malformed_login_form_fails_soft() {
    let server = TestServer::start().await;
    let response = server
        .client
        .post(server.url("/login"))
        .body("{not a form")
        .send()
        .await
        .unwrap();
    let body = ok_body(response).await;
    assert!(body.contains("Invalid credentials"));
}

#[tokio::test]
async fn logout_destroys_session() {
    let server = TestServer::start().await;
    let token = server.login().await;

    let response = server.get_as("/logout", &token).await;
    assert_redirect(&response, "/login");
    assert_eq!(server.state.sessions.resolve(&token).await, None);

    // The old cookie no longer grants access
    assert_redirect(&server.get_as("/dashboard", &token).await, "/login");

    // Logging out again is harmless
    assert_redirect(&server.get_as("/logout", &token).await, "/login");
}

#[tokio::test]
async fn root_and_login_page_follow_session_state() {
    let server = TestServer::start().await;
    assert_redirect(&server.get("/").await, "/login");
    let body = ok_body(server.get("/login").await).await;
    assert!(body.contains(r#"action="/login""#));

    let token = server.login().await;
    assert_redirect(&server.get_as("/", &token).await, "/dashboard");
    assert_redirect(&server.get_as("/login", &token).await, "/dashboard");
}

#[tokio::test]
async fn health_reports_counts() {
    let server = TestServer::start().await;
    let token = server.login().await;
    server.upload(&token, "scan.py", b"x = 1").await;

    let body: serde_json::Value = server.get("/health").await.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["auth"], "fixed");
    assert_eq!(body["reports"], 1);
    assert_eq!(body["sessions"], 1);
}

#[tokio::test]
async fn stats_page_is_public() {
    let server = TestServer::start().await;
    server.login().await;
    let body = ok_body(server.get("/stats").await).await;
    assert!(body.contains("Active sessions</th><td>1</td>"));
}

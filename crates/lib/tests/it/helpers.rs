use std::net::SocketAddr;

use reqwest::{
    Response, StatusCode,
    header::{COOKIE, LOCATION, SET_COOKIE},
    multipart::{Form, Part},
    redirect::Policy,
};
use scandeck::{AppState, constants::SESSION_COOKIE, router};
use tempfile::TempDir;

/// A scandeck server running on an ephemeral local port.
///
/// Redirects are not followed, so tests can assert on them directly.
/// The upload directory is removed when the server is dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub state: AppState,
    pub upload_dir: TempDir,
}

impl TestServer {
    /// Start a server with the demo credentials and a fresh upload directory.
    pub async fn start() -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");
        let state = AppState::demo(upload_dir.path());
        Self::start_with(state, upload_dir).await
    }

    /// Start a server around prepared state.
    pub async fn start_with(state: AppState, upload_dir: TempDir) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });

        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("Failed to build client");

        Self {
            addr,
            client,
            state,
            upload_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// GET without a session cookie.
    pub async fn get(&self, path: &str) -> Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    /// GET carrying the given session cookie.
    pub async fn get_as(&self, path: &str, session: &str) -> Response {
        self.client
            .get(self.url(path))
            .header(COOKIE, format!("{SESSION_COOKIE}={session}"))
            .send()
            .await
            .unwrap()
    }

    /// Submit the login form.
    pub async fn post_login(&self, username: &str, password: &str) -> Response {
        self.client
            .post(self.url("/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .unwrap()
    }

    /// Log in with the demo account and return the session token.
    pub async fn login(&self) -> String {
        let response = self.post_login("admin", "admin").await;
        assert_redirect(&response, "/dashboard");
        session_token(&response).expect("login did not set a session cookie")
    }

    /// Upload a file through the multipart form.
    pub async fn upload(&self, session: &str, file_name: &str, contents: &[u8]) -> Response {
        let form = Form::new().part(
            "file",
            Part::bytes(contents.to_vec()).file_name(file_name.to_string()),
        );
        self.client
            .post(self.url("/upload"))
            .header(COOKIE, format!("{SESSION_COOKIE}={session}"))
            .multipart(form)
            .send()
            .await
            .unwrap()
    }
}

/// Extract the session token from a `Set-Cookie` header, if one was set.
pub fn session_token(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .filter_map(|pair| pair.strip_prefix(&format!("{SESSION_COOKIE}=")).map(String::from))
        .find(|token| !token.is_empty())
}

/// Assert the response is a redirect to `location`.
pub fn assert_redirect(response: &Response, location: &str) {
    assert!(
        response.status().is_redirection(),
        "expected redirect to {location}, got {}",
        response.status()
    );
    assert_eq!(
        response.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some(location)
    );
}

/// Assert a 200 response and return its body.
pub async fn ok_body(response: Response) -> String {
    assert_eq!(response.status(), StatusCode::OK);
    response.text().await.unwrap()
}

//! Route handlers.
//!
//! Every failure here degrades to a safe page: a missing session redirects
//! to the login page, an unknown report redirects to the listing, and bad
//! credentials or a failed upload re-render the form with a message.

use axum::{
    Form, Json,
    extract::{
        Multipart, Path, State,
        multipart::MultipartRejection,
        rejection::FormRejection,
    },
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};

use super::AppState;
use super::templates::{self, Flash};
use crate::{
    Error, Result,
    constants::{DASHBOARD_PATH, LOGIN_PATH, REPORTS_PATH, SESSION_COOKIE, UPLOAD_FIELD},
    report::ReportId,
    upload::{UploadError, sanitize_file_name},
};

/// Login form data
#[derive(Deserialize)]
pub(super) struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// Resolve the request's session cookie to a username.
async fn current_user(state: &AppState, cookies: &Cookies) -> Option<String> {
    let cookie = cookies.get(SESSION_COOKIE)?;
    state.sessions.resolve(cookie.value()).await
}

fn to_login() -> Response {
    tracing::debug!("No valid session, redirecting to {LOGIN_PATH}");
    Redirect::to(LOGIN_PATH).into_response()
}

// ============================================================================
// Authentication Handlers
// ============================================================================

/// Handler for GET / - Root redirect
pub(super) async fn root(State(state): State<AppState>, cookies: Cookies) -> Redirect {
    if current_user(&state, &cookies).await.is_some() {
        return Redirect::to(DASHBOARD_PATH);
    }
    Redirect::to(LOGIN_PATH)
}

/// Handler for GET /login - Show login page
pub(super) async fn login_page(State(state): State<AppState>, cookies: Cookies) -> Response {
    if current_user(&state, &cookies).await.is_some() {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }
    Html(templates::login_page(None)).into_response()
}

/// Handler for POST /login - Check credentials and start a session
pub(super) async fn login_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    form: std::result::Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("Unreadable login form: {rejection}");
            return Html(templates::login_page(Some("Invalid credentials"))).into_response();
        }
    };

    if !state
        .authenticator
        .authenticate(&form.username, &form.password)
    {
        tracing::warn!("Failed login attempt for user '{}'", form.username);
        return Html(templates::login_page(Some("Invalid credentials"))).into_response();
    }

    let session_token = state.sessions.create_session(form.username.as_str()).await;
    tracing::info!("User '{}' logged in", form.username);

    let mut cookie = Cookie::new(SESSION_COOKIE, session_token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookies.add(cookie);
    Redirect::to(DASHBOARD_PATH).into_response()
}

/// Handler for GET|POST /logout - Destroy the session
pub(super) async fn logout(State(state): State<AppState>, cookies: Cookies) -> Redirect {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        if state.sessions.destroy(cookie.value()).await {
            tracing::info!("Session logged out");
        }
        let mut removal = Cookie::from(SESSION_COOKIE);
        removal.set_path("/");
        cookies.remove(removal);
    }
    Redirect::to(LOGIN_PATH)
}

// ============================================================================
// Dashboard and Report Handlers
// ============================================================================

/// Handler for GET /dashboard - Summary statistics and report table
pub(super) async fn dashboard(State(state): State<AppState>, cookies: Cookies) -> Response {
    let Some(username) = current_user(&state, &cookies).await else {
        return to_login();
    };

    let (reports, stats) = state.reports.snapshot().await;
    Html(templates::dashboard_page(&username, &reports, &stats)).into_response()
}

/// Handler for GET /reports - Every report in upload order
pub(super) async fn reports_list(State(state): State<AppState>, cookies: Cookies) -> Response {
    let Some(username) = current_user(&state, &cookies).await else {
        return to_login();
    };

    let reports = state.reports.list_all().await;
    Html(templates::reports_page(&username, &reports)).into_response()
}

/// Handler for GET /reports/{id} - One report, or back to the listing
pub(super) async fn report_detail(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(username) = current_user(&state, &cookies).await else {
        return to_login();
    };

    let report = match ReportId::parse(&raw_id) {
        Some(id) => state.reports.find_by_id(id).await,
        None => None,
    };

    match report {
        Some(report) => Html(templates::report_detail_page(&username, &report)).into_response(),
        None => {
            tracing::debug!("Report '{raw_id}' not found, redirecting to {REPORTS_PATH}");
            Redirect::to(REPORTS_PATH).into_response()
        }
    }
}

// ============================================================================
// Upload Handlers
// ============================================================================

/// Handler for GET /upload - Show upload form
pub(super) async fn upload_page(State(state): State<AppState>, cookies: Cookies) -> Response {
    let Some(username) = current_user(&state, &cookies).await else {
        return to_login();
    };
    Html(templates::upload_page(&username, None)).into_response()
}

/// Handler for POST /upload - Persist the file and record a report
pub(super) async fn upload_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Response {
    let Some(username) = current_user(&state, &cookies).await else {
        return to_login();
    };

    let received = match multipart {
        Ok(mut multipart) => receive_upload(&state, &mut multipart).await,
        Err(rejection) => Err(UploadError::Malformed {
            reason: rejection.body_text(),
        }
        .into()),
    };

    match received {
        Ok(file_name) => {
            let report = state.reports.append(&file_name, &username).await;
            tracing::info!(
                "User '{username}' uploaded {file_name} as report #{}",
                report.id
            );
            let message = format!("{file_name} uploaded successfully!");
            Html(templates::upload_page(
                &username,
                Some(Flash::Success(&message)),
            ))
            .into_response()
        }
        Err(e) => {
            tracing::warn!("Upload by '{username}' failed: {e}");
            let message = upload_error_message(&e);
            Html(templates::upload_page(&username, Some(Flash::Error(&message)))).into_response()
        }
    }
}

/// Read the `file` field, sanitize its name and hand it to the sink.
async fn receive_upload(state: &AppState, multipart: &mut Multipart) -> Result<String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Malformed {
            reason: e.body_text(),
        })?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = sanitize_file_name(field.file_name().unwrap_or_default())?;
        let contents = field.bytes().await.map_err(|e| UploadError::Malformed {
            reason: e.body_text(),
        })?;

        state.uploads.store(&file_name, &contents).await?;
        return Ok(file_name);
    }

    Err(UploadError::MissingFile.into())
}

/// Message shown on the upload page for a failed upload.
fn upload_error_message(err: &Error) -> String {
    match err {
        Error::Upload(UploadError::MissingFile) => "Please choose a file to upload".to_string(),
        Error::Upload(UploadError::InvalidFileName { name }) if name.trim().is_empty() => {
            "Please choose a file to upload".to_string()
        }
        Error::Upload(upload_err) if upload_err.is_invalid_input() => upload_err.to_string(),
        _ => "Upload failed, please try again".to_string(),
    }
}

// ============================================================================
// Health and Stats Handlers
// ============================================================================

/// Health check response
#[derive(Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
    auth: &'static str,
    reports: usize,
    sessions: usize,
}

/// Handler for GET /health - Health check endpoint
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        auth: state.authenticator.kind(),
        reports: state.reports.len().await,
        sessions: state.sessions.session_count().await,
    })
}

/// Handler for GET /stats - Public statistics page
pub(super) async fn stats(State(state): State<AppState>) -> Html<String> {
    let session_count = state.sessions.session_count().await;
    let stats = state.reports.aggregate().await;
    Html(templates::stats_page(session_count, &stats))
}

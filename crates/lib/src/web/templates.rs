//! HTML templates for the web interface
//!
//! Simple inline HTML templates without a template engine.

use crate::report::{Aggregate, Report, Severity};

/// Common CSS styles for all pages
const COMMON_STYLES: &str = r#"
    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
        max-width: 1000px;
        margin: 40px auto;
        padding: 0 20px;
        background: #f4f6f8;
    }
    .container {
        background: white;
        padding: 30px;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }
    nav {
        margin-bottom: 20px;
    }
    nav a {
        margin-right: 16px;
        color: #1f6feb;
        text-decoration: none;
        font-weight: bold;
    }
    nav .user {
        float: right;
        color: #666;
    }
    h1 {
        color: #222;
        border-bottom: 2px solid #1f6feb;
        padding-bottom: 10px;
    }
    .cards {
        display: flex;
        gap: 12px;
        flex-wrap: wrap;
    }
    .card {
        flex: 1;
        min-width: 140px;
        padding: 14px;
        background: #f9fafb;
        border-radius: 6px;
        text-align: center;
    }
    .card .num {
        font-size: 28px;
        font-weight: bold;
        color: #1f6feb;
    }
    .sev-low { color: #2da44e; }
    .sev-medium { color: #bf8700; }
    .sev-high { color: #cf222e; }
    .sev-critical { color: #82071e; font-weight: bold; }
    table {
        width: 100%;
        border-collapse: collapse;
        margin: 15px 0;
    }
    th, td {
        text-align: left;
        padding: 10px;
        border-bottom: 1px solid #ddd;
    }
    th {
        background: #f0f0f0;
    }
    .form-group {
        margin: 15px 0;
    }
    label {
        display: block;
        font-weight: bold;
        margin-bottom: 5px;
    }
    input[type="text"],
    input[type="password"] {
        width: 100%;
        padding: 10px;
        border: 1px solid #ddd;
        border-radius: 4px;
        box-sizing: border-box;
    }
    button {
        background: #1f6feb;
        color: white;
        padding: 10px 20px;
        border: none;
        border-radius: 4px;
        cursor: pointer;
        font-weight: bold;
    }
    .error {
        color: #d9534f;
        background: #f2dede;
        padding: 10px;
        border-radius: 4px;
        margin: 10px 0;
    }
    .success {
        color: #1a7f37;
        background: #dafbe1;
        padding: 10px;
        border-radius: 4px;
        margin: 10px 0;
    }
    .muted {
        color: #666;
        font-style: italic;
    }
"#;

/// One-shot status message shown above a form.
#[derive(Debug, Clone, Copy)]
pub enum Flash<'a> {
    Error(&'a str),
    Success(&'a str),
}

impl Flash<'_> {
    fn render(&self) -> String {
        match self {
            Flash::Error(msg) => format!(r#"<div class="error">{}</div>"#, html_escape(msg)),
            Flash::Success(msg) => format!(r#"<div class="success">{}</div>"#, html_escape(msg)),
        }
    }
}

/// Wrap page content in the shared document shell.
///
/// `username` switches on the navigation bar for authenticated pages.
fn layout(title: &str, username: Option<&str>, body: &str) -> String {
    let nav = username.map_or(String::new(), |user| {
        format!(
            r#"<nav>
            <a href="/dashboard">Dashboard</a>
            <a href="/upload">Upload</a>
            <a href="/reports">Reports</a>
            <a href="/logout">Logout</a>
            <span class="user">Signed in as {}</span>
        </nav>"#,
            html_escape(user)
        )
    });

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>scandeck - {}</title>
    <style>{COMMON_STYLES}</style>
</head>
<body>
    <div class="container">
        {nav}
        {body}
    </div>
</body>
</html>"#,
        html_escape(title)
    )
}

/// Render the login page
pub fn login_page(error: Option<&str>) -> String {
    let error_html = error.map_or(String::new(), |e| Flash::Error(e).render());

    let body = format!(
        r#"<h1>scandeck</h1>
        <h2>Login</h2>
        {error_html}
        <form method="POST" action="/login">
            <div class="form-group">
                <label for="username">Username:</label>
                <input type="text" id="username" name="username" required autofocus>
            </div>
            <div class="form-group">
                <label for="password">Password:</label>
                <input type="password" id="password" name="password" required>
            </div>
            <button type="submit">Login</button>
        </form>"#
    );
    layout("Login", None, &body)
}

/// Render the dashboard with summary cards and every report
pub fn dashboard_page(username: &str, reports: &[Report], stats: &Aggregate) -> String {
    let severity_cards: String = Severity::ALL
        .iter()
        .map(|sev| {
            format!(
                r#"<div class="card"><div class="num {}">{}</div>{}</div>"#,
                severity_class(*sev),
                stats.severity_count(*sev),
                sev
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Dashboard</h1>
        <p>Welcome, <strong>{username}</strong>.</p>

        <div class="cards">
            <div class="card"><div class="num" id="total_scans">{total_scans}</div>Total scans</div>
            <div class="card"><div class="num" id="total_vulns">{total_vulns}</div>Vulnerabilities</div>
            <div class="card"><div class="num" id="pending_reports">{pending}</div>Pending reports</div>
        </div>

        <h2>By Severity</h2>
        <div class="cards">{severity_cards}</div>

        <h2>Recent Reports</h2>
        {table}"#,
        username = html_escape(username),
        total_scans = stats.total_scans,
        total_vulns = stats.total_vulns,
        pending = stats.pending_reports,
        table = reports_table(reports),
    );
    layout("Dashboard", Some(username), &body)
}

/// Render the upload form
pub fn upload_page(username: &str, flash: Option<Flash<'_>>) -> String {
    let flash_html = flash.map_or(String::new(), |f| f.render());

    let body = format!(
        r#"<h1>Upload File</h1>
        {flash_html}
        <form method="POST" action="/upload" enctype="multipart/form-data">
            <div class="form-group">
                <label for="file">Source file:</label>
                <input type="file" id="file" name="file" required>
            </div>
            <button type="submit">Upload &amp; Scan</button>
        </form>"#
    );
    layout("Upload", Some(username), &body)
}

/// Render the full report listing
pub fn reports_page(username: &str, reports: &[Report]) -> String {
    let body = format!(
        r#"<h1>Reports</h1>
        {}"#,
        reports_table(reports)
    );
    layout("Reports", Some(username), &body)
}

/// Render a single report
pub fn report_detail_page(username: &str, report: &Report) -> String {
    let body = format!(
        r#"<h1>Report #{id}</h1>
        <table>
            <tr><th>File</th><td>{file}</td></tr>
            <tr><th>Language</th><td>{language}</td></tr>
            <tr><th>Status</th><td>{status}</td></tr>
            <tr><th>Vulnerabilities</th><td>{vulns}</td></tr>
            <tr><th>Severity</th><td class="{sev_class}">{severity}</td></tr>
            <tr><th>Uploaded by</th><td>{uploader}</td></tr>
            <tr><th>Uploaded at</th><td>{uploaded_at}</td></tr>
        </table>
        <p><a href="/reports">Back to all reports</a></p>"#,
        id = report.id,
        file = html_escape(&report.file_name),
        language = html_escape(&report.language),
        status = report.status,
        vulns = report.vulns,
        sev_class = severity_class(report.severity),
        severity = report.severity,
        uploader = html_escape(&report.uploaded_by),
        uploaded_at = format_timestamp(report),
    );
    layout(&format!("Report #{}", report.id), Some(username), &body)
}

/// Render the public statistics page
pub fn stats_page(session_count: usize, stats: &Aggregate) -> String {
    let body = format!(
        r#"<h1>Server Statistics</h1>
        <table>
            <tr><th>Active sessions</th><td>{session_count}</td></tr>
            <tr><th>Total scans</th><td>{}</td></tr>
            <tr><th>Pending reports</th><td>{}</td></tr>
        </table>
        <p class="muted">Report details are available after logging in.</p>"#,
        stats.total_scans, stats.pending_reports
    );
    layout("Statistics", None, &body)
}

fn reports_table(reports: &[Report]) -> String {
    if reports.is_empty() {
        return r#"<p class="muted">No reports yet. Upload a file to get started.</p>"#
            .to_string();
    }

    let rows: String = reports
        .iter()
        .map(|r| {
            format!(
                r#"<tr>
                <td>{id}</td>
                <td><a href="/reports/{id}">{file}</a></td>
                <td>{language}</td>
                <td>{status}</td>
                <td>{vulns}</td>
                <td class="{sev_class}">{severity}</td>
                <td>{uploader}</td>
                <td>{uploaded_at}</td>
            </tr>"#,
                id = r.id,
                file = html_escape(&r.file_name),
                language = html_escape(&r.language),
                status = r.status,
                vulns = r.vulns,
                sev_class = severity_class(r.severity),
                severity = r.severity,
                uploader = html_escape(&r.uploaded_by),
                uploaded_at = format_timestamp(r),
            )
        })
        .collect();

    format!(
        r#"<table>
            <tr>
                <th>ID</th>
                <th>File</th>
                <th>Language</th>
                <th>Status</th>
                <th>Vulns</th>
                <th>Severity</th>
                <th>Uploaded by</th>
                <th>Uploaded at</th>
            </tr>
            {rows}
        </table>"#
    )
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "sev-low",
        Severity::Medium => "sev-medium",
        Severity::High => "sev-high",
        Severity::Critical => "sev-critical",
    }
}

fn format_timestamp(report: &Report) -> String {
    report.uploaded_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

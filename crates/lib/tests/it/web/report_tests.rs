//! Dashboard and report pages.

use crate::helpers::{TestServer, assert_redirect, ok_body};

#[tokio::test]
async fn empty_dashboard_shows_zero_counts() {
    let server = TestServer::start().await;
    let token = server.login().await;

    let body = ok_body(server.get_as("/dashboard", &token).await).await;
    assert!(body.contains(r#"id="total_scans">0<"#));
    assert!(body.contains(r#"id="total_vulns">0<"#));
    assert!(body.contains(r#"id="pending_reports">0<"#));
    assert!(body.contains("No reports yet"));
}

#[tokio::test]
async fn dashboard_aggregates_uploads() {
    let server = TestServer::start().await;
    let token = server.login().await;
    server.upload(&token, "scan.py", b"a").await;
    server.upload(&token, "report.txt", b"b").await;

    let body = ok_body(server.get_as("/dashboard", &token).await).await;
    assert!(body.contains(r#"id="total_scans">2<"#));
    assert!(body.contains(r#"id="pending_reports">2<"#));
    assert!(body.contains(r#"id="total_vulns">0<"#));
    assert!(body.contains(r#"<div class="num sev-low">2</div>Low"#));
    assert!(body.contains(r#"<div class="num sev-critical">0</div>Critical"#));

    let agg = server.state.reports.aggregate().await;
    assert_eq!(agg.total_scans, 2);
    assert_eq!(agg.low_count, 2);
    assert_eq!(agg.medium_count + agg.high_count + agg.critical_count, 0);
}

#[tokio::test]
async fn listing_keeps_upload_order() {
    let server = TestServer::start().await;
    let token = server.login().await;
    for name in ["b.rs", "a.go", "c.py"] {
        server.upload(&token, name, b"").await;
    }

    let body = ok_body(server.get_as("/reports", &token).await).await;
    let positions: Vec<usize> = ["b.rs", "a.go", "c.py"]
        .iter()
        .map(|name| body.find(&format!(">{name}</a>")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn report_detail_shows_record() {
    let server = TestServer::start().await;
    let token = server.login().await;
    server.upload(&token, "scan.py", b"a").await;
    server.upload(&token, "report.txt", b"b").await;

    let body = ok_body(server.get_as("/reports/2", &token).await).await;
    assert!(body.contains("Report #2"));
    assert!(body.contains("<td>report.txt</td>"));
    assert!(body.contains("<td>Txt</td>"));
    assert!(body.contains("<td>Pending</td>"));
}

#[tokio::test]
async fn unknown_report_redirects_to_listing() {
    let server = TestServer::start().await;
    let token = server.login().await;

    assert_redirect(&server.get_as("/reports/99", &token).await, "/reports");
    assert_redirect(&server.get_as("/reports/0", &token).await, "/reports");
    assert_redirect(&server.get_as("/reports/abc", &token).await, "/reports");

    server.upload(&token, "scan.py", b"a").await;
    assert_redirect(&server.get_as("/reports/2", &token).await, "/reports");
}

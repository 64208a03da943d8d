//! Serve command - runs the scandeck web server.

use std::sync::Arc;

use tokio::signal::unix::{SignalKind, signal};
use tracing_subscriber::EnvFilter;

use scandeck::{
    AppState,
    auth::{Authenticator, FixedCredentials, HashedCredentials},
    router,
    upload::{DiskSink, UploadSink},
};

use crate::cli::{AuthMode, ServeArgs};

/// Run the scandeck server
pub async fn run(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("scandeck=info".parse()?))
        .init();

    let state = build_state(args)?;
    tracing::info!(
        "Using {} authentication, uploads in {}",
        state.authenticator.kind(),
        state.uploads.describe()
    );

    let app = router(state.clone());

    // Bind server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    // Print startup message
    println!("scandeck server started");
    println!();
    println!("Web Interface: http://{local_addr}");
    println!();
    println!("Available endpoints:");
    println!("  GET  /              - Redirect to login or dashboard");
    println!("  GET  /login         - Login page");
    println!("  POST /login         - Login submission");
    println!("  GET  /logout        - End the session");
    println!("  GET  /dashboard     - Scan statistics (requires login)");
    println!("  GET  /upload        - Upload form (requires login)");
    println!("  POST /upload        - Upload submission (requires login)");
    println!("  GET  /reports       - All reports (requires login)");
    println!("  GET  /reports/{{id}}  - Report detail (requires login)");
    println!("  GET  /stats         - Server statistics");
    println!("  GET  /health        - Health check (JSON)");
    println!();
    println!("Press Ctrl+C to shutdown");

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Reports live only in memory
    let discarded = state.reports.len().await;
    tracing::info!("Server stopped, discarding {discarded} in-memory reports");
    println!("Server shut down");
    Ok(())
}

/// Assemble application state from the command-line configuration.
fn build_state(args: &ServeArgs) -> scandeck::Result<AppState> {
    let authenticator: Arc<dyn Authenticator> = match args.auth {
        AuthMode::Fixed => Arc::new(FixedCredentials),
        AuthMode::Hashed => Arc::new(HashedCredentials::with_demo_user()?),
    };
    let uploads: Arc<dyn UploadSink> = Arc::new(DiskSink::new(&args.upload_dir));
    Ok(AppState::new(authenticator, uploads))
}

/// Resolves on SIGTERM or SIGINT.
async fn shutdown_signal() {
    let (mut sigterm, mut sigint) = match (
        signal(SignalKind::terminate()),
        signal(SignalKind::interrupt()),
    ) {
        (Ok(term), Ok(int)) => (term, int),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!("Failed to install signal handlers ({e}), falling back to Ctrl+C");
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {e}");
            }
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => tracing::info!("Received SIGTERM, initiating graceful shutdown..."),
        _ = sigint.recv() => tracing::info!("Received SIGINT, initiating graceful shutdown..."),
    }
}

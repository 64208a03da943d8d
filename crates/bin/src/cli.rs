//! CLI argument definitions for the scandeck binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Credential source for the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuthMode {
    /// Single hard-coded demo account (admin / admin)
    Fixed,
    /// Argon2id-hashed user table seeded with admin / admin123
    Hashed,
}

/// scandeck upload dashboard server
#[derive(Parser, Debug)]
#[command(name = "scandeck")]
#[command(about = "scandeck: upload files and track their scan reports")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server
    Serve(ServeArgs),
    /// Check health of a running scandeck server
    Health(HealthArgs),
}

/// Arguments for the serve command
#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8000, env = "SCANDECK_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(long, default_value = "127.0.0.1", env = "SCANDECK_HOST")]
    pub host: String,

    /// Directory uploaded files are written to
    #[arg(short, long, default_value = "uploads", env = "SCANDECK_UPLOAD_DIR")]
    pub upload_dir: PathBuf,

    /// Credential source for logins
    #[arg(short, long, default_value = "fixed", env = "SCANDECK_AUTH")]
    pub auth: AuthMode,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            upload_dir: PathBuf::from("uploads"),
            auth: AuthMode::Fixed,
        }
    }
}

/// Arguments for the health command
#[derive(clap::Args, Debug)]
pub struct HealthArgs {
    /// Base URL of the server to check
    #[arg(long, default_value = "http://127.0.0.1:8000", env = "SCANDECK_URL")]
    pub url: String,

    /// Timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout: u64,
}

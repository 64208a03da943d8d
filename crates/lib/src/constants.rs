//! Constants used throughout the scandeck library.
//!
//! Central definitions for cookie names, route paths and the demo account.

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "scandeck_session";

/// Username of the single demo account accepted by the fixed authenticator.
pub const DEMO_USERNAME: &str = "admin";

/// Password of the single demo account accepted by the fixed authenticator.
pub const DEMO_PASSWORD: &str = "admin";

/// Password seeded for the demo account when the hashed authenticator is used.
pub const HASHED_DEMO_PASSWORD: &str = "admin123";

/// Language shown for files whose extension is empty (e.g. `notes.`).
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Multipart field name carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Login entry point; every unauthenticated request is sent here.
pub const LOGIN_PATH: &str = "/login";

/// Landing page after a successful login.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Report listing; lookups that miss are sent here.
pub const REPORTS_PATH: &str = "/reports";

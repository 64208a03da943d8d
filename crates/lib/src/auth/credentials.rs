//! Credential checks used by the login route.

use std::collections::HashMap;

use super::crypto::{hash_password, verify_password};
use super::errors::AuthError;
use crate::Result;
use crate::constants::{DEMO_PASSWORD, DEMO_USERNAME, HASHED_DEMO_PASSWORD};

/// Decides whether a username/password pair may log in.
///
/// A rejected pair is an ordinary outcome, not an error.
pub trait Authenticator: Send + Sync {
    /// Returns `true` if the pair is accepted.
    fn authenticate(&self, username: &str, password: &str) -> bool;

    /// Short label used in logs and the health endpoint.
    fn kind(&self) -> &'static str;
}

/// Accepts exactly one hard-coded demo account.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCredentials;

impl Authenticator for FixedCredentials {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        username == DEMO_USERNAME && password == DEMO_PASSWORD
    }

    fn kind(&self) -> &'static str {
        "fixed"
    }
}

/// Per-user Argon2id password records held in memory.
#[derive(Debug, Clone, Default)]
pub struct HashedCredentials {
    users: HashMap<String, String>,
}

impl HashedCredentials {
    /// Create an empty credential table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table seeded with the demo account (`admin` / `admin123`).
    pub fn with_demo_user() -> Result<Self> {
        let mut creds = Self::new();
        creds.add_user(DEMO_USERNAME, HASHED_DEMO_PASSWORD)?;
        Ok(creds)
    }

    /// Hash and store a password for a new user.
    pub fn add_user(&mut self, username: impl Into<String>, password: &str) -> Result<()> {
        let username = username.into();
        if self.users.contains_key(&username) {
            return Err(AuthError::UsernameAlreadyExists { username }.into());
        }
        let hash = hash_password(password)?;
        self.users.insert(username, hash);
        Ok(())
    }

    /// Verify a password, reporting why a check failed.
    pub fn verify(&self, username: &str, password: &str) -> Result<()> {
        let hash = self
            .users
            .get(username)
            .ok_or_else(|| AuthError::UserNotFound {
                username: username.to_string(),
            })?;
        verify_password(password, hash)
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the table holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Authenticator for HashedCredentials {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        match self.verify(username, password) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Credential check failed for {username}: {e}");
                false
            }
        }
    }

    fn kind(&self) -> &'static str {
        "hashed"
    }
}

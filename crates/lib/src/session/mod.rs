//! Session management for the web interface
//!
//! Provides in-memory session storage mapping session tokens to usernames.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

/// Session token (UUID stored in cookie)
pub type SessionToken = String;

/// In-memory session store
///
/// Maps session tokens (UUIDs) to the username that logged in.
/// Sessions never expire and are lost on server restart.
///
/// Cloning is cheap and every clone shares the same table.
#[derive(Clone, Debug)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, String>>>,
}

impl SessionStore {
    /// Create a new empty session store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session for a user
    ///
    /// Generates a random UUID token, retrying on the (practically
    /// impossible) event that it is already mapped.
    ///
    /// # Returns
    /// The session token to be stored in a cookie
    pub async fn create_session(&self, username: impl Into<String>) -> SessionToken {
        let mut sessions = self.sessions.write().await;
        let mut token = Uuid::new_v4().to_string();
        while sessions.contains_key(&token) {
            token = Uuid::new_v4().to_string();
        }
        sessions.insert(token.clone(), username.into());
        token
    }

    /// Resolve a session token to its username
    ///
    /// # Returns
    /// The username if the session exists, None otherwise
    pub async fn resolve(&self, token: &str) -> Option<String> {
        let sessions = self.sessions.read().await;
        sessions.get(token).cloned()
    }

    /// Destroy a session
    ///
    /// Removing an unknown token is a no-op.
    ///
    /// # Returns
    /// Whether a session was actually removed
    pub async fn destroy(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token).is_some()
    }

    /// Get the number of active sessions
    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

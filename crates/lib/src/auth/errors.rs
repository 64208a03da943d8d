//! Credential error types.

use thiserror::Error as ThisError;

use crate::Error;

/// Errors produced while hashing or verifying credentials.
///
/// The login route never shows these to the user; they collapse into a
/// single "Invalid credentials" message.
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum AuthError {
    /// No credential record exists for the username.
    #[error("User not found: {username}")]
    UserNotFound {
        /// The username that was looked up
        username: String,
    },

    /// A record already exists for the username.
    #[error("Username already exists: {username}")]
    UsernameAlreadyExists {
        /// The conflicting username
        username: String,
    },

    /// The password did not match the stored hash.
    #[error("Invalid password")]
    InvalidPassword,

    /// The stored hash could not be parsed.
    #[error("Stored password hash is malformed")]
    MalformedHash,

    /// Hashing a new password failed.
    #[error("Password hashing failed: {reason}")]
    HashingFailed {
        /// Description from the hashing backend
        reason: String,
    },
}

impl AuthError {
    /// Check if this error indicates the user does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AuthError::UserNotFound { .. })
    }

    /// Check if this error is a plain credential mismatch.
    pub fn is_rejected_credentials(&self) -> bool {
        matches!(
            self,
            AuthError::UserNotFound { .. } | AuthError::InvalidPassword
        )
    }

    /// Check if this error indicates a conflict with an existing user.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, AuthError::UsernameAlreadyExists { .. })
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        Error::Auth(err)
    }
}

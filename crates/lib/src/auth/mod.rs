//! Authentication for the login route
//!
//! The [`Authenticator`] trait is the seam between the login handler and the
//! credential source. [`FixedCredentials`] accepts the single demo account and
//! is the default; [`HashedCredentials`] keeps Argon2id hashes per user.

pub mod credentials;
pub mod crypto;
pub mod errors;

pub use credentials::{Authenticator, FixedCredentials, HashedCredentials};
pub use crypto::{hash_password, verify_password};
pub use errors::AuthError;

//! Auth error types.

use thiserror::Error;

/// Errors that can occur during admin authentication.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Wrong username or password. Deliberately does not say which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session past its expiry.
    #[error("Session expired")]
    SessionExpired,

    /// Password fails the strength policy.
    #[error("Weak password: {0}")]
    WeakPassword(String),

    /// Malformed hash or other internal failure.
    #[error("Internal auth error: {0}")]
    Internal(String),
}

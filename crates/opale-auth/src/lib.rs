//! Admin credential and session model for the Opale back-office.
//!
//! The storefront checkout has no dependency on this crate; it only gates
//! the admin views. The legacy design (a stored boolean flag) is replaced
//! by a hashed credential plus expiring session tokens.
//!
//! # Example
//!
//! ```rust,ignore
//! use opale_auth::{Authenticator, PasswordHasher};
//!
//! let hash = PasswordHasher::default().hash("SecurePass123")?;
//! let auth = Authenticator::new("admin", hash);
//!
//! let session = auth.login("admin", "SecurePass123")?;
//! session.validate()?;
//! ```

mod error;
mod password;
mod session;

pub use error::AuthError;
pub use password::PasswordHasher;
pub use session::{AdminSession, SessionId};

use tracing::{info, warn};

/// Verifies the admin credential and issues sessions.
pub struct Authenticator {
    username: String,
    password_hash: String,
    hasher: PasswordHasher,
}

impl Authenticator {
    /// Create an authenticator for a stored credential.
    ///
    /// `password_hash` is the output of [`PasswordHasher::hash`], never a
    /// plaintext password.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            hasher: PasswordHasher::default(),
        }
    }

    /// Check credentials and issue a session.
    ///
    /// Username and password failures are indistinguishable to the caller.
    pub fn login(&self, username: &str, password: &str) -> Result<AdminSession, AuthError> {
        // Always run the hash verification so a bad username costs the
        // same time as a bad password.
        let password_ok = self.hasher.verify(password, &self.password_hash)?;

        if username != self.username || !password_ok {
            warn!("admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let session = AdminSession::new(username);
        info!(session = %session.id, "admin login accepted");
        Ok(session)
    }
}

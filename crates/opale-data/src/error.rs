//! Data store error types.

use thiserror::Error;

/// Errors from the remote product and order stores.
#[derive(Error, Debug)]
pub enum DataError {
    /// The requested record does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The backend rejected or failed the operation.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Serialization error at the store boundary.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in store operations.
///
/// A mutation referencing an unknown message id is not an error; those are
/// silent no-ops, matching UI-driven mutation.
#[derive(Debug, Error)]
pub enum Error {
    /// Persistence read or write failed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

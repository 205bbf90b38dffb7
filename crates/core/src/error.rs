//! Error types for coursekit
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for coursekit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for coursekit
///
/// The search index and query engine never fail; errors arise only from
/// persisted widget state (I/O, JSON) and from invalid widget operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (state file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid operation or state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

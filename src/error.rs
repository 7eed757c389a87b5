//! Custom error types for pa
//!
//! This module defines the error hierarchy for the credential store using
//! thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for credential store operations
#[derive(Error, Debug)]
pub enum PaError {
    /// A site or account is empty or contains a reserved character
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// The two password entries did not match
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Operation on an entry that does not exist
    #[error("Entry not found: {identifier}")]
    NotFound { identifier: String },

    /// Add or rename onto an entry that already exists
    #[error("Entry already exists: {identifier}")]
    Conflict { identifier: String },

    /// The encryption tool failed, was missing, or was handed bad input
    #[error("Encryption tool failed: {0}")]
    CryptoFailure(String),

    /// The encryption tool did not exit in time
    #[error("Encryption tool timed out after {seconds}s")]
    CryptoTimeout { seconds: u64 },

    /// The user declined a confirmation or cancelled a selection
    #[error("Aborted")]
    Aborted,

    /// A file name in the store does not decode to an entry
    #[error("Malformed entry name: {0}")]
    MalformedEntry(String),

    /// Input or setting rejected before any side effect
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Clipboard access errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl PaError {
    /// Create a "not found" error for an entry identifier
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    /// Create a "conflict" error for an entry identifier
    pub fn conflict(identifier: impl Into<String>) -> Self {
        Self::Conflict {
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the user backed out of the workflow
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

impl From<std::io::Error> for PaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for credential store operations
pub type PaResult<T> = Result<T, PaError>;

//! Error types for document ID generation

use thiserror::Error;

/// Main error type for ID generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocIdError {
    /// Requested suffix length is not strictly positive
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The secure random source could not supply bytes
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(String),
}

impl DocIdError {
    /// Returns true if the secure random source failed.
    ///
    /// Such failures point at the platform, not the caller, and are never retried.
    pub fn is_entropy_failure(&self) -> bool {
        matches!(self, DocIdError::EntropyUnavailable(_))
    }
}

/// Result type alias for ID generation
pub type Result<T> = std::result::Result<T, DocIdError>;

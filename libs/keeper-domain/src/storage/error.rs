//! Errors reported by persistence ports

use thiserror::Error;

/// Failure reported by a persistence port
///
/// `NotFound` is the dedicated "row missing" signal: no row matched, or a
/// write affected zero rows. Services translate it into a typed not-found
/// error. Everything else is a `Failure` and is propagated wrapped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No row matched the operation
    #[error("Row not found")]
    NotFound,

    /// Any other storage failure
    #[error("Storage operation failed: {0}")]
    Failure(String),
}

impl RepositoryError {
    /// Create a storage failure error with a message
    pub fn failure(msg: impl Into<String>) -> Self {
        Self::Failure(msg.into())
    }

    /// Whether this is the "row missing" signal
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

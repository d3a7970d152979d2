//! Domain errors shared by every aggregate
//!
//! Three layers of failure meet here:
//! - [`ValidationError`] is produced by value-object constructors
//! - [`RepositoryError`](crate::storage::RepositoryError) is what persistence ports report
//! - [`ServiceError`] is the stable vocabulary exposed by the services
//!
//! Callers branch on [`ServiceError::kind`] rather than on individual variants
//! when all they need is the category of failure.

use thiserror::Error;

use crate::note::NoteId;
use crate::storage::RepositoryError;
use crate::user::UserId;

/// A primitive failed a value-object rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ValidationError {
    /// Create an invalid argument error with a message
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Category of a [`ServiceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input was rejected before any persistence call
    InvalidArgument,
    /// The target aggregate does not exist
    NotFound,
    /// Any other persistence or infrastructure failure
    Unexpected,
}

impl ErrorKind {
    /// Stable lowercase label, suitable for logs and transport payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::Unexpected => "unexpected",
        }
    }
}

/// Errors returned by the user, note and transcription services
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Input failed a value-object or service-level rule
    #[error(transparent)]
    InvalidArgument(#[from] ValidationError),

    /// The user does not exist
    #[error("User {0} not found")]
    UserNotFound(UserId),

    /// The note does not exist
    #[error("Note {0} not found")]
    NoteNotFound(NoteId),

    /// A persistence failure other than a missing row, wrapped with the
    /// operation that was running
    #[error("{context} failed: {source}")]
    Unexpected {
        context: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ServiceError {
    /// Wrap a persistence failure with the operation it interrupted
    pub fn unexpected(context: &'static str, source: RepositoryError) -> Self {
        Self::Unexpected { context, source }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::UserNotFound(_) | Self::NoteNotFound(_) => ErrorKind::NotFound,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }

    /// Operation context of an `Unexpected` error
    pub fn context(&self) -> Option<&'static str> {
        match self {
            Self::Unexpected { context, .. } => Some(context),
            _ => None,
        }
    }
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::text;

/// Maximum note name length, in Unicode scalar values after trimming
pub const MAX_NOTE_NAME_LENGTH: usize = 255;

/// Title of a Note
///
/// Trimmed, never empty, at most [`MAX_NOTE_NAME_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteName(String);

impl NoteName {
    /// Trim and validate a raw note name
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidArgument` if the trimmed name is
    /// empty or longer than [`MAX_NOTE_NAME_LENGTH`]
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        text::normalize(name, "note name", Some(MAX_NOTE_NAME_LENGTH)).map(Self)
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NoteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NoteName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NoteName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NoteName> for String {
    fn from(name: NoteName) -> Self {
        name.0
    }
}

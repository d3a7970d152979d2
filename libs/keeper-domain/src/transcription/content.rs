use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::text;

/// Maximum transcription length, in Unicode scalar values after trimming
pub const MAX_TRANSCRIPTION_CONTENT_LENGTH: usize = 1000;

/// Text of a Transcription
///
/// Trimmed, never empty, at most [`MAX_TRANSCRIPTION_CONTENT_LENGTH`]
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TranscriptionContent(String);

impl TranscriptionContent {
    /// Trim and validate raw transcription text
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidArgument` if the trimmed text is
    /// empty or longer than [`MAX_TRANSCRIPTION_CONTENT_LENGTH`]
    pub fn new(content: impl Into<String>) -> Result<Self, ValidationError> {
        text::normalize(
            content,
            "transcription content",
            Some(MAX_TRANSCRIPTION_CONTENT_LENGTH),
        )
        .map(Self)
    }

    /// Get the content as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TranscriptionContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TranscriptionContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TranscriptionContent {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TranscriptionContent {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TranscriptionContent> for String {
    fn from(content: TranscriptionContent) -> Self {
        content.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_content_boundary() {
        let exact = "x".repeat(MAX_TRANSCRIPTION_CONTENT_LENGTH);
        let over = "x".repeat(MAX_TRANSCRIPTION_CONTENT_LENGTH + 1);

        assert!(TranscriptionContent::new(exact).is_ok());
        let err = TranscriptionContent::new(over).unwrap_err();
        assert!(err.to_string().contains("maximum length of 1000"));
    }

    #[test]
    fn test_content_keeps_inner_newlines() {
        let content = TranscriptionContent::new("\n first line\nsecond line \n").unwrap();
        assert_eq!(content.as_str(), "first line\nsecond line");
    }

    proptest! {
        #[test]
        fn prop_whitespace_only_content_is_rejected(s in "[ \t\r\n]{0,64}") {
            prop_assert!(TranscriptionContent::new(s).is_err());
        }

        #[test]
        fn prop_content_within_limit_is_accepted(len in 1usize..=MAX_TRANSCRIPTION_CONTENT_LENGTH) {
            let raw = "é".repeat(len);
            let content = TranscriptionContent::new(raw.clone()).unwrap();
            prop_assert_eq!(content.as_str(), raw.as_str());
        }
    }
}

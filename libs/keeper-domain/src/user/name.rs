use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::text;

/// Display name of a User
///
/// Trimmed and never empty. Unlike note names there is no upper bound on
/// its length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Trim and validate a raw name
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidArgument` if the trimmed name is empty
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        text::normalize(name, "user name", None).map(Self)
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_user_name_is_trimmed() {
        let padded = UserName::new("  Alice  ").unwrap();
        let plain = UserName::new("Alice").unwrap();

        assert_eq!(padded, plain);
        assert_eq!(padded.as_str(), "Alice");
    }

    #[test]
    fn test_user_name_rejects_empty() {
        let err = UserName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidArgument(_)));
    }

    #[test]
    fn test_user_name_has_no_length_limit() {
        let long = "a".repeat(10_000);
        assert_eq!(UserName::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn test_user_name_deserialize_trims() {
        let name: UserName = serde_json::from_str("\"  Bob \"").unwrap();
        assert_eq!(name.as_str(), "Bob");
        assert!(serde_json::from_str::<UserName>("\"   \"").is_err());
    }

    proptest! {
        #[test]
        fn prop_whitespace_only_user_name_is_rejected(s in "[ \t\r\n]{0,32}") {
            prop_assert!(UserName::new(s).is_err());
        }

        #[test]
        fn prop_user_name_trimming_is_idempotent(core in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}[a-zA-Z0-9]", pad in "[ \t]{0,4}") {
            let padded = UserName::new(format!("{pad}{core}{pad}")).unwrap();
            let again = UserName::new(padded.as_str()).unwrap();
            prop_assert_eq!(padded.as_str(), core.as_str());
            prop_assert_eq!(padded, again);
        }
    }
}

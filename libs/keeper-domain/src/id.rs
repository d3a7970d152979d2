//! Positive integer identifiers
//!
//! Every aggregate is keyed by a store-assigned `i64`. Zero and negative
//! values never name a row, so the wrappers reject them at construction.

use crate::error::ValidationError;

/// Check that a raw identifier is strictly positive
pub(crate) fn positive(value: i64, label: &str) -> Result<i64, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::invalid_argument(format!(
            "{label} must be positive: {value}"
        )));
    }

    Ok(value)
}

/// Define a newtype identifier over a positive `i64`
///
/// The generated type serializes as a bare integer and deserializes through
/// `new`, so an invalid id cannot be smuggled in through serde.
macro_rules! positive_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Validate a raw identifier
            ///
            /// # Errors
            ///
            /// Returns `ValidationError::InvalidArgument` if `value <= 0`
            pub fn new(value: i64) -> Result<Self, $crate::error::ValidationError> {
                $crate::id::positive(value, $label).map(Self)
            }

            /// Get the inner integer value
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::error::ValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

pub(crate) use positive_id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_accepts_one() {
        assert_eq!(positive(1, "id"), Ok(1));
    }

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        for value in [0, -1, i64::MIN] {
            let err = positive(value, "note id").unwrap_err();
            assert!(matches!(err, ValidationError::InvalidArgument(_)));
            assert!(err.to_string().contains("note id must be positive"));
        }
    }
}

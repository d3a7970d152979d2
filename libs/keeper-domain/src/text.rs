//! Trimmed text normalization shared by names and contents

use crate::error::ValidationError;

/// Trim `raw` and enforce non-emptiness and an optional maximum length
///
/// Length is counted in Unicode scalar values, not bytes.
pub(crate) fn normalize(
    raw: impl Into<String>,
    label: &str,
    max_chars: Option<usize>,
) -> Result<String, ValidationError> {
    let raw = raw.into();
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::invalid_argument(format!(
            "{label} must not be empty"
        )));
    }

    if let Some(max) = max_chars {
        let length = trimmed.chars().count();
        if length > max {
            return Err(ValidationError::invalid_argument(format!(
                "{label} exceeds maximum length of {max} ({length})"
            )));
        }
    }

    if trimmed.len() == raw.len() {
        Ok(raw)
    } else {
        Ok(trimmed.to_string())
    }
}

// ABOUTME: Input validation for list names and item text
// ABOUTME: Trims user-supplied text and rejects values that end up empty

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    EmptyField(&'static str),
}

/// Trim `value` and reject it when nothing is left.
///
/// `field` is the human-facing name used in the error message ("Name", "Text").
pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

use crate::error::ValidationError;

/// Returns the trimmed description, or an error when nothing but whitespace
/// was typed. Callers must not touch the network on error.
pub fn validate_description(
  raw: &str
) -> Result<&str, ValidationError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(
      ValidationError::EmptyDescription
    );
  }
  Ok(trimmed)
}

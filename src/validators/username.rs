use super::ValidationError;

/// Maximum accepted username length in bytes.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Validates a username before it is handed to a credential source.
///
/// A username must be non-empty after trimming whitespace, fit within
/// [`MAX_USERNAME_LENGTH`], and contain no control characters. Tabs are
/// rejected in particular because the flat-file credential format is
/// tab-delimited.
///
/// # Errors
///
/// Returns a `ValidationError` describing the first failed check.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::UsernameEmpty);
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooLong);
    }

    if username.chars().any(char::is_control) {
        return Err(ValidationError::UsernameInvalid);
    }

    Ok(())
}

//! Role display text resolution.
//!
//! After a successful sign-in the consumer typically shows role-specific
//! text: a greeting and a description of what the role is authorized to do.
//! That text lives in per-role files named `<role>.txt`: the first line is
//! the greeting and the LAST line the authorized-task details, so middle
//! lines can hold comments or padding.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::AuthError;

/// Greeting and authorized-task text for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleContent {
    pub greeting: String,
    pub details: String,
}

impl RoleContent {
    /// Loads `<dir>/<role>.txt`.
    ///
    /// Role names are restricted to ASCII alphanumerics, `-` and `_`, so a
    /// role value can never escape the content directory.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SourceUnavailable` if the role name is not plain,
    /// the file cannot be read, or it contains no lines.
    pub fn load(dir: impl AsRef<Path>, role: &str) -> Result<Self, AuthError> {
        if role.is_empty()
            || !role
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AuthError::SourceUnavailable(format!(
                "role name {role:?} is not a plain file stem"
            )));
        }

        let path = dir.as_ref().join(format!("{role}.txt"));
        let content = fs::read_to_string(&path).map_err(|err| {
            AuthError::SourceUnavailable(format!(
                "failed to read role file {}: {err}",
                path.display()
            ))
        })?;

        let mut lines = content.lines();
        let greeting = lines.next().map(str::to_owned).ok_or_else(|| {
            AuthError::SourceUnavailable(format!("role file {} is empty", path.display()))
        })?;
        let details = lines.last().map(str::to_owned).unwrap_or_else(|| greeting.clone());

        Ok(Self { greeting, details })
    }
}

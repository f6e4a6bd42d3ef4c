//! Flat-file credential source.
//!
//! Reads a tab-separated credential file into an in-memory list the first
//! time it is needed. Layout per line: `username<TAB>hex_digest<TAB>...<TAB>role`
//! (first field username, last field role, extra middle fields tolerated).

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::credential::Credential;
use crate::AuthError;

use super::CredentialSource;

/// Credential source backed by a local flat file.
///
/// The file is parsed once, at first use; later lookups hit the in-memory
/// list. Malformed records are skipped with a warning rather than failing
/// the whole load.
pub struct FileCredentialSource {
    path: PathBuf,
    cache: Mutex<Option<Vec<Credential>>>,
}

impl FileCredentialSource {
    /// Creates a source for the given credential file.
    ///
    /// The file is not touched until the first lookup.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    fn with_credentials<T>(
        &self,
        f: impl FnOnce(&[Credential]) -> T,
    ) -> Result<T, AuthError> {
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if cache.is_none() {
            *cache = Some(self.load()?);
        }

        Ok(f(cache.as_deref().unwrap_or_default()))
    }

    fn load(&self) -> Result<Vec<Credential>, AuthError> {
        let content = fs::read_to_string(&self.path).map_err(|err| {
            AuthError::SourceUnavailable(format!(
                "failed to read credential file {}: {err}",
                self.path.display()
            ))
        })?;

        let mut credentials = Vec::new();

        for (index, record) in content.lines().enumerate() {
            if record.trim().is_empty() {
                continue;
            }

            match Credential::parse_record(record) {
                Ok(credential) => credentials.push(credential),
                Err(err) => log::warn!(
                    target: "paddock::source",
                    "skipping credential record on line {}: {err}",
                    index + 1
                ),
            }
        }

        log::debug!(
            target: "paddock::source",
            "loaded {} credentials from {}",
            credentials.len(),
            self.path.display()
        );

        Ok(credentials)
    }
}

impl CredentialSource for FileCredentialSource {
    fn lookup(&self, username: &str) -> Result<Option<Credential>, AuthError> {
        self.with_credentials(|credentials| {
            credentials
                .iter()
                .find(|credential| credential.username() == username)
                .cloned()
        })
    }

    fn reset_lockout(&self, username: &str) -> Result<u64, AuthError> {
        // The flat file carries no lockout column; the affected-row count is
        // the number of records for the username, zero for an unknown user.
        self.with_credentials(|credentials| {
            credentials
                .iter()
                .filter(|credential| credential.username() == username)
                .count() as u64
        })
    }
}

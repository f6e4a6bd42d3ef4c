#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::credential::Credential;
use crate::crypto::digest_secret;
use crate::secret::Secret;
use crate::AuthError;

use super::CredentialSource;

/// In-memory credential source for tests.
///
/// Lookups walk the list in insertion order, so duplicate usernames behave
/// exactly like the flat file: first match wins. `set_unavailable(true)`
/// makes every call fail with `SourceUnavailable` to exercise outage paths.
#[derive(Clone)]
pub struct MockCredentialSource {
    pub credentials: Arc<Mutex<Vec<Credential>>>,
    unavailable: Arc<AtomicBool>,
    unlocked: Arc<Mutex<Vec<String>>>,
}

impl MockCredentialSource {
    pub fn new() -> Self {
        Self {
            credentials: Arc::new(Mutex::new(Vec::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
            unlocked: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a credential from a plaintext secret, digesting it on the way in.
    pub fn add_user(&self, username: &str, secret: &str, role: &str) {
        let credential = Credential::new(username, digest_secret(&Secret::new(secret)), role);
        self.credentials.lock().unwrap().push(credential);
    }

    /// Switches outage simulation on or off.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Usernames passed to `reset_lockout`, in call order.
    pub fn unlocked_users(&self) -> Vec<String> {
        self.unlocked.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), AuthError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(AuthError::SourceUnavailable("mock outage".to_owned()))
        } else {
            Ok(())
        }
    }
}

impl Default for MockCredentialSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialSource for MockCredentialSource {
    fn lookup(&self, username: &str) -> Result<Option<Credential>, AuthError> {
        self.check_available()?;

        let credentials = self.credentials.lock().unwrap();
        Ok(credentials
            .iter()
            .find(|credential| credential.username() == username)
            .cloned())
    }

    fn reset_lockout(&self, username: &str) -> Result<u64, AuthError> {
        self.check_available()?;

        let affected = self
            .credentials
            .lock()
            .unwrap()
            .iter()
            .filter(|credential| credential.username() == username)
            .count() as u64;

        self.unlocked.lock().unwrap().push(username.to_owned());
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_first_match() {
        let source = MockCredentialSource::new();
        source.add_user("alice", "pw-one", "zookeeper");
        source.add_user("alice", "pw-two", "vet");

        let credential = source.lookup("alice").unwrap().unwrap();
        assert_eq!(credential.role(), "zookeeper");
        assert!(source.lookup("bob").unwrap().is_none());
    }

    #[test]
    fn test_verify_via_default_method() {
        let source = MockCredentialSource::new();
        source.add_user("alice", "correct-secret", "zookeeper");

        let digest = digest_secret(&Secret::new("correct-secret"));
        assert!(source.verify("alice", &digest).unwrap());

        let wrong = digest_secret(&Secret::new("wrong"));
        assert!(!source.verify("alice", &wrong).unwrap());
        assert!(!source.verify("nobody", &digest).unwrap());
    }

    #[test]
    fn test_outage_simulation() {
        let source = MockCredentialSource::new();
        source.add_user("alice", "pw", "zookeeper");
        source.set_unavailable(true);

        assert!(matches!(
            source.lookup("alice"),
            Err(AuthError::SourceUnavailable(_))
        ));
        assert!(matches!(
            source.reset_lockout("alice"),
            Err(AuthError::SourceUnavailable(_))
        ));

        source.set_unavailable(false);
        assert!(source.lookup("alice").unwrap().is_some());
    }

    #[test]
    fn test_reset_lockout_records_calls() {
        let source = MockCredentialSource::new();
        source.add_user("alice", "pw", "zookeeper");

        assert_eq!(source.reset_lockout("alice").unwrap(), 1);
        assert_eq!(source.reset_lockout("nobody").unwrap(), 0);
        assert_eq!(source.unlocked_users(), ["alice", "nobody"]);
    }
}

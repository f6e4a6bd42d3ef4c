//! Credential source contract and implementations.
//!
//! A [`CredentialSource`] resolves a username to stored credential material.
//! The engine is agnostic to what sits behind the trait; the two production
//! deployments (a remote store queried through parameterized calls, and a
//! local flat file) are not interchangeable mid-session.
//!
//! Shipped implementations:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`FileCredentialSource`] | Tab-separated flat file, parsed into memory at first use |
//! | [`MockCredentialSource`] | In-memory list with failure injection (`mocks` feature) |

mod file;
#[cfg(any(test, feature = "mocks"))]
mod mock;

pub use file::FileCredentialSource;
#[cfg(any(test, feature = "mocks"))]
pub use mock::MockCredentialSource;

use crate::credential::Credential;
use crate::crypto::{self, SecretDigest};
use crate::AuthError;

/// Resolves usernames to stored credential material.
pub trait CredentialSource {
    /// Finds the stored credential for a username.
    ///
    /// The store does not enforce username uniqueness; implementations
    /// return the FIRST match.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SourceUnavailable` if the backing store cannot
    /// be read or reached.
    fn lookup(&self, username: &str) -> Result<Option<Credential>, AuthError>;

    /// Checks a username/digest pair against the store.
    ///
    /// The digest comparison is constant time; an unknown username and a
    /// wrong secret are indistinguishable in the result.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SourceUnavailable` if the backing store cannot
    /// be read or reached.
    fn verify(&self, username: &str, digest: &SecretDigest) -> Result<bool, AuthError> {
        Ok(self
            .lookup(username)?
            .is_some_and(|credential| {
                crypto::constant_time_eq(credential.password_digest(), digest)
            }))
    }

    /// Resets the lockout state for a username, returning the number of
    /// affected rows. Zero means the store knows no such user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SourceUnavailable` on I/O failure.
    fn reset_lockout(&self, username: &str) -> Result<u64, AuthError>;
}

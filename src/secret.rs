//! Scoped plaintext secret buffer.
//!
//! The secret entered by a user exists as plaintext only inside a [`Secret`].
//! The buffer is zeroed when the value is dropped, on every exit path,
//! so the plaintext does not linger in memory after hashing.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// An exclusively-owned plaintext secret.
///
/// `Debug` and `Display` render `[REDACTED]` so the plaintext cannot be
/// accidentally logged or printed. The engine consumes a `Secret` by value;
/// the drop at the end of `authenticate` zeroes the buffer regardless of
/// which path the call returned through.
///
/// # Example
///
/// ```rust
/// use paddock::Secret;
///
/// let secret = Secret::new("correct-horse-battery");
///
/// assert_eq!(format!("{:?}", secret), "Secret([REDACTED])");
/// assert_eq!(secret.expose_bytes(), b"correct-horse-battery");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    bytes: Vec<u8>,
}

impl Secret {
    /// Creates a new `Secret` from a string, taking over its allocation.
    ///
    /// No plaintext copy is left behind in the caller's string.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            bytes: secret.into().into_bytes(),
        }
    }

    /// Creates a new `Secret` from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Exposes the UTF-8 bytes of the secret.
    ///
    /// Use only to feed a hashing function; avoid keeping the reference.
    #[must_use]
    pub fn expose_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns true if the secret is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the length of the secret in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Secret {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

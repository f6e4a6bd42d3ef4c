//! Secret digesting and digest comparison.
//!
//! Stored credentials carry a bare SHA-256 digest of the secret, so hashing
//! here is deterministic with a fixed-length output. Comparison is constant
//! time: a mismatch takes the same time no matter where the bytes differ.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::secret::Secret;

/// Length in bytes of a secret digest.
pub const DIGEST_LENGTH: usize = 32;

/// A fixed-length one-way digest of a secret.
pub type SecretDigest = [u8; DIGEST_LENGTH];

/// Error raised when a stored hex digest cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDigest;

impl std::fmt::Display for InvalidDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stored digest is not {} hex-encoded bytes", DIGEST_LENGTH)
    }
}

impl std::error::Error for InvalidDigest {}

/// Computes the SHA-256 digest of a secret's UTF-8 bytes.
///
/// The same secret always yields the same digest; the output length is
/// fixed regardless of the secret length.
pub fn digest_secret(secret: &Secret) -> SecretDigest {
    let mut hasher = Sha256::new();
    hasher.update(secret.expose_bytes());
    hasher.finalize().into()
}

/// Decodes a hex-encoded digest as stored in a credential file.
///
/// Hex case is insensitive: `3E2A...` and `3e2a...` decode identically,
/// which makes the later byte-wise comparison case-insensitive as well.
///
/// # Errors
///
/// Returns [`InvalidDigest`] if the input is not exactly
/// [`DIGEST_LENGTH`] bytes of hex.
pub fn parse_hex_digest(hex_digest: &str) -> Result<SecretDigest, InvalidDigest> {
    let bytes = hex::decode(hex_digest.trim()).map_err(|_| InvalidDigest)?;
    SecretDigest::try_from(bytes.as_slice()).map_err(|_| InvalidDigest)
}

/// Encodes a digest as lowercase hex, the credential-file representation.
pub fn encode_hex_digest(digest: &SecretDigest) -> String {
    hex::encode(digest)
}

/// Compares two byte slices in constant time.
///
/// An early-exit comparison leaks how many leading bytes matched through
/// response timing; `subtle` takes the same time regardless of where, or
/// whether, the inputs differ.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let secret = Secret::new("correct-secret");
        let first = digest_secret(&secret);
        let second = digest_secret(&Secret::new("correct-secret"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_digest_differs_for_different_secrets() {
        let a = digest_secret(&Secret::new("secret-a"));
        let b = digest_secret(&Secret::new("secret-b"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_digest_fixed_length() {
        let short = digest_secret(&Secret::new("x"));
        let long = digest_secret(&Secret::new("x".repeat(10_000)));
        assert_eq!(short.len(), DIGEST_LENGTH);
        assert_eq!(long.len(), DIGEST_LENGTH);
    }

    #[test]
    fn test_known_vector() {
        // SHA-256 of the empty string.
        let digest = digest_secret(&Secret::new(""));
        assert_eq!(
            encode_hex_digest(&digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_parse_hex_digest_case_insensitive() {
        let lower = parse_hex_digest(
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        )
        .unwrap();
        let upper = parse_hex_digest(
            "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855",
        )
        .unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_parse_hex_digest_rejects_bad_input() {
        assert_eq!(parse_hex_digest("not-hex").unwrap_err(), InvalidDigest);
        assert_eq!(parse_hex_digest("abcd").unwrap_err(), InvalidDigest);
        assert_eq!(parse_hex_digest("").unwrap_err(), InvalidDigest);
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"same-bytes", b"same-bytes"));
        assert!(!constant_time_eq(b"same-bytes", b"Same-bytes"));
        assert!(!constant_time_eq(b"short", b"longer-input"));
    }
}

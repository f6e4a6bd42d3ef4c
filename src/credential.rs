//! Credential value object and flat-file record parsing.

use serde::Serialize;

use crate::crypto::{self, SecretDigest};

/// A stored credential: who may sign in, the digest of their secret, and the
/// role they act under.
///
/// Immutable once loaded. The store does not enforce username uniqueness;
/// lookups return the first match, which is retained behavior of the
/// credential file format rather than a defect to paper over.
///
/// The digest is skipped on serialization, the same way a hashed password
/// never leaves a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    username: String,
    #[serde(skip_serializing)]
    password_digest: SecretDigest,
    role: String,
}

/// Error raised for a credential record that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialParseError {
    /// The record has fewer than the three required fields.
    TooFewFields(usize),
    /// The digest field is not valid fixed-length hex.
    InvalidDigest,
}

impl std::fmt::Display for CredentialParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewFields(n) => write!(f, "Credential record has {n} fields, expected at least 3"),
            Self::InvalidDigest => write!(f, "Credential record has a malformed digest field"),
        }
    }
}

impl std::error::Error for CredentialParseError {}

impl Credential {
    /// Creates a credential from already-decoded parts.
    #[must_use]
    pub fn new(username: impl Into<String>, password_digest: SecretDigest, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_digest,
            role: role.into(),
        }
    }

    /// Parses one tab-separated credential record.
    ///
    /// Layout: `username<TAB>hex_digest<TAB>...<TAB>role`. The username is
    /// the first field and the role the LAST, so extra middle fields are
    /// tolerated. Digest hex is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialParseError`] if the record has fewer than three
    /// fields or the digest does not decode.
    pub fn parse_record(record: &str) -> Result<Self, CredentialParseError> {
        let fields: Vec<&str> = record.split('\t').collect();

        if fields.len() < 3 {
            return Err(CredentialParseError::TooFewFields(fields.len()));
        }

        let password_digest = crypto::parse_hex_digest(fields[1])
            .map_err(|_| CredentialParseError::InvalidDigest)?;

        Ok(Self {
            username: fields[0].to_owned(),
            password_digest,
            role: fields[fields.len() - 1].to_owned(),
        })
    }

    /// The username this credential belongs to.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The stored digest of the secret.
    #[must_use]
    pub fn password_digest(&self) -> &SecretDigest {
        &self.password_digest
    }

    /// The role assigned to this user.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }
}

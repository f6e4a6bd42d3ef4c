pub mod username;

pub use username::validate_username;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    UsernameEmpty,
    UsernameTooLong,
    UsernameInvalid,
    SecretEmpty,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsernameEmpty => write!(f, "Please enter a username before logging in"),
            Self::UsernameTooLong => write!(f, "Username is too long (max 64 characters)"),
            Self::UsernameInvalid => write!(f, "Username contains invalid characters"),
            Self::SecretEmpty => write!(f, "Please enter a password before logging in"),
        }
    }
}

impl std::error::Error for ValidationError {}

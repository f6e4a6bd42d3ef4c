//! paddock: role-based sign-in with named events.
//!
//! The crate has two halves that are wired together by the host application:
//!
//! - [`AuthenticationEngine`] checks a username/secret pair against a
//!   [`CredentialSource`], counts failed attempts, and locks the session
//!   after too many of them.
//! - [`EventBus`] is a string-keyed publish/subscribe registry. The engine
//!   announces outcomes on it (`"LoginSuccess"`, `"AccountLocked"`) so that
//!   screens and other consumers can react without the engine knowing them.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::{Arc, Mutex};
//! use paddock::{AuthenticationEngine, EngineConfig, EventBus, Secret};
//! use paddock::source::FileCredentialSource;
//!
//! let bus = Arc::new(Mutex::new(EventBus::new()));
//!
//! bus.lock().unwrap().subscribe("main_window", "LoginSuccess", Box::new(|_, params| {
//!     // switch to the authorized-tasks screen
//! }));
//!
//! let source = FileCredentialSource::new("credentials.txt");
//! let mut engine = AuthenticationEngine::new(source, Arc::clone(&bus), EngineConfig::default());
//!
//! match engine.authenticate("alice", Secret::new("correct-secret")) {
//!     Ok(user) => println!("signed in as {} ({})", user.username, user.role),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod config;
pub mod credential;
pub mod crypto;
pub mod engine;
pub mod events;
pub mod roles;
pub mod secret;
pub mod source;
pub mod validators;

pub use config::{EngineConfig, LockoutConfig};
pub use credential::Credential;
pub use engine::{AuthenticatedUser, AuthenticationEngine, SessionState};
pub use events::{EventBus, EventParameter, NamedEvent};
pub use secret::Secret;
pub use source::CredentialSource;
pub use validators::ValidationError;

#[cfg(any(test, feature = "mocks"))]
pub use source::MockCredentialSource;

use std::fmt;

/// Errors produced by the authentication engine and its collaborators.
///
/// `Display` is the user-visible channel: it never reveals which input field
/// was wrong, nor any internal failure detail. Diagnostics belong in the log.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// Missing or malformed input. Recoverable; no attempt is counted.
    Validation(ValidationError),
    /// The credential source could not be read or reached. Recoverable;
    /// no attempt is counted. The payload is for diagnostics only.
    SourceUnavailable(String),
    /// No stored credential matched. Counted against the lockout threshold.
    InvalidCredentials,
    /// The attempt threshold was reached; the session is locked until an
    /// administrative unlock.
    LockedOut,
    /// The session already authenticated; a new engine instance is required
    /// to sign in again.
    AlreadyAuthenticated,
    /// Unexpected failure. The payload is for diagnostics only.
    Internal(String),
}

impl std::error::Error for AuthError {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Validation(err) => write!(f, "{err}"),
            AuthError::SourceUnavailable(_) => write!(f, "Unable to reach the credential source"),
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::LockedOut => write!(f, "Account locked after too many failed attempts"),
            AuthError::AlreadyAuthenticated => {
                write!(f, "Already signed in; start a new session to log in again")
            }
            AuthError::Internal(_) => write!(f, "An unknown error occurred"),
        }
    }
}

impl From<ValidationError> for AuthError {
    fn from(err: ValidationError) -> Self {
        AuthError::Validation(err)
    }
}

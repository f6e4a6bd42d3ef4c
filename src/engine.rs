//! The authentication engine.
//!
//! Orchestrates input validation, secret hashing, attempt counting, lockout,
//! and credential lookup. Outcomes are announced on the injected [`EventBus`]
//! so the engine never needs to know its consumers.
//!
//! A session moves `Idle → Attempting → {Authenticated, Rejected, Locked}`.
//! A rejection collapses back to `Idle` for another attempt; `Authenticated`
//! and `Locked` are terminal: signing in again takes a fresh engine
//! instance, and a locked session only reopens through an administrative
//! unlock.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::crypto;
use crate::events::{EventBus, EventParameter};
use crate::secret::Secret;
use crate::source::CredentialSource;
use crate::validators::{validate_username, ValidationError};
use crate::AuthError;

/// Channel announcing a successful sign-in. Parameters: `user`, `role`.
pub const LOGIN_SUCCESS: &str = "LoginSuccess";

/// Channel announcing a session lockout. Parameters: `user`, `attempts`.
pub const ACCOUNT_LOCKED: &str = "AccountLocked";

/// Channel a consumer publishes to end the authenticated session. No
/// parameters; the engine itself never publishes here.
pub const LOGOUT: &str = "Logout";

/// Sender identifier the engine uses when publishing.
const SENDER: &str = "authentication_engine";

/// Session state of an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready for an attempt.
    Idle,
    /// An attempt is in flight.
    Attempting,
    /// Terminal: the session signed in.
    Authenticated,
    /// Terminal: too many failed attempts.
    Locked,
}

/// The successfully authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: String,
}

/// Checks username/secret pairs against a [`CredentialSource`] and tracks
/// the session's failed-attempt state.
///
/// The engine owns its counters exclusively; nothing else mutates them.
/// Construct the bus and the engine once at startup and pass references to
/// consumers.
pub struct AuthenticationEngine<S> {
    source: S,
    bus: Arc<Mutex<EventBus>>,
    config: EngineConfig,
    attempts: u32,
    state: SessionState,
    last_attempt_at: Option<DateTime<Utc>>,
}

impl<S: CredentialSource> AuthenticationEngine<S> {
    /// Creates an engine over a credential source and an event bus.
    #[must_use]
    pub fn new(source: S, bus: Arc<Mutex<EventBus>>, config: EngineConfig) -> Self {
        Self {
            source,
            bus,
            config,
            attempts: 0,
            state: SessionState::Idle,
            last_attempt_at: None,
        }
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Failed attempts counted so far in this session.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// When the last counted attempt happened.
    #[must_use]
    pub fn last_attempt_at(&self) -> Option<DateTime<Utc>> {
        self.last_attempt_at
    }

    /// Attempts to authenticate the user.
    ///
    /// The secret is consumed by value and its plaintext buffer is zeroed on
    /// drop, on every exit path. The digest is computed before any source
    /// I/O, so the plaintext never outlives this frame.
    ///
    /// On success publishes [`LOGIN_SUCCESS`] with `{user, role}`; when the
    /// failed-attempt threshold is reached publishes [`ACCOUNT_LOCKED`] with
    /// `{user, attempts}`. A plain rejection publishes nothing; the caller
    /// surfaces the generic message and may try again.
    ///
    /// # Errors
    ///
    /// - `Validation`: missing or malformed input; not counted.
    /// - `SourceUnavailable`: store unreachable; not counted, retry allowed.
    /// - `InvalidCredentials`: no match; counted. The error does not reveal
    ///   whether the username or the secret was wrong.
    /// - `LockedOut`: this attempt reached the threshold, or the session
    ///   was already locked.
    /// - `AlreadyAuthenticated`: the session already signed in.
    pub fn authenticate(
        &mut self,
        username: &str,
        secret: Secret,
    ) -> Result<AuthenticatedUser, AuthError> {
        match self.state {
            SessionState::Locked => return Err(AuthError::LockedOut),
            SessionState::Authenticated => return Err(AuthError::AlreadyAuthenticated),
            SessionState::Idle | SessionState::Attempting => {}
        }

        validate_username(username)?;
        if secret.is_empty() {
            return Err(ValidationError::SecretEmpty.into());
        }

        self.state = SessionState::Attempting;

        let digest = crypto::digest_secret(&secret);
        drop(secret);

        let credential = match self.source.lookup(username) {
            Ok(found) => found,
            Err(err) => {
                self.state = SessionState::Idle;
                log::warn!(target: "paddock::engine", "credential lookup failed: {err:?}");
                return Err(err);
            }
        };

        self.attempts += 1;
        self.last_attempt_at = Some(Utc::now());

        match credential {
            Some(credential)
                if crypto::constant_time_eq(credential.password_digest(), &digest) =>
            {
                self.state = SessionState::Authenticated;
                log::info!(
                    target: "paddock::engine",
                    "user {username} authenticated with role {}",
                    credential.role()
                );
                self.publish(
                    LOGIN_SUCCESS,
                    &[
                        EventParameter::new("user", username),
                        EventParameter::new("role", credential.role()),
                    ],
                );
                Ok(AuthenticatedUser {
                    username: username.to_owned(),
                    role: credential.role().to_owned(),
                })
            }
            _ => {
                // Unknown user and wrong secret take the same path.
                if self.attempts >= self.config.lockout.max_attempts {
                    self.state = SessionState::Locked;
                    log::warn!(
                        target: "paddock::engine",
                        "session locked after {} failed attempts",
                        self.attempts
                    );
                    self.publish(
                        ACCOUNT_LOCKED,
                        &[
                            EventParameter::new("user", username),
                            EventParameter::new("attempts", self.attempts),
                        ],
                    );
                    Err(AuthError::LockedOut)
                } else {
                    self.state = SessionState::Idle;
                    Err(AuthError::InvalidCredentials)
                }
            }
        }
    }

    /// Administrative unlock for a user.
    ///
    /// Resets the lockout state in the credential source and, if at least
    /// one row was affected, resets this session's counters so sign-in can
    /// be attempted again. The caller surfaces success or failure; no
    /// automatic re-attempt happens here.
    ///
    /// # Errors
    ///
    /// - `Validation`: malformed username.
    /// - `SourceUnavailable`: the reset call failed.
    pub fn unlock_user(&mut self, username: &str) -> Result<u64, AuthError> {
        validate_username(username)?;

        let affected = self.source.reset_lockout(username)?;

        if affected > 0 {
            self.attempts = 0;
            if self.state == SessionState::Locked {
                self.state = SessionState::Idle;
            }
            log::info!(
                target: "paddock::engine",
                "unlocked user {username} ({affected} rows affected)"
            );
        }

        Ok(affected)
    }

    fn publish(&self, name: &str, parameters: &[EventParameter]) {
        let bus = match self.bus.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        bus.execute(SENDER, name, parameters);
    }
}

//! Configuration for the authentication engine.
//!
//! # Example
//!
//! ```rust
//! use paddock::config::{EngineConfig, LockoutConfig};
//!
//! // Use defaults
//! let config = EngineConfig::default();
//!
//! // Or customize
//! let config = EngineConfig {
//!     lockout: LockoutConfig { max_attempts: 5 },
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration struct for the authentication engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Failed-attempt lockout policy.
    pub lockout: LockoutConfig,
}

impl EngineConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration suitable for development/testing.
    ///
    /// Uses a more lenient lockout threshold.
    #[must_use]
    pub fn development() -> Self {
        Self {
            lockout: LockoutConfig { max_attempts: 10 },
        }
    }
}

/// Lockout policy for consecutive failed sign-in attempts.
///
/// The session locks when the failed-attempt count reaches the threshold;
/// a locked session rejects every further attempt until an administrative
/// unlock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockoutConfig {
    /// Maximum number of failed attempts before lockout.
    ///
    /// Default: 3
    pub max_attempts: u32,
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.lockout.max_attempts, 3);
    }

    #[test]
    fn test_development_config() {
        let config = EngineConfig::development();
        assert_eq!(config.lockout.max_attempts, 10);
    }
}

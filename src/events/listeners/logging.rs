use crate::events::EventBus;

/// Subscriber id used for the logging taps.
const SUBSCRIBER_ID: &str = "logging-listener";

/// Logs dispatches on chosen channels using the `log` crate.
///
/// # Example
///
/// ```rust
/// use paddock::events::EventBus;
/// use paddock::events::listeners::LoggingListener;
///
/// let mut bus = EventBus::new();
/// LoggingListener::new().attach(&mut bus, &["LoginSuccess", "AccountLocked", "Logout"]);
/// ```
pub struct LoggingListener {
    level: log::Level,
}

impl LoggingListener {
    /// Creates a new logging listener at INFO level.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: log::Level::Info,
        }
    }

    /// Creates a new logging listener at the specified level.
    #[must_use]
    pub fn with_level(level: log::Level) -> Self {
        Self { level }
    }

    /// Subscribes a logging handler on each of the given channels.
    ///
    /// Parameter values are logged through their `Debug` form, so payloads
    /// with redacted representations stay redacted.
    pub fn attach(&self, bus: &mut EventBus, channels: &[&str]) {
        for name in channels {
            let level = self.level;
            let channel = (*name).to_owned();
            bus.subscribe(
                SUBSCRIBER_ID,
                name,
                Box::new(move |sender, params| {
                    log::log!(
                        target: "paddock::events",
                        level,
                        "event={channel} sender={sender} params={params:?}"
                    );
                }),
            );
        }
    }
}

impl Default for LoggingListener {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_listener_new() {
        let listener = LoggingListener::new();
        assert_eq!(listener.level, log::Level::Info);
    }

    #[test]
    fn test_logging_listener_with_level() {
        let listener = LoggingListener::with_level(log::Level::Debug);
        assert_eq!(listener.level, log::Level::Debug);
    }

    #[test]
    fn test_attach_subscribes_channels() {
        let mut bus = EventBus::new();
        LoggingListener::new().attach(&mut bus, &["LoginSuccess", "Logout"]);

        assert!(bus.is_subscribed(SUBSCRIBER_ID, "LoginSuccess"));
        assert!(bus.is_subscribed(SUBSCRIBER_ID, "Logout"));
    }

    #[test]
    fn test_attached_handler_does_not_panic() {
        let mut bus = EventBus::new();
        LoggingListener::new().attach(&mut bus, &["LoginSuccess"]);

        bus.execute("login_screen", "LoginSuccess", &[]);
    }
}

//! Built-in event listeners.
//!
//! These subscribe ordinary handlers on named channels to provide common
//! functionality out of the box.

mod logging;

pub use logging::LoggingListener;

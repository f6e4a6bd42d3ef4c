//! Named events: string-keyed publish/subscribe.
//!
//! A [`NamedEvent`] is one channel with an ordered list of subscribers and
//! their handlers. The [`EventBus`] is the registry of channels; the channel
//! name is the only coupling between a producer and its consumers, so either
//! side can be swapped without the other knowing. Names match exactly: no
//! wildcards, no hierarchy.
//!
//! Dispatch is synchronous and in subscription order. If nothing is
//! subscribed to a name, executing it is a no-op, never an error.
//!
//! # Quick Start
//!
//! ```rust
//! use paddock::events::{EventBus, EventParameter};
//!
//! let mut bus = EventBus::new();
//!
//! bus.subscribe("main_window", "LoginSuccess", Box::new(|_sender, params| {
//!     let user = params[0].as_str().unwrap_or_default();
//!     println!("signed in: {user}");
//! }));
//!
//! bus.execute(
//!     "login_screen",
//!     "LoginSuccess",
//!     &[
//!         EventParameter::new("user", "alice"),
//!         EventParameter::new("role", "zookeeper"),
//!     ],
//! );
//! ```
//!
//! # Re-entrancy
//!
//! Handlers must not mutate the bus they are being dispatched from. With the
//! bus behind a `Mutex`, a handler that calls back into it deadlocks; keep
//! handlers passive and do registry changes between dispatches.

mod bus;
mod channel;
mod parameter;

pub mod listeners;

pub use bus::EventBus;
pub use channel::{EventHandler, EventReturnHandler, NamedEvent};
pub use parameter::EventParameter;

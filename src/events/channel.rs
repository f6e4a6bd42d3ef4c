use std::fmt;

use serde_json::Value;

use super::EventParameter;

/// A fire-and-forget event handler.
///
/// Receives the sender's identifier and the parameter list.
pub type EventHandler = Box<dyn Fn(&str, &[EventParameter]) + Send + Sync>;

/// An event handler that produces a result.
pub type EventReturnHandler = Box<dyn Fn(&str, &[EventParameter]) -> Value + Send + Sync>;

/// One named channel: an ordered subscriber list plus the handlers attached
/// by those subscribers.
///
/// Each subscriber holds at most one handler of each kind on a channel;
/// attaching again replaces the previous handler in place. The two handler
/// kinds (fire-and-forget and return-capable) coexist independently.
pub struct NamedEvent {
    name: String,
    subscribers: Vec<String>,
    handlers: Vec<(String, EventHandler)>,
    return_handlers: Vec<(String, EventReturnHandler)>,
}

impl NamedEvent {
    /// Creates an empty channel with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscribers: Vec::new(),
            handlers: Vec::new(),
            return_handlers: Vec::new(),
        }
    }

    /// The name of this channel.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subscriber identifiers in subscription order.
    #[must_use]
    pub fn subscribers(&self) -> &[String] {
        &self.subscribers
    }

    /// Returns true if the subscriber is registered on this channel.
    #[must_use]
    pub fn has_subscriber(&self, subscriber: &str) -> bool {
        self.subscribers.iter().any(|s| s == subscriber)
    }

    /// Attaches a fire-and-forget handler for a subscriber.
    ///
    /// If the subscriber already has one on this channel, it is replaced in
    /// place, keeping its original dispatch position.
    pub fn attach(&mut self, subscriber: &str, handler: EventHandler) {
        self.remember_subscriber(subscriber);

        if let Some(slot) = self.handlers.iter_mut().find(|(s, _)| s == subscriber) {
            slot.1 = handler;
        } else {
            self.handlers.push((subscriber.to_owned(), handler));
        }
    }

    /// Attaches a return-capable handler for a subscriber.
    ///
    /// Same replacement semantics as [`attach`](Self::attach).
    pub fn attach_return(&mut self, subscriber: &str, handler: EventReturnHandler) {
        self.remember_subscriber(subscriber);

        if let Some(slot) = self.return_handlers.iter_mut().find(|(s, _)| s == subscriber) {
            slot.1 = handler;
        } else {
            self.return_handlers.push((subscriber.to_owned(), handler));
        }
    }

    /// Removes a subscriber and detaches its handlers of both kinds.
    ///
    /// No-op if the subscriber is not registered.
    pub fn detach(&mut self, subscriber: &str) {
        self.subscribers.retain(|s| s != subscriber);
        self.handlers.retain(|(s, _)| s != subscriber);
        self.return_handlers.retain(|(s, _)| s != subscriber);
    }

    /// Invokes every fire-and-forget handler synchronously, in subscription
    /// order.
    pub fn execute(&self, sender: &str, parameters: &[EventParameter]) {
        for (_, handler) in &self.handlers {
            handler(sender, parameters);
        }
    }

    /// Invokes every return-capable handler synchronously, in subscription
    /// order, collecting all results.
    #[must_use]
    pub fn execute_with_return(&self, sender: &str, parameters: &[EventParameter]) -> Vec<Value> {
        self.return_handlers
            .iter()
            .map(|(_, handler)| handler(sender, parameters))
            .collect()
    }

    /// Detaches all handlers and forgets all subscribers.
    pub fn clear(&mut self) {
        self.subscribers.clear();
        self.handlers.clear();
        self.return_handlers.clear();
    }

    fn remember_subscriber(&mut self, subscriber: &str) {
        if !self.has_subscriber(subscriber) {
            self.subscribers.push(subscriber.to_owned());
        }
    }
}

impl fmt::Debug for NamedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedEvent")
            .field("name", &self.name)
            .field("subscribers", &self.subscribers)
            .field("handlers", &self.handlers.len())
            .field("return_handlers", &self.return_handlers.len())
            .finish()
    }
}

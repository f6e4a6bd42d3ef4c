use std::collections::HashMap;

use serde_json::Value;

use super::{EventHandler, EventParameter, EventReturnHandler, NamedEvent};

/// Registry of named channels.
///
/// The bus owns every channel it creates; subscribers are referenced by
/// string identifier only. Construct one bus at startup and hand references
/// to producers and consumers; there is deliberately no global instance.
#[derive(Debug, Default)]
pub struct EventBus {
    channels: HashMap<String, NamedEvent>,
}

impl EventBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds or creates the channel and attaches a fire-and-forget handler.
    ///
    /// If `subscriber` already has a handler of this kind on the channel, it
    /// is replaced; a subscriber is never invoked twice for one execution.
    pub fn subscribe(&mut self, subscriber: &str, name: &str, handler: EventHandler) {
        self.channel_mut(name).attach(subscriber, handler);
    }

    /// Finds or creates the channel and attaches a return-capable handler.
    ///
    /// Same replacement semantics as [`subscribe`](Self::subscribe); the two
    /// handler kinds coexist independently on a channel.
    pub fn subscribe_with_return(
        &mut self,
        subscriber: &str,
        name: &str,
        handler: EventReturnHandler,
    ) {
        self.channel_mut(name).attach_return(subscriber, handler);
    }

    /// Removes the subscriber from the channel and detaches its handlers.
    ///
    /// No-op if the channel or the subscriber does not exist.
    pub fn unsubscribe(&mut self, subscriber: &str, name: &str) {
        if let Some(channel) = self.channels.get_mut(name) {
            channel.detach(subscriber);
        }
    }

    /// Returns true if the subscriber is registered on the channel.
    #[must_use]
    pub fn is_subscribed(&self, subscriber: &str, name: &str) -> bool {
        self.channels
            .get(name)
            .is_some_and(|channel| channel.has_subscriber(subscriber))
    }

    /// Returns true if a channel with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Executes the channel's fire-and-forget handlers synchronously, in
    /// subscription order.
    ///
    /// No-op if the channel does not exist, never an error.
    pub fn execute(&self, sender: &str, name: &str, parameters: &[EventParameter]) {
        if let Some(channel) = self.channels.get(name) {
            channel.execute(sender, parameters);
        }
    }

    /// Executes the channel's return-capable handlers synchronously, in
    /// subscription order, collecting every result.
    ///
    /// Returns an empty list if the channel does not exist or has no
    /// return-capable handlers.
    #[must_use]
    pub fn execute_with_return(
        &self,
        sender: &str,
        name: &str,
        parameters: &[EventParameter],
    ) -> Vec<Value> {
        match self.channels.get(name) {
            Some(channel) => channel.execute_with_return(sender, parameters),
            None => Vec::new(),
        }
    }

    /// Detaches every handler and subscriber from every channel and empties
    /// the registry. Irreversible.
    pub fn clear(&mut self) {
        for channel in self.channels.values_mut() {
            channel.clear();
        }
        self.channels.clear();
    }

    fn channel_mut(&mut self, name: &str) -> &mut NamedEvent {
        self.channels
            .entry(name.to_owned())
            .or_insert_with(|| NamedEvent::new(name))
    }
}

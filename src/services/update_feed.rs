//! Fan-out feed for update lifecycle notifications.
//!
//! Subscribing returns a disposer handle plus a receiver, making
//! registration and teardown an explicit pair instead of inline closures.
//! `emit` prunes subscribers whose receiver was dropped, so a controller
//! that goes away on any path, clean or not, stops observing events.

use std::sync::mpsc::{self, Receiver, Sender};

use log::trace;

use crate::types::update::UpdateEvent;

/// Disposer handle for one subscription. Pass it back to [`UpdateFeed::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

/// Fan-out of update notifications to any number of subscribers.
///
/// Events emitted before a subscription are not replayed; after it, every
/// event is delivered in emission order.
pub struct UpdateFeed {
    next_id: u64,
    subscribers: Vec<(u64, Sender<UpdateEvent>)>,
}

impl UpdateFeed {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Registers a new subscriber and returns its disposer handle and
    /// event receiver.
    pub fn subscribe(&mut self) -> (Subscription, Receiver<UpdateEvent>) {
        let id = self.next_id;
        self.next_id += 1;
        let (tx, rx) = mpsc::channel();
        self.subscribers.push((id, tx));
        trace!("update feed: subscriber {} registered", id);
        (Subscription(id), rx)
    }

    /// Removes a subscriber. Unknown handles are ignored (the subscriber
    /// may already have been pruned after its receiver was dropped).
    pub fn unsubscribe(&mut self, sub: Subscription) {
        self.subscribers.retain(|(id, _)| *id != sub.0);
        trace!("update feed: subscriber {} released", sub.0);
    }

    /// Delivers an event to every live subscriber, pruning dead ones.
    pub fn emit(&mut self, event: UpdateEvent) {
        self.subscribers
            .retain(|(_, tx)| tx.send(event.clone()).is_ok());
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for UpdateFeed {
    fn default() -> Self {
        Self::new()
    }
}

//! The notifier collaborator: a side channel for short diagnostic lines.
//!
//! # Design
//! `Notifier` is an injected capability rather than a global logger so tests
//! can substitute a double and UIs can render the messages later. `add` is
//! fire-and-forget with no failure mode visible to the caller.

use std::sync::{Arc, Mutex};

/// Records short human-readable messages for later display.
pub trait Notifier {
    fn add(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn add(&self, message: &str) {
        (**self).add(message);
    }
}

/// In-memory notifier keeping messages in insertion order.
///
/// Doubles as the test observer: share one instance via `Arc` between a
/// `HeroService` and the assertion side.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Mutex<Vec<String>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl Notifier for MessageLog {
    fn add(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

//! Topic-keyed subscription hub for inbound data-channel payloads.
//!
//! DESIGN
//! ======
//! Listeners register `(topic, handler)` pairs and get a `Subscription` back.
//! The session binding calls `deliver` for every `Data` event; the hub fans
//! the bytes out to the handlers registered for that topic. Nothing here
//! knows about transports, so listener logic can be driven from tests.
//!
//! Handlers are `Send + Sync` only because Leptos signals and cleanup hooks
//! require it; delivery always happens on the UI thread.

#[cfg(test)]
#[path = "data_channel_test.rs"]
mod data_channel_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Topic carrying the in-progress drink visualization fragment.
pub const DRINK_VISUALIZATION_TOPIC: &str = "drink_visualization";
/// Topic carrying the completed order receipt fragment.
pub const ORDER_RECEIPT_TOPIC: &str = "order_receipt";

type MessageHandler = Arc<dyn Fn(&[u8]) + Send + Sync>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    handlers: Vec<(u64, String, MessageHandler)>,
}

/// Shared registry of data-channel listeners.
#[derive(Clone, Default)]
pub struct DataChannelHub {
    inner: Arc<Mutex<HubInner>>,
}

impl std::fmt::Debug for DataChannelHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("DataChannelHub").field("handlers", &inner.handlers.len()).finish()
    }
}

impl DataChannelHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for payloads on `topic`.
    ///
    /// The handler stays registered until the returned subscription is
    /// cancelled or dropped.
    #[must_use = "dropping the subscription unregisters the handler"]
    pub fn on_message<F>(&self, topic: &str, handler: F) -> Subscription
    where
        F: Fn(&[u8]) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, topic.to_owned(), Arc::new(handler)));
        Subscription { hub: Arc::downgrade(&self.inner), id }
    }

    /// Hand `payload` to every handler registered for `topic`, in
    /// registration order. Returns how many handlers ran.
    ///
    /// Handlers run against a snapshot taken before the first call, so a
    /// handler may subscribe or unsubscribe without deadlocking.
    pub fn deliver(&self, topic: &str, payload: &[u8]) -> usize {
        let targets = {
            let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner
                .handlers
                .iter()
                .filter(|(_, t, _)| t == topic)
                .map(|(_, _, handler)| Arc::clone(handler))
                .collect::<Vec<_>>()
        };
        for handler in &targets {
            handler(payload);
        }
        targets.len()
    }

    /// Number of live handlers for `topic`.
    #[must_use]
    pub fn subscriber_count(&self, topic: &str) -> usize {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.handlers.iter().filter(|(_, t, _)| t == topic).count()
    }
}

/// Registration token returned by [`DataChannelHub::on_message`].
#[derive(Debug)]
pub struct Subscription {
    hub: Weak<Mutex<HubInner>>,
    id: u64,
}

impl Subscription {
    /// Unregister the handler now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.handlers.retain(|(id, _, _)| *id != self.id);
        }
    }
}

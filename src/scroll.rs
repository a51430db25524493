//! The carousel's scroll offset as an observable cell.

use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(f32)>;

/// Horizontal scroll offset in pixels.
///
/// Every `set` publishes the new value to all current subscribers,
/// synchronously and in subscription order. Listeners must not subscribe or
/// unsubscribe on the same cell while they are being notified.
pub struct ScrollOffset {
    value: Cell<f32>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
}

impl ScrollOffset {
    pub fn new() -> Self {
        Self {
            value: Cell::new(0.0),
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn get(&self) -> f32 {
        self.value.get()
    }

    pub fn set(&self, value: f32) {
        self.value.set(value);
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(value);
        }
    }

    pub fn subscribe(&self, listener: impl FnMut(f32) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScrollOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollOffset")
            .field("value", &self.value.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

//! Property-changed notifications for bindable models.
//!
//! # Invariants
//! - `set_property` notifies only when the stored value actually changes.
//! - Handlers receive the property name and run in subscription order.

use crate::collection::observable::SubscriptionId;
use uuid::Uuid;

type PropertyHandler = Box<dyn FnMut(&str)>;

/// Subscriber registry for property-changed events.
#[derive(Default)]
pub struct PropertyNotifier {
    handlers: Vec<(SubscriptionId, PropertyHandler)>,
}

impl std::fmt::Debug for PropertyNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyNotifier")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl PropertyNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&str) + 'static) -> SubscriptionId {
        let id = Uuid::new_v4();
        self.handlers.push((id, Box::new(handler)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    /// Stores `value` into `storage` and raises `property` when it differs.
    ///
    /// Returns whether the stored value changed.
    pub fn set_property<V: PartialEq>(
        &mut self,
        storage: &mut V,
        value: V,
        property: &str,
    ) -> bool {
        if *storage == value {
            return false;
        }
        *storage = value;
        self.notify(property);
        true
    }

    /// Raises `property` unconditionally.
    pub fn notify(&mut self, property: &str) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(property);
        }
    }
}

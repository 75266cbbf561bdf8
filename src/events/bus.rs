//! Observer registry.
//!
//! Observers are called synchronously, in subscription order, for every
//! event they are interested in. Any `FnMut(&GameEvent)` is an observer.

use rustc_hash::FxHashSet;

use super::event::{EventKind, GameEvent};

/// Receives engine events.
pub trait GameObserver {
    /// Called once per event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u32);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

struct Subscription {
    id: SubscriptionId,
    /// `None` = every kind.
    kinds: Option<FxHashSet<EventKind>>,
    observer: Box<dyn GameObserver>,
}

/// Dispatches events to subscribed observers.
#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
    next_id: u32,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        self.insert(None, Box::new(observer))
    }

    /// Subscribe to the given event kinds only.
    pub fn subscribe_to(
        &mut self,
        kinds: &[EventKind],
        observer: impl GameObserver + 'static,
    ) -> SubscriptionId {
        let kinds = kinds.iter().copied().collect();
        self.insert(Some(kinds), Box::new(observer))
    }

    fn insert(
        &mut self,
        kinds: Option<FxHashSet<EventKind>>,
        observer: Box<dyn GameObserver>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kinds, observer });
        id
    }

    /// Remove a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver an event to every interested observer.
    pub fn emit(&mut self, event: GameEvent) {
        let kind = event.kind();
        for sub in &mut self.subscriptions {
            if sub.kinds.as_ref().map_or(true, |kinds| kinds.contains(&kind)) {
                sub.observer.on_event(&event);
            }
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

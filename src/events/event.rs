//! Change notifications emitted by the engine.
//!
//! Each event carries only what a presentation layer needs to mirror the
//! change. Events are emitted synchronously, in the order the engine
//! performs the corresponding state changes.

use serde::{Deserialize, Serialize};

use crate::core::Card;

/// Discriminant of a [`GameEvent`], for filtering subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Deal,
    PopFromDeck,
    PopFromFoundation,
    PushToFoundation,
    Reveal,
    Restored,
}

/// A state change the engine performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The draw advanced: cards moved stock → waste, or the waste was
    /// recycled.
    Deal,
    /// The newest waste card was taken.
    PopFromDeck { card: Card },
    /// The top card of a foundation was taken.
    PopFromFoundation { card: Card },
    /// A card was placed on its foundation.
    PushToFoundation { card: Card },
    /// The next hidden card of a pile was turned face up.
    Reveal { pile: usize, card: Card },
    /// The whole board was replaced (undo). Observers should re-read it.
    Restored,
}

impl GameEvent {
    /// The kind of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::Deal => EventKind::Deal,
            GameEvent::PopFromDeck { .. } => EventKind::PopFromDeck,
            GameEvent::PopFromFoundation { .. } => EventKind::PopFromFoundation,
            GameEvent::PushToFoundation { .. } => EventKind::PushToFoundation,
            GameEvent::Reveal { .. } => EventKind::Reveal,
            GameEvent::Restored => EventKind::Restored,
        }
    }

    /// The card the event concerns, if any.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match *self {
            GameEvent::PopFromDeck { card }
            | GameEvent::PopFromFoundation { card }
            | GameEvent::PushToFoundation { card }
            | GameEvent::Reveal { card, .. } => Some(card),
            GameEvent::Deal | GameEvent::Restored => None,
        }
    }
}

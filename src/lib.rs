//! # klondike-engine
//!
//! Rule engine for Klondike solitaire. It tracks where every card is,
//! decides where a lifted card or run may legally go, and applies moves
//! while notifying observers of each state change.
//!
//! Rendering, drag handling, animation, and sound are left to a
//! presentation layer that drives the engine and subscribes to its events.
//!
//! ## Design Principles
//!
//! 1. **Validated commands**: `make_move` checks a move against the current
//!    board before touching it. A rejected move changes nothing.
//!
//! 2. **One event stream**: every change is a `GameEvent`, dispatched
//!    synchronously in the order the engine performs it.
//!
//! 3. **Explicit emptiness**: empty piles and foundations are `None`, never
//!    a fake card or a reserved rank.
//!
//! ## Modules
//!
//! - `core`: Cards, positions, configuration, RNG
//! - `zones`: Deck (stock/waste), tableau piles, foundations
//! - `events`: Event type and observer registry
//! - `rules`: Board, move legality, the `Solitaire` engine
//! - `history`: Snapshots for save/load, undo stack
//! - `error`: `MoveError`, `SetupError`

pub mod core;
pub mod error;
pub mod events;
pub mod history;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Color, GameRng, KlondikeConfig, Position, Rank, RecycleOrder, Suit,
    N_CARDS, N_PILES, N_RANKS, N_SUITS,
};

pub use crate::error::{MoveError, SetupError};

pub use crate::events::{EventBus, EventKind, GameEvent, GameObserver, SubscriptionId};

pub use crate::history::{GameSnapshot, UndoStack};

pub use crate::rules::{Board, Destinations, Move, Solitaire};

pub use crate::zones::{Deck, Foundation, TableauPile};

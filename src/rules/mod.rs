//! Klondike rules and the engine that enforces them.
//!
//! - `Board`: card locations, deal layout, destination legality, invariants
//! - `Move`: a command, as produced by `legal_moves`
//! - `Solitaire`: the engine; validates and applies moves, emits events

pub mod board;
pub mod engine;
pub mod moves;

pub use board::{empty_foundations, Board, Destinations, Run};
pub use engine::Solitaire;
pub use moves::Move;

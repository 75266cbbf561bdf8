//! Core types: cards, positions, configuration, RNG.

pub mod card;
pub mod position;
pub mod config;
pub mod rng;

pub use card::{tableau_accepts, Card, CardId, Color, Rank, Suit, N_CARDS, N_RANKS, N_SUITS};
pub use position::{Position, N_PILES, N_TABLEAU_CARDS};
pub use config::{KlondikeConfig, RecycleOrder};
pub use rng::GameRng;

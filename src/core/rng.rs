//! Seeded shuffling.
//!
//! A deal is fully determined by its seed, so a game can be replayed or
//! shared by seed alone.
//!
//! ```
//! use klondike_engine::core::GameRng;
//!
//! let a = GameRng::new(7).shuffled_deck();
//! let b = GameRng::new(7).shuffled_deck();
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::card::Card;

/// ChaCha8 stream keyed by a `u64` seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// All 52 cards in the order this seed deals them.
    #[must_use]
    pub fn shuffled_deck(&mut self) -> Vec<Card> {
        let mut cards = Card::full_deck();
        self.shuffle(&mut cards);
        cards
    }
}

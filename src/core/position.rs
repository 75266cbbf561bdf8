//! Card positions: the deck, the four foundations, the seven tableau piles.
//!
//! Presentation layers address containers by a small integer id; the
//! encoding is part of the public contract:
//!
//! | Position        | Id        |
//! |-----------------|-----------|
//! | `Deck`          | `0`       |
//! | `Foundation(s)` | `1 + s`   |
//! | `Pile(i)`       | `5 + i`   |
//!
//! ```
//! use klondike_engine::core::{Position, Suit};
//!
//! assert_eq!(Position::Deck.id(), 0);
//! assert_eq!(Position::Foundation(Suit::SPADES).id(), 4);
//! assert_eq!(Position::from_id(11), Some(Position::Pile(6)));
//! assert_eq!(Position::from_id(12), None);
//! ```

use serde::{Deserialize, Serialize};

use super::card::{Suit, N_SUITS};

/// Number of tableau piles.
pub const N_PILES: usize = 7;

/// Number of cards dealt into the tableau (hidden plus the visible tops).
pub const N_TABLEAU_CARDS: usize = N_PILES * (N_PILES + 1) / 2;

/// A container a card can be moved from or to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// The stock/waste pair. As a source, the newest waste card.
    Deck,
    /// The foundation holding the given suit.
    Foundation(Suit),
    /// A tableau pile, `0..7`.
    Pile(usize),
}

impl Position {
    /// Id of the deck.
    pub const DECK_ID: u8 = 0;
    /// Id of the first foundation.
    pub const FOUNDATION_BASE: u8 = 1;
    /// Id of the first tableau pile.
    pub const PILE_BASE: u8 = Self::FOUNDATION_BASE + N_SUITS as u8;

    /// Numeric id of this position.
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Position::Deck => Self::DECK_ID,
            Position::Foundation(suit) => Self::FOUNDATION_BASE + suit.raw(),
            Position::Pile(index) => {
                Self::PILE_BASE.saturating_add(index.min(u8::MAX as usize) as u8)
            }
        }
    }

    /// Decode a numeric id; `None` outside `0..12`.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            Self::DECK_ID => Some(Position::Deck),
            id if id < Self::PILE_BASE => {
                Suit::new(id - Self::FOUNDATION_BASE).map(Position::Foundation)
            }
            id if ((id - Self::PILE_BASE) as usize) < N_PILES => {
                Some(Position::Pile((id - Self::PILE_BASE) as usize))
            }
            _ => None,
        }
    }

    /// Whether the position refers to an existing container.
    ///
    /// `Pile` carries a bare index, so it can be constructed out of range.
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Position::Pile(index) => index < N_PILES,
            _ => true,
        }
    }

    /// All positions in id order.
    pub fn all() -> impl Iterator<Item = Position> {
        std::iter::once(Position::Deck)
            .chain(Suit::all().map(Position::Foundation))
            .chain((0..N_PILES).map(Position::Pile))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Deck => write!(f, "Deck"),
            Position::Foundation(suit) => write!(f, "Foundation({})", suit),
            Position::Pile(index) => write!(f, "Pile({})", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_ids() {
        assert_eq!(Position::Deck.id(), 0);
        assert_eq!(Position::Foundation(Suit::HEARTS).id(), 1);
        assert_eq!(Position::Foundation(Suit::SPADES).id(), 4);
        assert_eq!(Position::Pile(0).id(), 5);
        assert_eq!(Position::Pile(6).id(), 11);
    }

    #[test]
    fn test_id_round_trip() {
        for pos in Position::all() {
            assert_eq!(Position::from_id(pos.id()), Some(pos));
        }
        assert_eq!(Position::all().count(), 1 + N_SUITS + N_PILES);
    }

    #[test]
    fn test_out_of_range_ids() {
        assert_eq!(Position::from_id(12), None);
        assert_eq!(Position::from_id(255), None);
    }

    #[test]
    fn test_is_valid() {
        assert!(Position::Pile(6).is_valid());
        assert!(!Position::Pile(7).is_valid());
        assert!(Position::Deck.is_valid());
    }

    #[test]
    fn test_tableau_card_count() {
        assert_eq!(N_TABLEAU_CARDS, 28);
    }
}

//! Move representation.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Position};

/// A command for [`super::Solitaire::apply`].
///
/// `card` is `None` only for the deal (`Deck` → `Deck`). For a tableau
/// source, `card` is the bottom card of the run being moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: Option<Card>,
    pub src: Position,
    pub dst: Position,
}

impl Move {
    /// The deal: advance the draw.
    #[must_use]
    pub const fn deal() -> Self {
        Self {
            card: None,
            src: Position::Deck,
            dst: Position::Deck,
        }
    }

    /// Move `card` (and, from a pile, everything above it).
    #[must_use]
    pub const fn card(card: Card, src: Position, dst: Position) -> Self {
        Self {
            card: Some(card),
            src,
            dst,
        }
    }

    /// Whether this is the deal.
    #[must_use]
    pub fn is_deal(&self) -> bool {
        self.src == Position::Deck && self.dst == Position::Deck
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.card {
            _ if self.is_deal() => write!(f, "deal"),
            Some(card) => write!(f, "{} {} -> {}", card, self.src, self.dst),
            None => write!(f, "? {} -> {}", self.src, self.dst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    #[test]
    fn test_display() {
        assert_eq!(Move::deal().to_string(), "deal");

        let mv = Move::card(
            Card::new(Rank::ACE, Suit::SPADES),
            Position::Pile(3),
            Position::Foundation(Suit::SPADES),
        );
        assert_eq!(mv.to_string(), "A♤ Pile(3) -> Foundation(♤)");
        assert!(!mv.is_deal());
    }
}

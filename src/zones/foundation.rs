//! Foundations.
//!
//! A foundation only records the rank of its top card: cards arrive
//! strictly in order from Ace, so the top rank determines the whole pile.
//! Emptiness is explicit (`None`) rather than a reserved rank.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Rank, Suit};

/// The foundation of one suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation {
    suit: Suit,
    top: Option<Rank>,
}

impl Foundation {
    /// Create an empty foundation.
    #[must_use]
    pub const fn new(suit: Suit) -> Self {
        Self { suit, top: None }
    }

    /// Create a foundation already built up to `top`.
    #[must_use]
    pub const fn with_top(suit: Suit, top: Option<Rank>) -> Self {
        Self { suit, top }
    }

    /// The suit this foundation holds.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Rank of the top card, `None` when empty.
    #[must_use]
    pub const fn top_rank(&self) -> Option<Rank> {
        self.top
    }

    /// The top card, `None` when empty.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.top.map(|rank| Card::new(rank, self.suit))
    }

    /// The rank the foundation accepts next; `None` once complete.
    #[must_use]
    pub fn next_rank(&self) -> Option<Rank> {
        match self.top {
            None => Some(Rank::ACE),
            Some(rank) => rank.next(),
        }
    }

    /// Whether `card` is the next card of this foundation.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        card.suit == self.suit && Some(card.rank) == self.next_rank()
    }

    /// Number of cards on the foundation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.top.map_or(0, |rank| rank.raw() as usize + 1)
    }

    /// Whether no card has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Whether the King has been placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.top == Some(Rank::KING)
    }

    /// Cards on the foundation, Ace first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        Rank::all()
            .take(self.len())
            .map(move |rank| Card::new(rank, self.suit))
    }

    /// Advance by one rank. Returns the placed card, or `None` when
    /// already complete.
    pub fn push(&mut self) -> Option<Card> {
        let rank = self.next_rank()?;
        self.top = Some(rank);
        Some(Card::new(rank, self.suit))
    }

    /// Retreat by one rank. Returns the removed card, or `None` when empty.
    pub fn pop(&mut self) -> Option<Card> {
        let card = self.top_card()?;
        self.top = card.rank.prev();
        Some(card)
    }
}

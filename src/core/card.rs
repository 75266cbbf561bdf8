//! Card identity: rank, suit, color, and the tableau stacking rule.
//!
//! Cards carry no mutable state. The engine creates all 52 once, shuffles
//! them, and afterwards only moves them between containers.
//!
//! ## Encoding
//!
//! - Ranks: `0` = Ace ..= `12` = King
//! - Suits: `0` ♡, `1` ♢ (red), `2` ♧, `3` ♤ (black)
//! - Id: `rank * 4 + suit`, unique in `0..52`
//!
//! ```
//! use klondike_engine::core::{Card, Rank, Suit};
//!
//! let five_hearts = Card::new(Rank::new(4).unwrap(), Suit::HEARTS);
//! let four_clubs = Card::new(Rank::new(3).unwrap(), Suit::CLUBS);
//!
//! assert!(five_hearts.precedes_in_stack(&four_clubs));
//! assert_eq!(five_hearts.id().raw(), 16);
//! ```

use serde::{Deserialize, Serialize};

/// Number of suits in the deck.
pub const N_SUITS: usize = 4;

/// Number of ranks per suit.
pub const N_RANKS: usize = 13;

/// Total number of cards.
pub const N_CARDS: usize = N_SUITS * N_RANKS;

const RANK_SYMBOLS: [&str; N_RANKS] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

const SUIT_SYMBOLS: [&str; N_SUITS] = ["♡", "♢", "♧", "♤"];

/// Card rank, `0` (Ace) through `12` (King).
///
/// Deserialization rejects out-of-range values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// The lowest rank; the first card placed on a foundation.
    pub const ACE: Rank = Rank(0);

    /// The highest rank; the only card an empty tableau pile accepts.
    pub const KING: Rank = Rank(N_RANKS as u8 - 1);

    /// Create a rank, or `None` if out of range.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < N_RANKS {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The rank directly above this one, or `None` for King.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// The rank directly below this one, or `None` for Ace.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self.0 {
            0 => None,
            r => Some(Self(r - 1)),
        }
    }

    /// Iterate over all ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (0..N_RANKS as u8).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(RANK_SYMBOLS[self.0 as usize])
    }
}

/// Card suit, `0..4`. Suits 0-1 are red, 2-3 black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Suit(u8);

impl Suit {
    pub const HEARTS: Suit = Suit(0);
    pub const DIAMONDS: Suit = Suit(1);
    pub const CLUBS: Suit = Suit(2);
    pub const SPADES: Suit = Suit(3);

    /// Create a suit, or `None` if out of range.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < N_SUITS {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw suit value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index into per-suit arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Color of this suit, decided by bit 1.
    #[must_use]
    pub const fn color(self) -> Color {
        if self.0 & 2 == 0 {
            Color::Red
        } else {
            Color::Black
        }
    }

    /// Iterate over all suits in index order.
    pub fn all() -> impl Iterator<Item = Suit> {
        (0..N_SUITS as u8).map(Suit)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(SUIT_SYMBOLS[self.0 as usize])
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {} out of range", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl TryFrom<u8> for Suit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Suit::new(value).ok_or_else(|| format!("suit {} out of range", value))
    }
}

impl From<Suit> for u8 {
    fn from(suit: Suit) -> u8 {
        suit.0
    }
}

/// Card color, used by the alternating-color stacking rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Unique card identifier, `rank * 4 + suit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index into per-card arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Recover a card from its id, or `None` if the id is out of range.
    #[must_use]
    pub const fn from_id(id: CardId) -> Option<Self> {
        if id.index() >= N_CARDS {
            return None;
        }
        Some(Self {
            rank: Rank(id.0 / N_SUITS as u8),
            suit: Suit(id.0 % N_SUITS as u8),
        })
    }

    /// Stable identifier, unique across the deck.
    #[must_use]
    pub const fn id(self) -> CardId {
        CardId(self.rank.0 * N_SUITS as u8 + self.suit.0)
    }

    /// Color of the card's suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Whether `other` may be stacked directly on top of `self`.
    ///
    /// `self` is the pile's current top card, `other` the bottom card of
    /// the lifted run: one rank lower and the opposite color.
    #[must_use]
    pub fn precedes_in_stack(&self, other: &Card) -> bool {
        self.rank.0 == other.rank.0 + 1 && (self.suit.0 ^ other.suit.0) & 2 == 2
    }

    /// All 52 cards in id order.
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        (0..N_CARDS as u8)
            .filter_map(|id| Card::from_id(CardId(id)))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Whether a tableau pile with the given top card accepts `card` as the
/// bottom of a lifted run. An empty pile (`None`) takes only a King.
#[must_use]
pub fn tableau_accepts(top: Option<&Card>, card: &Card) -> bool {
    match top {
        Some(top) => top.precedes_in_stack(card),
        None => card.rank == Rank::KING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: u8, suit: u8) -> Card {
        Card::new(Rank::new(rank).unwrap(), Suit::new(suit).unwrap())
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(card(0, 0).id(), CardId(0));
        assert_eq!(card(0, 3).id(), CardId(3));
        assert_eq!(card(1, 0).id(), CardId(4));
        assert_eq!(card(12, 3).id(), CardId(51));
    }

    #[test]
    fn test_from_id_inverts_id() {
        for c in Card::full_deck() {
            assert_eq!(Card::from_id(c.id()), Some(c));
        }
        assert_eq!(Card::from_id(CardId(52)), None);
    }

    #[test]
    fn test_full_deck_is_unique() {
        let deck = Card::full_deck();
        assert_eq!(deck.len(), N_CARDS);

        let mut ids: Vec<_> = deck.iter().map(|c| c.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), N_CARDS);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Suit::HEARTS.color(), Color::Red);
        assert_eq!(Suit::DIAMONDS.color(), Color::Red);
        assert_eq!(Suit::CLUBS.color(), Color::Black);
        assert_eq!(Suit::SPADES.color(), Color::Black);
    }

    #[test]
    fn test_precedes_in_stack() {
        let five_hearts = card(4, 0);

        assert!(five_hearts.precedes_in_stack(&card(3, 2)));
        assert!(five_hearts.precedes_in_stack(&card(3, 3)));

        // Same color
        assert!(!five_hearts.precedes_in_stack(&card(3, 0)));
        assert!(!five_hearts.precedes_in_stack(&card(3, 1)));

        // Wrong rank
        assert!(!five_hearts.precedes_in_stack(&card(2, 2)));
        assert!(!five_hearts.precedes_in_stack(&card(5, 2)));
    }

    #[test]
    fn test_empty_pile_takes_only_king() {
        assert!(tableau_accepts(None, &card(12, 0)));
        assert!(tableau_accepts(None, &card(12, 3)));
        assert!(!tableau_accepts(None, &card(11, 2)));
        assert!(!tableau_accepts(None, &card(0, 1)));
    }

    #[test]
    fn test_rank_bounds() {
        assert_eq!(Rank::new(13), None);
        assert_eq!(Rank::KING.next(), None);
        assert_eq!(Rank::ACE.prev(), None);
        assert_eq!(Rank::ACE.next(), Rank::new(1));
        assert_eq!(Suit::new(4), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(card(0, 0).to_string(), "A♡");
        assert_eq!(card(9, 2).to_string(), "10♧");
        assert_eq!(card(12, 3).to_string(), "K♤");
    }

    #[test]
    fn test_card_serialization() {
        let c = card(7, 1);
        let json = serde_json::to_string(&c).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }

    #[test]
    fn test_out_of_range_rank_rejected_on_load() {
        let result: Result<Card, _> = serde_json::from_str(r#"{"rank":13,"suit":0}"#);
        assert!(result.is_err());

        let result: Result<Card, _> = serde_json::from_str(r#"{"rank":0,"suit":4}"#);
        assert!(result.is_err());
    }
}

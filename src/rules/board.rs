//! The full card layout and the legality rules over it.
//!
//! `Board` is plain data: the deck, seven tableau piles, and four
//! foundations. It knows the layout of a fresh deal, which destinations a
//! lifted run may go to, and how to check that the 52-card partition is
//! intact. Mutation with event emission lives in [`super::engine`].

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    Card, KlondikeConfig, Position, Suit, N_CARDS, N_PILES, N_SUITS, N_TABLEAU_CARDS,
};
use crate::error::SetupError;
use crate::zones::{Deck, Foundation, TableauPile};

/// Legal destinations of a lifted run. At most one foundation plus every
/// pile, so this never spills to the heap.
pub type Destinations = SmallVec<[Position; 8]>;

/// A lifted run. Valid tableau runs hold at most 13 cards.
pub type Run = SmallVec<[Card; 13]>;

/// Card locations for a whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    deck: Deck,
    tableau: [TableauPile; N_PILES],
    foundations: [Foundation; N_SUITS],
}

impl Board {
    /// Deal a fresh layout from 52 cards.
    ///
    /// Of the first 28 cards, pile `i` takes the next `i` cards face down
    /// and one more face up; the remaining cards become the stock in order.
    pub fn deal(cards: &[Card], config: &KlondikeConfig) -> Result<Self, SetupError> {
        config.validate()?;
        if cards.len() != N_CARDS {
            return Err(SetupError::WrongCardCount(cards.len()));
        }
        let mut seen = FxHashSet::default();
        for card in cards {
            if !seen.insert(card.id()) {
                return Err(SetupError::DuplicateCard(*card));
            }
        }

        let (dealt, stock) = cards.split_at(N_TABLEAU_CARDS);
        let tableau = std::array::from_fn(|i| {
            let start = i * (i + 1) / 2;
            let end = (i + 1) * (i + 2) / 2 - 1;
            TableauPile::new(dealt[start..end].to_vec(), vec![dealt[end]])
        });

        Ok(Self {
            deck: Deck::new(stock.to_vec(), config.draw_step, config.recycle),
            tableau,
            foundations: empty_foundations(),
        })
    }

    /// Assemble a board from its parts. Call [`Board::check_invariants`]
    /// before trusting it.
    #[must_use]
    pub fn from_parts(
        deck: Deck,
        tableau: [TableauPile; N_PILES],
        foundations: [Foundation; N_SUITS],
    ) -> Self {
        Self { deck, tableau, foundations }
    }

    /// The stock/waste pair.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// All tableau piles in index order.
    #[must_use]
    pub fn tableau(&self) -> &[TableauPile; N_PILES] {
        &self.tableau
    }

    /// One tableau pile, `None` if out of range.
    #[must_use]
    pub fn pile(&self, index: usize) -> Option<&TableauPile> {
        self.tableau.get(index)
    }

    /// All foundations, indexed by suit.
    #[must_use]
    pub fn foundations(&self) -> &[Foundation; N_SUITS] {
        &self.foundations
    }

    /// The foundation of a suit.
    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit.index()]
    }

    pub(crate) fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub(crate) fn parts_mut(
        &mut self,
    ) -> (&mut Deck, &mut [TableauPile; N_PILES], &mut [Foundation; N_SUITS]) {
        (&mut self.deck, &mut self.tableau, &mut self.foundations)
    }

    /// Where a run lifted from anywhere may legally go.
    ///
    /// The run's own foundation comes first when the run is a single card
    /// that is next in sequence; then every pile whose top accepts the
    /// run's bottom card, in pile order. An empty run goes nowhere.
    #[must_use]
    pub fn destinations(&self, run: &[Card]) -> Destinations {
        let mut out = Destinations::new();
        let Some(bottom) = run.first() else {
            return out;
        };

        if run.len() == 1 && self.foundation(bottom.suit).accepts(bottom) {
            out.push(Position::Foundation(bottom.suit));
        }
        for (i, pile) in self.tableau.iter().enumerate() {
            if pile.accepts(bottom) {
                out.push(Position::Pile(i));
            }
        }
        out
    }

    /// Whether every foundation is complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }

    /// Check the 52-card partition and the structural rules of every pile.
    pub fn check_invariants(&self) -> Result<(), SetupError> {
        for (slot, foundation) in self.foundations.iter().enumerate() {
            if foundation.suit().index() != slot {
                return Err(SetupError::MisplacedFoundation(slot));
            }
        }

        let mut seen = FxHashSet::default();
        let located = self
            .deck
            .stock()
            .iter()
            .chain(self.deck.waste())
            .copied()
            .chain(self.tableau.iter().flat_map(|p| p.hidden().iter().chain(p.visible()).copied()))
            .chain(self.foundations.iter().flat_map(Foundation::cards));
        for card in located {
            if !seen.insert(card.id()) {
                return Err(SetupError::DuplicateCard(card));
            }
        }
        if let Some(missing) = Card::full_deck().into_iter().find(|c| !seen.contains(&c.id())) {
            return Err(SetupError::MissingCard(missing));
        }

        if let Some(i) = self
            .tableau
            .iter()
            .position(|p| p.visible().is_empty() && !p.hidden().is_empty())
        {
            return Err(SetupError::HiddenUnderEmpty(i));
        }
        if let Some(i) = self.tableau.iter().position(|p| !p.is_valid_run()) {
            return Err(SetupError::BrokenRun(i));
        }
        Ok(())
    }
}

/// Text layout of the board.
///
/// The first line shows the stock/waste counts, the waste top and the four
/// foundation tops (`--` when empty), each tagged with its position id. Then
/// come the pile ids and one row per depth, with hidden cards as `**`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = |card: Option<Card>| card.map_or_else(|| "--".to_string(), |c| c.to_string());

        write!(
            f,
            "Deck {}/{}: {}\t",
            self.deck.stock().len(),
            self.deck.waste().len(),
            slot(self.deck.top().copied())
        )?;
        for foundation in &self.foundations {
            let id = Position::Foundation(foundation.suit()).id();
            write!(f, "\t{}.{}", id, slot(foundation.top_card()))?;
        }
        writeln!(f)?;

        let ids: Vec<String> = (0..N_PILES).map(|i| Position::Pile(i).id().to_string()).collect();
        writeln!(f, "{}", ids.join("\t"))?;

        let depth = self
            .tableau
            .iter()
            .map(|p| p.hidden().len() + p.visible().len())
            .max()
            .unwrap_or(0);
        for row in 0..depth {
            let cells: Vec<String> = self
                .tableau
                .iter()
                .map(|pile| match row.checked_sub(pile.hidden().len()) {
                    None => "**".to_string(),
                    Some(i) => pile.visible().get(i).map(Card::to_string).unwrap_or_default(),
                })
                .collect();
            writeln!(f, "{}", cells.join("\t").trim_end())?;
        }
        Ok(())
    }
}

/// Four empty foundations in suit order.
#[must_use]
pub fn empty_foundations() -> [Foundation; N_SUITS] {
    [
        Foundation::new(Suit::HEARTS),
        Foundation::new(Suit::DIAMONDS),
        Foundation::new(Suit::CLUBS),
        Foundation::new(Suit::SPADES),
    ]
}

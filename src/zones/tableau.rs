//! Tableau piles.
//!
//! Each pile keeps its face-down cards apart from its face-up run. The
//! hidden run is consumed from its end; the visible run is ordered bottom
//! to top.

use serde::{Deserialize, Serialize};

use crate::core::{tableau_accepts, Card};

/// One of the seven tableau piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauPile {
    hidden: Vec<Card>,
    visible: Vec<Card>,
}

impl TableauPile {
    /// Create a pile from its hidden and visible runs.
    #[must_use]
    pub fn new(hidden: Vec<Card>, visible: Vec<Card>) -> Self {
        Self { hidden, visible }
    }

    /// Face-down cards, next to reveal last.
    #[must_use]
    pub fn hidden(&self) -> &[Card] {
        &self.hidden
    }

    /// Face-up cards, bottom to top.
    #[must_use]
    pub fn visible(&self) -> &[Card] {
        &self.visible
    }

    /// The top visible card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.visible.last()
    }

    /// Whether the pile holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.hidden.is_empty()
    }

    /// Whether `card` may be placed as the bottom of a run on this pile.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        tableau_accepts(self.top(), card)
    }

    /// Index of `card` in the visible run.
    #[must_use]
    pub fn position_of(&self, card: &Card) -> Option<usize> {
        self.visible.iter().position(|c| c == card)
    }

    /// The visible run from `card` to the top, if `card` is visible here.
    #[must_use]
    pub fn run_from(&self, card: &Card) -> Option<&[Card]> {
        self.position_of(card).map(|i| &self.visible[i..])
    }

    /// Remove and return the visible run starting at index `start`.
    pub fn split_off(&mut self, start: usize) -> Vec<Card> {
        self.visible.split_off(start.min(self.visible.len()))
    }

    /// Append a run to the visible cards.
    pub fn extend(&mut self, run: impl IntoIterator<Item = Card>) {
        self.visible.extend(run);
    }

    /// Turn the next hidden card face up if nothing is visible.
    ///
    /// Returns the revealed card.
    pub fn reveal_if_exposed(&mut self) -> Option<Card> {
        if !self.visible.is_empty() {
            return None;
        }
        let card = self.hidden.pop()?;
        self.visible.push(card);
        Some(card)
    }

    /// Whether the visible run is a descending alternating-color sequence.
    #[must_use]
    pub fn is_valid_run(&self) -> bool {
        self.visible.windows(2).all(|w| w[0].precedes_in_stack(&w[1]))
    }
}

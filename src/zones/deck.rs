//! Stock and waste.
//!
//! The stock is drawn from its front; drawn cards are appended to the
//! waste, so the last waste card is the newest and the only playable one.
//! Every card the deck owns is in exactly one of the two.

use serde::{Deserialize, Serialize};

use crate::core::{Card, RecycleOrder};

/// The stock/waste pair.
///
/// ## Usage
///
/// ```
/// use klondike_engine::core::{Card, RecycleOrder};
/// use klondike_engine::zones::Deck;
///
/// let cards: Vec<Card> = Card::full_deck().into_iter().take(5).collect();
/// let mut deck = Deck::new(cards.clone(), 3, RecycleOrder::AsIs);
///
/// deck.deal();
/// assert_eq!(deck.waste(), &cards[..3]);
/// assert_eq!(deck.peek(1), &cards[2..3]);
///
/// deck.deal(); // two left, draws both
/// deck.deal(); // stock empty: recycle
/// assert_eq!(deck.stock(), &cards[..]);
/// assert!(deck.waste().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    stock: Vec<Card>,
    waste: Vec<Card>,
    draw_step: usize,
    recycle: RecycleOrder,
}

impl Deck {
    /// Create a deck with everything in stock.
    ///
    /// `draw_step` is validated by the caller's config; zero is clamped
    /// to one so a deal always makes progress.
    #[must_use]
    pub fn new(stock: Vec<Card>, draw_step: usize, recycle: RecycleOrder) -> Self {
        Self {
            stock,
            waste: Vec::new(),
            draw_step: draw_step.max(1),
            recycle,
        }
    }

    /// Rebuild a deck from saved stock and waste.
    #[must_use]
    pub fn from_parts(
        stock: Vec<Card>,
        waste: Vec<Card>,
        draw_step: usize,
        recycle: RecycleOrder,
    ) -> Self {
        Self {
            stock,
            waste,
            draw_step: draw_step.max(1),
            recycle,
        }
    }

    /// Replace the draw rules, keeping the cards.
    pub(crate) fn set_rules(&mut self, draw_step: usize, recycle: RecycleOrder) {
        self.draw_step = draw_step.max(1);
        self.recycle = recycle;
    }

    /// The newest `n` waste cards (fewer if the waste is shorter), oldest
    /// first.
    #[must_use]
    pub fn peek(&self, n: usize) -> &[Card] {
        let start = self.waste.len().saturating_sub(n);
        &self.waste[start..]
    }

    /// The newest waste card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.waste.last()
    }

    /// Remove and return the newest waste card.
    pub fn pop(&mut self) -> Option<Card> {
        self.waste.pop()
    }

    /// Advance the draw.
    ///
    /// With cards in stock, moves up to `draw_step` of them from the front
    /// of the stock to the back of the waste. With an empty stock, the
    /// waste becomes the stock (per the recycle order) and the waste is
    /// emptied.
    pub fn deal(&mut self) {
        if self.stock.is_empty() {
            self.stock = std::mem::take(&mut self.waste);
            if self.recycle == RecycleOrder::Reversed {
                self.stock.reverse();
            }
        } else {
            let n = self.draw_step.min(self.stock.len());
            self.waste.extend(self.stock.drain(..n));
        }
    }

    /// Cards not yet drawn, next to draw first.
    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    /// Drawn cards, newest last.
    #[must_use]
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    /// Cards drawn per deal.
    #[must_use]
    pub fn draw_step(&self) -> usize {
        self.draw_step
    }

    /// Whether the next deal recycles the waste.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.stock.is_empty()
    }

    /// Total cards held by the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stock.len() + self.waste.len()
    }

    /// Whether the deck holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stock.is_empty() && self.waste.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<Card> {
        Card::full_deck().into_iter().take(n).collect()
    }

    #[test]
    fn test_deal_moves_draw_step() {
        let all = cards(7);
        let mut deck = Deck::new(all.clone(), 3, RecycleOrder::AsIs);

        deck.deal();
        assert_eq!(deck.waste(), &all[..3]);
        assert_eq!(deck.stock(), &all[3..]);

        deck.deal();
        assert_eq!(deck.waste(), &all[..6]);

        // Only one left
        deck.deal();
        assert_eq!(deck.waste(), &all[..]);
        assert!(deck.is_exhausted());
    }

    #[test]
    fn test_recycle_as_is() {
        let all = cards(4);
        let mut deck = Deck::new(all.clone(), 3, RecycleOrder::AsIs);

        deck.deal();
        deck.deal();
        assert!(deck.is_exhausted());

        deck.deal();
        assert_eq!(deck.stock(), &all[..]);
        assert!(deck.waste().is_empty());
    }

    #[test]
    fn test_recycle_reversed() {
        let all = cards(4);
        let mut deck = Deck::new(all.clone(), 1, RecycleOrder::Reversed);

        for _ in 0..4 {
            deck.deal();
        }
        deck.deal();

        let mut expected = all.clone();
        expected.reverse();
        assert_eq!(deck.stock(), &expected[..]);
        assert!(deck.waste().is_empty());
    }

    #[test]
    fn test_peek_short_waste() {
        let all = cards(5);
        let mut deck = Deck::new(all.clone(), 2, RecycleOrder::AsIs);

        assert!(deck.peek(3).is_empty());

        deck.deal();
        assert_eq!(deck.peek(3), &all[..2]);
        assert_eq!(deck.peek(1), &all[1..2]);
        assert_eq!(deck.peek(0), &[] as &[Card]);
    }

    #[test]
    fn test_pop() {
        let all = cards(3);
        let mut deck = Deck::new(all.clone(), 3, RecycleOrder::AsIs);

        assert_eq!(deck.pop(), None);

        deck.deal();
        assert_eq!(deck.pop(), Some(all[2]));
        assert_eq!(deck.top(), Some(&all[1]));
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_deal_on_empty_deck_is_noop() {
        let mut deck = Deck::new(Vec::new(), 3, RecycleOrder::AsIs);
        deck.deal();
        assert!(deck.is_empty());
    }

    #[test]
    fn test_zero_draw_step_clamped() {
        let deck = Deck::new(cards(2), 0, RecycleOrder::AsIs);
        assert_eq!(deck.draw_step(), 1);
    }
}

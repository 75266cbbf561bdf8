//! The Klondike engine.
//!
//! `Solitaire` owns the board and is the only thing that mutates it. It
//! answers two questions for a presentation layer:
//! - where may this card or run go (`lift_card`)
//! - perform this move (`make_move`), reporting each state change as a
//!   [`GameEvent`] to subscribed observers
//!
//! Every command is validated against the current board before anything
//! changes, so a rejected move leaves the game and the observers untouched.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::{KlondikeConfig, Position};
//! use klondike_engine::rules::Solitaire;
//!
//! let mut game = Solitaire::new_game(KlondikeConfig::default(), 7).unwrap();
//!
//! // Draw three cards, then try to play the newest one somewhere.
//! game.make_move(None, Position::Deck, Position::Deck).unwrap();
//! let top = *game.deck().top().unwrap();
//! if let Some(&dst) = game.lift_card(&[top]).first() {
//!     game.make_move(Some(top), Position::Deck, dst).unwrap();
//! }
//!
//! game.undo().unwrap();
//! ```

use log::{debug, info, trace};

use crate::core::{Card, GameRng, KlondikeConfig, Position, Suit, N_PILES};
use crate::error::{MoveError, SetupError};
use crate::events::{EventBus, EventKind, GameEvent, GameObserver, SubscriptionId};
use crate::history::{GameSnapshot, UndoStack};
use crate::zones::{Deck, Foundation, TableauPile};

use super::board::{Board, Destinations, Run};
use super::moves::Move;

/// A game of Klondike.
pub struct Solitaire {
    config: KlondikeConfig,
    seed: Option<u64>,
    board: Board,
    history: UndoStack,
    bus: EventBus,
}

impl Solitaire {
    /// Start a game from a full 52-card sequence.
    ///
    /// The first 28 cards form the tableau; the rest become the stock.
    pub fn new(cards: &[Card], config: KlondikeConfig) -> Result<Self, SetupError> {
        let board = Board::deal(cards, &config)?;
        info!("new game: fixed order draw_step={}", config.draw_step);
        Ok(Self::assemble(config, None, board))
    }

    /// Start a game from a shuffled deck.
    pub fn new_game(config: KlondikeConfig, seed: u64) -> Result<Self, SetupError> {
        let cards = GameRng::new(seed).shuffled_deck();
        let board = Board::deal(&cards, &config)?;
        info!("new game: seed={} draw_step={}", seed, config.draw_step);
        Ok(Self::assemble(config, Some(seed), board))
    }

    /// Resume a saved game, validating it first.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, SetupError> {
        snapshot.validate()?;
        let GameSnapshot { config, seed, mut board } = snapshot;
        board.deck_mut().set_rules(config.draw_step, config.recycle);
        info!("loaded game: seed={:?} draw_step={}", seed, config.draw_step);
        Ok(Self::assemble(config, seed, board))
    }

    /// Resume a game saved with [`Solitaire::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SetupError> {
        Self::from_snapshot(GameSnapshot::from_bytes(bytes)?)
    }

    fn assemble(config: KlondikeConfig, seed: Option<u64>, board: Board) -> Self {
        Self {
            history: UndoStack::new(config.undo_limit),
            config,
            seed,
            board,
            bus: EventBus::new(),
        }
    }

    /// Capture the config and board.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            seed: self.seed,
            board: self.board.clone(),
        }
    }

    /// Encode the current game with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SetupError> {
        self.snapshot().to_bytes()
    }

    // === Observers ===

    /// Subscribe to every event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        self.bus.subscribe(observer)
    }

    /// Subscribe to some event kinds.
    pub fn subscribe_to(
        &mut self,
        kinds: &[EventKind],
        observer: impl GameObserver + 'static,
    ) -> SubscriptionId {
        self.bus.subscribe_to(kinds, observer)
    }

    /// Remove an observer. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    // === Queries ===

    /// Legal destinations for a run lifted from one origin.
    ///
    /// The run's foundation comes first (single card, next in sequence),
    /// then tableau piles in index order. Pure; recomputed on every call.
    #[must_use]
    pub fn lift_card(&self, cards: &[Card]) -> Destinations {
        let dests = self.board.destinations(cards);
        trace!("lift {:?} -> {:?}", cards.first(), dests);
        dests
    }

    /// Every move [`Solitaire::make_move`] would accept right now.
    ///
    /// Deal first (when the deck holds cards), then the waste top, the
    /// foundation tops, and every run start of every pile.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        if !self.board.deck().is_empty() {
            moves.push(Move::deal());
        }

        if let Some(&top) = self.board.deck().top() {
            for dst in self.lift_card(&[top]) {
                moves.push(Move::card(top, Position::Deck, dst));
            }
        }

        for foundation in self.board.foundations() {
            if let Some(top) = foundation.top_card() {
                let src = Position::Foundation(foundation.suit());
                for dst in self.lift_card(&[top]).into_iter().filter(|&d| d != src) {
                    moves.push(Move::card(top, src, dst));
                }
            }
        }

        for (i, pile) in self.board.tableau().iter().enumerate() {
            let src = Position::Pile(i);
            let visible = pile.visible();
            for start in 0..visible.len() {
                let card = visible[start];
                for dst in self.lift_card(&visible[start..]).into_iter().filter(|&d| d != src) {
                    moves.push(Move::card(card, src, dst));
                }
            }
        }

        moves
    }

    /// Whether every foundation is complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// The whole board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The stock/waste pair.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.board.deck()
    }

    /// One tableau pile, `None` if out of range.
    #[must_use]
    pub fn pile(&self, index: usize) -> Option<&TableauPile> {
        self.board.pile(index)
    }

    /// The foundation of a suit.
    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Foundation {
        self.board.foundation(suit)
    }

    /// Game configuration.
    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    /// The shuffle seed, if the game was dealt from one.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    // === Commands ===

    /// Perform a move.
    ///
    /// `Deck` → `Deck` advances the draw and ignores `card`. Otherwise
    /// `card` is the single card to move, or for a tableau source the
    /// bottom of the run to move. The move must be legal on the current
    /// board; if not, nothing changes and the reason is returned.
    pub fn make_move(
        &mut self,
        card: Option<Card>,
        src: Position,
        dst: Position,
    ) -> Result<(), MoveError> {
        let checked = match self.check_move(card, src, dst) {
            Ok(checked) => checked,
            Err(err) => {
                debug!("rejected move {:?} {} -> {}: {}", card, src, dst, err);
                return Err(err);
            }
        };

        self.history.push(self.board.clone());

        match checked {
            None => {
                self.board.deck_mut().deal();
                debug!(
                    "deal: stock={} waste={}",
                    self.deck().stock().len(),
                    self.deck().waste().len()
                );
                self.bus.emit(GameEvent::Deal);
            }
            Some(card) => {
                debug!("move {} {} -> {}", card, src, dst);
                self.relocate(card, src, dst);
            }
        }
        Ok(())
    }

    /// Perform a [`Move`].
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        self.make_move(mv.card, mv.src, mv.dst)
    }

    /// Advance the draw.
    pub fn deal(&mut self) -> Result<(), MoveError> {
        self.apply(Move::deal())
    }

    /// Validate a move. `Ok(None)` is the deal, `Ok(Some(card))` a card move.
    fn check_move(
        &self,
        card: Option<Card>,
        src: Position,
        dst: Position,
    ) -> Result<Option<Card>, MoveError> {
        for pos in [src, dst] {
            if !pos.is_valid() {
                return Err(MoveError::InvalidPosition(pos));
            }
        }
        if src == Position::Deck && dst == Position::Deck {
            return Ok(None);
        }

        let card = card.ok_or(MoveError::MissingCard)?;
        if dst == Position::Deck || src == dst {
            return Err(MoveError::IllegalDestination { card, dst });
        }

        let run: Run = match src {
            Position::Deck => {
                let top = *self.board.deck().top().ok_or(MoveError::EmptyWaste)?;
                if top != card {
                    return Err(MoveError::CardNotAtSource { card, src });
                }
                Run::from_slice(&[top])
            }
            Position::Foundation(suit) => {
                let top = self
                    .board
                    .foundation(suit)
                    .top_card()
                    .ok_or(MoveError::EmptyFoundation(suit))?;
                if top != card {
                    return Err(MoveError::CardNotAtSource { card, src });
                }
                Run::from_slice(&[top])
            }
            Position::Pile(i) => {
                let run = self
                    .board
                    .pile(i)
                    .and_then(|p| p.run_from(&card))
                    .ok_or(MoveError::CardNotAtSource { card, src })?;
                Run::from_slice(run)
            }
        };

        if !self.lift_card(&run).contains(&dst) {
            return Err(MoveError::IllegalDestination { card, dst });
        }
        Ok(Some(card))
    }

    /// Carry out a validated card move, emitting events as each part of
    /// the state changes.
    fn relocate(&mut self, card: Card, src: Position, dst: Position) {
        let (deck, tableau, foundations) = self.board.parts_mut();

        match src {
            Position::Deck => {
                if let Some(popped) = deck.pop() {
                    self.bus.emit(GameEvent::PopFromDeck { card: popped });
                }
            }
            Position::Foundation(suit) => {
                if let Some(popped) = foundations[suit.index()].pop() {
                    self.bus.emit(GameEvent::PopFromFoundation { card: popped });
                }
            }
            Position::Pile(_) => {}
        }

        if let Position::Foundation(suit) = dst {
            if let Some(pushed) = foundations[suit.index()].push() {
                self.bus.emit(GameEvent::PushToFoundation { card: pushed });
            }
        }

        let run = match src {
            Position::Pile(i) if i < N_PILES => {
                let pile = &mut tableau[i];
                let start = pile.position_of(&card).unwrap_or(pile.visible().len());
                let run = pile.split_off(start);
                if let Some(revealed) = pile.reveal_if_exposed() {
                    debug!("reveal {} on pile {}", revealed, i);
                    self.bus.emit(GameEvent::Reveal { pile: i, card: revealed });
                }
                run
            }
            _ => vec![card],
        };

        if let Position::Pile(j) = dst {
            if let Some(pile) = tableau.get_mut(j) {
                pile.extend(run);
            }
        }
    }

    // === Undo ===

    /// Restore the board as it was before the most recent accepted move.
    ///
    /// Emits a single [`GameEvent::Restored`].
    pub fn undo(&mut self) -> Result<(), MoveError> {
        let board = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        self.board = board;
        debug!("undo: {} step(s) left", self.history.len());
        self.bus.emit(GameEvent::Restored);
        Ok(())
    }

    /// Whether [`Solitaire::undo`] would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of moves that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Forget the undo history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl std::fmt::Debug for Solitaire {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solitaire")
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("board", &self.board)
            .field("undo_depth", &self.history.len())
            .field("observers", &self.bus.len())
            .finish()
    }
}

impl std::fmt::Display for Solitaire {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.board, f)
    }
}

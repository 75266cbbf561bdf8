//! Error types.
//!
//! - [`MoveError`]: a command was rejected; the game is unchanged.
//! - [`SetupError`]: a game could not be built from cards, config, or a
//!   saved snapshot.

use crate::core::{Card, Position, Suit};

/// Why `make_move` or `undo` rejected a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// A card is required for every move except the deal.
    MissingCard,
    /// The position does not name an existing container.
    InvalidPosition(Position),
    /// The card is not movable from the stated source.
    CardNotAtSource { card: Card, src: Position },
    /// Source was the deck but the waste is empty.
    EmptyWaste,
    /// Source was a foundation with no cards on it.
    EmptyFoundation(Suit),
    /// The destination does not accept the lifted card or run.
    IllegalDestination { card: Card, dst: Position },
    /// No move left to undo.
    NothingToUndo,
}

impl MoveError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::MissingCard => "missing_card",
            MoveError::InvalidPosition(_) => "invalid_position",
            MoveError::CardNotAtSource { .. } => "card_not_at_source",
            MoveError::EmptyWaste => "empty_waste",
            MoveError::EmptyFoundation(_) => "empty_foundation",
            MoveError::IllegalDestination { .. } => "illegal_destination",
            MoveError::NothingToUndo => "nothing_to_undo",
        }
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::MissingCard => write!(f, "no card given for a card move"),
            MoveError::InvalidPosition(pos) => write!(f, "no such position: {}", pos),
            MoveError::CardNotAtSource { card, src } => {
                write!(f, "{} cannot be taken from {}", card, src)
            }
            MoveError::EmptyWaste => write!(f, "the waste is empty"),
            MoveError::EmptyFoundation(suit) => write!(f, "the {} foundation is empty", suit),
            MoveError::IllegalDestination { card, dst } => {
                write!(f, "{} cannot be placed on {}", card, dst)
            }
            MoveError::NothingToUndo => write!(f, "nothing to undo"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Why a game could not be constructed or loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// Draw step must be at least 1.
    InvalidDrawStep(usize),
    /// The card sequence does not hold exactly 52 cards.
    WrongCardCount(usize),
    /// A card appears more than once.
    DuplicateCard(Card),
    /// A card of the deck is nowhere on the board.
    MissingCard(Card),
    /// Foundation slot `i` does not hold suit `i`.
    MisplacedFoundation(usize),
    /// A pile hides cards under an empty visible run.
    HiddenUnderEmpty(usize),
    /// A pile's visible run is not a descending alternating-color run.
    BrokenRun(usize),
    /// Serialized data could not be encoded or decoded.
    Codec(String),
}

impl SetupError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            SetupError::InvalidDrawStep(_) => "invalid_draw_step",
            SetupError::WrongCardCount(_) => "wrong_card_count",
            SetupError::DuplicateCard(_) => "duplicate_card",
            SetupError::MissingCard(_) => "missing_card",
            SetupError::MisplacedFoundation(_) => "misplaced_foundation",
            SetupError::HiddenUnderEmpty(_) => "hidden_under_empty",
            SetupError::BrokenRun(_) => "broken_run",
            SetupError::Codec(_) => "codec",
        }
    }
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::InvalidDrawStep(step) => {
                write!(f, "draw step must be positive, got {}", step)
            }
            SetupError::WrongCardCount(n) => write!(f, "expected 52 cards, got {}", n),
            SetupError::DuplicateCard(card) => write!(f, "{} appears more than once", card),
            SetupError::MissingCard(card) => write!(f, "{} is missing", card),
            SetupError::MisplacedFoundation(slot) => {
                write!(f, "foundation slot {} holds the wrong suit", slot)
            }
            SetupError::HiddenUnderEmpty(pile) => {
                write!(f, "pile {} has hidden cards but no visible card", pile)
            }
            SetupError::BrokenRun(pile) => write!(f, "pile {} holds an invalid run", pile),
            SetupError::Codec(msg) => write!(f, "snapshot codec error: {}", msg),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<bincode::Error> for SetupError {
    fn from(err: bincode::Error) -> Self {
        SetupError::Codec(err.to_string())
    }
}

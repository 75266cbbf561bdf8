//! Save/load and undo history tests.

use std::cell::RefCell;
use std::rc::Rc;

use klondike_engine::core::{Card, KlondikeConfig, Position, Rank, RecycleOrder, Suit, N_PILES};
use klondike_engine::events::GameEvent;
use klondike_engine::history::GameSnapshot;
use klondike_engine::rules::{empty_foundations, Board, Solitaire};
use klondike_engine::zones::{Deck, TableauPile};
use klondike_engine::{MoveError, SetupError};

fn played(seed: u64, moves: usize) -> Solitaire {
    let mut game = Solitaire::new_game(KlondikeConfig::default(), seed).unwrap();
    for i in 0..moves {
        let legal = game.legal_moves();
        if legal.is_empty() {
            break;
        }
        game.apply(legal[i % legal.len()]).unwrap();
    }
    game
}

fn record(game: &mut Solitaire) -> Rc<RefCell<Vec<GameEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    game.subscribe(move |e: &GameEvent| sink.borrow_mut().push(*e));
    events
}

#[test]
fn test_bytes_round_trip() {
    let game = played(42, 20);
    let bytes = game.to_bytes().unwrap();
    let loaded = Solitaire::from_bytes(&bytes).unwrap();

    assert_eq!(loaded.snapshot(), game.snapshot());
    assert_eq!(loaded.seed(), Some(42));
}

#[test]
fn test_json_round_trip() {
    let snapshot = played(7, 15).snapshot();
    let text = serde_json::to_string(&snapshot).unwrap();
    let parsed: GameSnapshot = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, snapshot);
    assert!(Solitaire::from_snapshot(parsed).is_ok());
}

#[test]
fn test_loaded_game_plays_the_same() {
    let mut original = played(3, 10);
    let mut loaded = Solitaire::from_bytes(&original.to_bytes().unwrap()).unwrap();
    let seen_original = record(&mut original);
    let seen_loaded = record(&mut loaded);

    for i in 0..40 {
        let legal = original.legal_moves();
        assert_eq!(legal, loaded.legal_moves());
        if legal.is_empty() {
            break;
        }
        let mv = legal[(i * 7) % legal.len()];
        original.apply(mv).unwrap();
        loaded.apply(mv).unwrap();
    }

    assert_eq!(*seen_original.borrow(), *seen_loaded.borrow());
    assert_eq!(original.snapshot(), loaded.snapshot());
}

#[test]
fn test_history_is_not_saved() {
    let game = played(11, 5);
    assert!(game.can_undo());

    let mut loaded = Solitaire::from_bytes(&game.to_bytes().unwrap()).unwrap();
    assert!(!loaded.can_undo());
    assert_eq!(loaded.undo(), Err(MoveError::NothingToUndo));
}

#[test]
fn test_duplicate_card_rejected() {
    let king = Card::new(Rank::KING, Suit::SPADES);
    let tableau: [TableauPile; N_PILES] = std::array::from_fn(|i| {
        if i == 0 {
            TableauPile::new(vec![], vec![king])
        } else {
            TableauPile::default()
        }
    });
    // The stock still holds every card, so the king appears twice.
    let deck = Deck::new(Card::full_deck(), 3, RecycleOrder::AsIs);
    let board = Board::from_parts(deck, tableau, empty_foundations());
    let snapshot = GameSnapshot { config: KlondikeConfig::default(), seed: None, board };

    let bytes = snapshot.to_bytes().unwrap();
    let err = Solitaire::from_bytes(&bytes).unwrap_err();
    assert_eq!(err, SetupError::DuplicateCard(king));
    assert_eq!(err.code(), "duplicate_card");

    assert!(Solitaire::from_snapshot(snapshot).is_err());
}

#[test]
fn test_bad_config_rejected_on_load() {
    let mut snapshot = played(5, 3).snapshot();
    snapshot.config.draw_step = 0;

    let err = Solitaire::from_snapshot(snapshot).unwrap_err();
    assert_eq!(err, SetupError::InvalidDrawStep(0));
}

#[test]
fn test_truncated_bytes_rejected() {
    let bytes = played(9, 4).to_bytes().unwrap();
    let err = Solitaire::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert_eq!(err.code(), "codec");
}

#[test]
fn test_undo_limit() {
    let config = KlondikeConfig::default().with_undo_limit(Some(2));
    let mut game = Solitaire::new_game(config, 1).unwrap();
    for _ in 0..5 {
        game.deal().unwrap();
    }

    assert_eq!(game.undo_depth(), 2);
    game.undo().unwrap();
    game.undo().unwrap();
    assert_eq!(game.undo(), Err(MoveError::NothingToUndo));
    assert_eq!(game.deck().waste().len(), 9);
}

#[test]
fn test_undo_across_card_move() {
    let mut game = Solitaire::new(&Card::full_deck(), KlondikeConfig::default()).unwrap();
    let before = game.snapshot();
    let ace = Card::new(Rank::ACE, Suit::HEARTS);

    game.make_move(Some(ace), Position::Pile(0), Position::Foundation(Suit::HEARTS))
        .unwrap();
    assert_eq!(game.undo_depth(), 1);

    game.undo().unwrap();
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.pile(0).unwrap().top(), Some(&ace));
}

#[test]
fn test_clear_history() {
    let mut game = played(2, 6);
    assert!(game.can_undo());
    game.clear_history();
    assert_eq!(game.undo_depth(), 0);
}

//! Property tests: random legal play never breaks the board.

use proptest::prelude::*;

use klondike_engine::core::{KlondikeConfig, RecycleOrder};
use klondike_engine::rules::Solitaire;

fn foundation_total(game: &Solitaire) -> usize {
    game.board().foundations().iter().map(|f| f.len()).sum()
}

fn config(draw_step: usize, reversed: bool) -> KlondikeConfig {
    let recycle = if reversed { RecycleOrder::Reversed } else { RecycleOrder::AsIs };
    KlondikeConfig::new(draw_step).with_recycle(recycle)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        draw_step in 1usize..=3,
        reversed in any::<bool>(),
        choices in prop::collection::vec(any::<usize>(), 0..200),
    ) {
        let mut game = Solitaire::new_game(config(draw_step, reversed), seed).unwrap();
        prop_assert!(game.board().check_invariants().is_ok());

        for choice in choices {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[choice % moves.len()];
            let before = foundation_total(&game);

            prop_assert!(game.apply(mv).is_ok(), "{} was listed but rejected", mv);
            prop_assert!(game.board().check_invariants().is_ok());

            let after = foundation_total(&game);
            prop_assert!(before.abs_diff(after) <= 1);
        }
    }

    #[test]
    fn undo_restores_previous_snapshot(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 1..50),
    ) {
        let mut game = Solitaire::new_game(KlondikeConfig::default(), seed).unwrap();
        let mut snapshots = vec![game.snapshot()];

        for choice in choices {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            game.apply(moves[choice % moves.len()]).unwrap();
            snapshots.push(game.snapshot());
        }

        snapshots.pop();
        while let Some(expected) = snapshots.pop() {
            game.undo().unwrap();
            prop_assert_eq!(game.snapshot(), expected);
        }
        prop_assert!(!game.can_undo());
    }

    #[test]
    fn saved_game_loads_identically(seed in any::<u64>(), deals in 0usize..30) {
        let mut game = Solitaire::new_game(KlondikeConfig::new(1), seed).unwrap();
        for _ in 0..deals {
            game.deal().unwrap();
        }

        let bytes = game.to_bytes().unwrap();
        let loaded = Solitaire::from_bytes(&bytes).unwrap();
        prop_assert_eq!(loaded.snapshot(), game.snapshot());
        prop_assert_eq!(loaded.legal_moves(), game.legal_moves());
    }

    #[test]
    fn same_seed_same_deal(seed in any::<u64>()) {
        let a = Solitaire::new_game(KlondikeConfig::default(), seed).unwrap();
        let b = Solitaire::new_game(KlondikeConfig::default(), seed).unwrap();
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }
}

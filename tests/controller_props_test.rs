//! Property-based tests for container invariants
//! Random command sequences must never break queue fullness, capacity bounds
//! or identifier uniqueness.

use std::collections::HashSet;

use proptest::prelude::*;

use tetris_stack::core::{GameController, StackConfig, StackError};
use tetris_stack::types::{StackCommand, MAX_CAPACITY};

fn command() -> impl Strategy<Value = StackCommand> {
    prop::sample::select(StackCommand::ALL.to_vec())
}

fn config() -> impl Strategy<Value = StackConfig> {
    (1..=MAX_CAPACITY)
        .prop_flat_map(|q| (Just(q), 1..=q, 1..=MAX_CAPACITY))
        .prop_map(|(q, r, u)| StackConfig::new(q, r, u))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: after any command the queue holds exactly `queue_capacity`
    /// pieces and reserve/history stay within their bounds.
    #[test]
    fn prop_capacities_hold(
        config in config(),
        seed in any::<u32>(),
        commands in prop::collection::vec(command(), 0..200),
    ) {
        let mut c = GameController::new(config, seed).unwrap();
        for command in commands {
            let _ = c.apply(command);
            prop_assert_eq!(c.queue().len(), config.queue_capacity);
            prop_assert!(c.queue().is_full());
            prop_assert!(c.reserve().len() <= config.reserve_capacity);
            prop_assert!(c.history().len() <= config.undo_capacity);
        }
    }

    /// Property: a piece lives in at most one container.
    #[test]
    fn prop_live_ids_unique(
        config in config(),
        seed in any::<u32>(),
        commands in prop::collection::vec(command(), 0..200),
    ) {
        let mut c = GameController::new(config, seed).unwrap();
        for command in commands {
            let _ = c.apply(command);
            let snap = c.snapshot();
            let mut seen = HashSet::new();
            for piece in snap.queue.iter().chain(&snap.reserve).chain(&snap.history) {
                prop_assert!(
                    seen.insert(piece.id),
                    "duplicate id {} after {:?}",
                    piece.id,
                    command
                );
            }
        }
    }

    /// Property: every piece an exchange moves out of the reserve ends up in
    /// the queue, and every piece it moves into the reserve is there.
    #[test]
    fn prop_exchange_keeps_moved_pieces(
        config in config(),
        seed in any::<u32>(),
        holds in 0..=MAX_CAPACITY,
    ) {
        let mut c = GameController::new(config, seed).unwrap();
        for _ in 0..holds {
            let _ = c.hold();
        }
        let result = c.partial_exchange();
        let snap = c.snapshot();
        for piece in &result.moved_to_queue {
            prop_assert!(snap.queue.contains(piece), "{} moved to queue but missing", piece);
            prop_assert!(
                !result.discarded.contains(piece),
                "{} moved to queue and discarded",
                piece
            );
        }
        for piece in &result.moved_to_reserve {
            prop_assert!(snap.reserve.contains(piece), "{} moved to reserve but missing", piece);
        }
    }

    /// Property: freshly generated ids are strictly increasing and never
    /// reused, even across restart and undo.
    #[test]
    fn prop_generated_ids_increase(
        seed in any::<u32>(),
        commands in prop::collection::vec(command(), 0..200),
    ) {
        let mut c = GameController::new(StackConfig::default(), seed).unwrap();
        let mut last = c.snapshot().next_id;
        for command in commands {
            let _ = c.apply(command);
            let next_id = c.snapshot().next_id;
            prop_assert!(next_id >= last);
            last = next_id;
            for piece in c.queue().iter() {
                prop_assert!(piece.id < next_id);
            }
        }
    }

    /// Property: refusals happen exactly when the precondition fails, and
    /// leave the state untouched.
    #[test]
    fn prop_refusals_are_no_ops(
        seed in any::<u32>(),
        commands in prop::collection::vec(command(), 0..200),
    ) {
        let mut c = GameController::new(StackConfig::default(), seed).unwrap();
        for command in commands {
            let before = c.snapshot();
            match c.apply(command) {
                Ok(_) => {}
                Err(err) => {
                    match err {
                        StackError::ReserveFull => {
                            prop_assert!(before.reserve.len() == before.reserve_capacity)
                        }
                        StackError::ReserveEmpty => prop_assert!(before.reserve.is_empty()),
                        StackError::UndoEmpty => prop_assert!(before.history.is_empty()),
                    }
                    prop_assert_eq!(c.snapshot(), before);
                }
            }
        }
    }
}

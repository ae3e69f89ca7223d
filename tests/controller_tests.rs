//! Integration tests for controller operations

use tetris_stack::core::{ConfigError, GameController, ScriptedKinds, StackConfig, StackError};
use tetris_stack::types::{Piece, PieceKind, StackCommand};

fn scripted(config: StackConfig) -> GameController<ScriptedKinds> {
    GameController::with_source(
        config,
        ScriptedKinds::new(&[
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::L,
            PieceKind::J,
        ]),
    )
    .unwrap()
}

fn queue<S: tetris_stack::core::KindSource>(c: &GameController<S>) -> Vec<Piece> {
    c.queue().iter().collect()
}

#[test]
fn test_concrete_play_scenario() {
    let mut c = scripted(StackConfig::default());
    assert_eq!(
        queue(&c),
        vec![
            Piece::new(PieceKind::I, 1001),
            Piece::new(PieceKind::O, 1002),
            Piece::new(PieceKind::T, 1003),
            Piece::new(PieceKind::L, 1004),
            Piece::new(PieceKind::J, 1005),
        ]
    );

    let result = c.play();
    assert_eq!(result.played, Piece::new(PieceKind::I, 1001));

    let ids: Vec<u32> = queue(&c).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1002, 1003, 1004, 1005, 1006]);
    assert_eq!(queue(&c)[0].kind, PieceKind::O);
    assert_eq!(queue(&c)[3].kind, PieceKind::J);
}

#[test]
fn test_undo_reverses_play_exactly_once() {
    let mut c = scripted(StackConfig::default());
    let before = queue(&c);

    let played = c.play();
    let undone = c.undo().unwrap();

    assert_eq!(undone.restored, before[0]);
    assert_eq!(undone.discarded, played.generated);
    assert_eq!(queue(&c), before);
    assert!(queue(&c).iter().all(|p| p.id != played.generated.id));
    assert_eq!(c.undo(), Err(StackError::UndoEmpty));
}

#[test]
fn test_undo_after_several_plays_restores_in_reverse() {
    let mut c = scripted(StackConfig::default());
    let before = queue(&c);
    for _ in 0..3 {
        c.play();
    }
    for _ in 0..3 {
        c.undo().unwrap();
    }
    assert_eq!(queue(&c), before);
}

#[test]
fn test_reserve_bounded() {
    let mut c = scripted(StackConfig::default());
    let results: Vec<_> = (0..4).map(|_| c.hold()).collect();

    assert!(results[..3].iter().all(|r| r.is_ok()));
    assert_eq!(results[3], Err(StackError::ReserveFull));
    assert_eq!(c.reserve().len(), 3);
    assert!(c.queue().is_full());
}

#[test]
fn test_history_eviction() {
    let mut c = scripted(StackConfig::default());
    let played: Vec<Piece> = (0..6).map(|_| c.play().played).collect();

    let mut undone = Vec::new();
    while let Ok(r) = c.undo() {
        undone.push(r.restored);
    }
    let expected: Vec<Piece> = played[1..].iter().rev().copied().collect();
    assert_eq!(undone, expected);
    assert!(!undone.contains(&played[0]));
}

#[test]
fn test_swap_touches_exactly_two_slots() {
    let mut c = scripted(StackConfig::default());
    c.hold().unwrap();
    c.hold().unwrap();

    let before = c.snapshot();
    let result = c.swap().unwrap();
    let after = c.snapshot();

    assert_eq!(result.queue_front_now, before.reserve[0]);
    assert_eq!(result.reserve_top_now, before.queue[0]);
    assert_eq!(after.queue[0], before.reserve[0]);
    assert_eq!(after.reserve[0], before.queue[0]);
    assert_eq!(after.queue[1..], before.queue[1..]);
    assert_eq!(after.reserve[1..], before.reserve[1..]);
    assert_eq!(after.queue_front, before.queue_front);
    assert_eq!(after.queue_back, before.queue_back);
}

#[test]
fn test_release_drops_piece_from_all_containers() {
    let mut c = scripted(StackConfig::default());
    let held = c.hold().unwrap().held;
    let released = c.release().unwrap().released;
    assert_eq!(released, held);

    let snap = c.snapshot();
    assert!(!snap.queue.contains(&held));
    assert!(!snap.reserve.contains(&held));
    assert!(!snap.history.contains(&held));
}

#[test]
fn test_partial_exchange_with_small_capacities() {
    let mut c = scripted(StackConfig::new(3, 2, 2));
    c.hold().unwrap(); // reserve [1001]
    // queue [1002, 1003, 1004]
    let result = c.partial_exchange();

    let ids = |v: &[Piece]| v.iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(ids(&result.moved_to_reserve), vec![1002, 1003]);
    assert_eq!(ids(&result.moved_to_queue), vec![1001]);
    assert_eq!(ids(&result.discarded), vec![1006]);
    assert!(result.mismatch.is_some());

    let snap = c.snapshot();
    assert_eq!(ids(&snap.queue), vec![1001, 1004, 1005]);
    assert_eq!(ids(&snap.reserve), vec![1003, 1002]);
}

#[test]
fn test_exchange_with_reserve_as_large_as_queue() {
    let mut c = scripted(StackConfig::new(3, 3, 5));
    for _ in 0..3 {
        c.hold().unwrap();
    }
    let result = c.partial_exchange();

    let snap = c.snapshot();
    for piece in &result.moved_to_queue {
        assert!(snap.queue.contains(piece), "{} not in queue", piece);
        assert!(!result.discarded.contains(piece));
    }
    let ids = |v: &[Piece]| v.iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(ids(&snap.queue), vec![1001, 1002, 1003]);
    assert_eq!(ids(&snap.reserve), vec![1006, 1005, 1004]);
    assert!(result.mismatch.is_none());
}

#[test]
fn test_reserve_larger_than_queue_is_rejected() {
    let err = GameController::new(StackConfig::new(2, 3, 5), 1).unwrap_err();
    assert_eq!(
        err,
        ConfigError::ReserveExceedsQueue {
            reserve: 3,
            queue: 2
        }
    );
}

#[test]
fn test_apply_covers_every_command() {
    let mut c = scripted(StackConfig::default());
    for command in [
        StackCommand::Play,
        StackCommand::Hold,
        StackCommand::Swap,
        StackCommand::Exchange,
        StackCommand::Release,
        StackCommand::Undo,
        StackCommand::Restart,
    ] {
        let outcome = c.apply(command).unwrap();
        assert_eq!(outcome.command(), command);
        assert!(c.queue().is_full());
    }
}

#[test]
fn test_seeded_controllers_agree() {
    let mut a = GameController::new(StackConfig::default(), 42).unwrap();
    let mut b = GameController::new(StackConfig::default(), 42).unwrap();
    for _ in 0..20 {
        assert_eq!(a.play(), b.play());
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

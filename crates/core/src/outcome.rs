//! Result types returned by controller operations.
//!
//! Each result names the pieces an operation touched so a front-end can
//! describe the change without diffing snapshots.

use arrayvec::ArrayVec;

use crate::types::{Piece, StackCommand, MAX_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayResult {
    pub played: Piece,
    /// Backfilled at the queue tail.
    pub generated: Piece,
    /// Oldest history entry dropped to make room, if the history was full.
    pub evicted: Option<Piece>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldResult {
    pub held: Piece,
    pub generated: Piece,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseResult {
    pub released: Piece,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapResult {
    pub queue_front_now: Piece,
    pub reserve_top_now: Piece,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoResult {
    pub restored: Piece,
    /// Tail piece given up to make room at the front.
    pub discarded: Piece,
}

/// Advisory note that a partial exchange moved unequal piece counts.
///
/// The exchange still ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityMismatch {
    pub moved_to_reserve: usize,
    pub moved_to_queue: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeResult {
    /// In the order they left the queue front.
    pub moved_to_reserve: ArrayVec<Piece, MAX_CAPACITY>,
    /// In the order they were popped from the reserve.
    pub moved_to_queue: ArrayVec<Piece, MAX_CAPACITY>,
    pub generated: ArrayVec<Piece, MAX_CAPACITY>,
    pub discarded: ArrayVec<Piece, MAX_CAPACITY>,
    pub mismatch: Option<CapacityMismatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartResult {
    pub cleared_reserve: usize,
    pub cleared_history: usize,
}

/// Outcome of [`GameController::apply`](crate::controller::GameController::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Play(PlayResult),
    Hold(HoldResult),
    Release(ReleaseResult),
    Swap(SwapResult),
    Undo(UndoResult),
    Exchange(ExchangeResult),
    Restart(RestartResult),
}

impl Outcome {
    pub fn command(&self) -> StackCommand {
        match self {
            Outcome::Play(_) => StackCommand::Play,
            Outcome::Hold(_) => StackCommand::Hold,
            Outcome::Release(_) => StackCommand::Release,
            Outcome::Swap(_) => StackCommand::Swap,
            Outcome::Undo(_) => StackCommand::Undo,
            Outcome::Exchange(_) => StackCommand::Exchange,
            Outcome::Restart(_) => StackCommand::Restart,
        }
    }
}

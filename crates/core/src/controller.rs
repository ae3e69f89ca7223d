//! Game controller - composite operations over queue, reserve and history.
//!
//! The controller exclusively owns the three containers and the piece factory.
//! Every operation either runs to completion or is refused up front with a
//! [`StackError`] before anything is mutated. After every call the queue holds
//! exactly `queue_capacity` pieces.

use arrayvec::ArrayVec;
use tracing::{debug, trace, warn};

use crate::config::StackConfig;
use crate::error::{ConfigError, StackError};
use crate::factory::PieceFactory;
use crate::history::UndoHistory;
use crate::outcome::*;
use crate::queue::PieceQueue;
use crate::reserve::ReserveStack;
use crate::rng::{KindSource, SimpleRng};
use crate::snapshot::StackSnapshot;
use crate::types::{Piece, StackCommand, MAX_CAPACITY};

#[derive(Debug, Clone)]
pub struct GameController<S = SimpleRng> {
    config: StackConfig,
    factory: PieceFactory<S>,
    queue: PieceQueue,
    reserve: ReserveStack,
    history: UndoHistory,
}

impl GameController<SimpleRng> {
    /// Create a controller whose piece kinds come from a seeded [`SimpleRng`].
    pub fn new(config: StackConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_source(config, SimpleRng::new(seed))
    }
}

impl<S: KindSource> GameController<S> {
    /// Create a controller with an explicit kind source.
    ///
    /// The queue is filled immediately; reserve and history start empty.
    pub fn with_source(config: StackConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut factory = PieceFactory::new(source);
        let queue = PieceQueue::new(config.queue_capacity, &mut factory);
        debug!(
            queue_capacity = config.queue_capacity,
            reserve_capacity = config.reserve_capacity,
            undo_capacity = config.undo_capacity,
            "controller initialized"
        );

        Ok(Self {
            config,
            factory,
            queue,
            reserve: ReserveStack::new(config.reserve_capacity),
            history: UndoHistory::new(config.undo_capacity),
        })
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve(&self) -> &ReserveStack {
        &self.reserve
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn factory(&self) -> &PieceFactory<S> {
        &self.factory
    }

    /// Dispatch one command to the matching operation.
    pub fn apply(&mut self, command: StackCommand) -> Result<Outcome, StackError> {
        match command {
            StackCommand::Play => Ok(Outcome::Play(self.play())),
            StackCommand::Hold => self.hold().map(Outcome::Hold),
            StackCommand::Release => self.release().map(Outcome::Release),
            StackCommand::Swap => self.swap().map(Outcome::Swap),
            StackCommand::Undo => self.undo().map(Outcome::Undo),
            StackCommand::Exchange => Ok(Outcome::Exchange(self.partial_exchange())),
            StackCommand::Restart => Ok(Outcome::Restart(self.restart())),
        }
    }

    /// Play the front piece, record it for undo and backfill the tail.
    pub fn play(&mut self) -> PlayResult {
        let played = self.queue.dequeue_front();
        let evicted = self.history.push(played);
        if let Some(old) = evicted {
            trace!(evicted = %old, "undo history full, oldest entry dropped");
        }
        let generated = self.factory.generate();
        self.queue.enqueue_back(generated);

        debug!(played = %played, generated = %generated, "play");
        self.check_invariants();
        PlayResult {
            played,
            generated,
            evicted,
        }
    }

    /// Move the front piece into the reserve and backfill the tail.
    ///
    /// Held pieces are not recorded in the undo history.
    pub fn hold(&mut self) -> Result<HoldResult, StackError> {
        if self.reserve.is_full() {
            debug!(reserve = self.reserve.len(), "hold refused: reserve full");
            return Err(StackError::ReserveFull);
        }

        let held = self.queue.dequeue_front();
        // Not full: checked above.
        let pushed = self.reserve.push(held);
        debug_assert!(pushed.is_ok());
        let generated = self.factory.generate();
        self.queue.enqueue_back(generated);

        debug!(held = %held, generated = %generated, "hold");
        self.check_invariants();
        Ok(HoldResult { held, generated })
    }

    /// Take the top piece out of the reserve.
    ///
    /// The released piece goes to the caller only; it is not put back into the
    /// queue or anywhere else.
    pub fn release(&mut self) -> Result<ReleaseResult, StackError> {
        let released = self.reserve.pop().ok_or(StackError::ReserveEmpty)?;

        debug!(released = %released, "release");
        Ok(ReleaseResult { released })
    }

    /// Exchange the queue front with the reserve top. Cursors stay put.
    pub fn swap(&mut self) -> Result<SwapResult, StackError> {
        let top = self.reserve.top_mut().ok_or(StackError::ReserveEmpty)?;
        let front = self.queue.front_mut();
        std::mem::swap(front, top);

        let queue_front_now = *front;
        let reserve_top_now = *top;
        debug!(queue_front = %queue_front_now, reserve_top = %reserve_top_now, "swap");
        Ok(SwapResult {
            queue_front_now,
            reserve_top_now,
        })
    }

    /// Put the most recently played piece back at the queue front.
    ///
    /// The tail piece generated to backfill that play is discarded for good.
    pub fn undo(&mut self) -> Result<UndoResult, StackError> {
        let restored = self.history.pop().ok_or(StackError::UndoEmpty)?;
        let discarded = self.queue.retract_back();
        self.queue.enqueue_front(restored);

        debug!(restored = %restored, discarded = %discarded, "undo");
        self.check_invariants();
        Ok(UndoResult {
            restored,
            discarded,
        })
    }

    /// Exchange the reserve with the front of the queue.
    ///
    /// The reserve is drained, refilled with `reserve_capacity` pieces taken
    /// from the queue front (each backfilled at the tail), and the drained
    /// pieces are then pushed in at the queue front in pop order, each one
    /// displacing the newest tail piece. This always runs; unequal counts are
    /// reported through [`ExchangeResult::mismatch`].
    pub fn partial_exchange(&mut self) -> ExchangeResult {
        let mut drained: ArrayVec<Piece, MAX_CAPACITY> = ArrayVec::new();
        while let Some(piece) = self.reserve.pop() {
            drained.push(piece);
        }

        // The reserve is empty here and never larger than the queue, so every
        // push below fits and every front insert retracts a generated tail piece.
        let mut result = ExchangeResult::default();
        for _ in 0..self.reserve.capacity() {
            let piece = self.queue.dequeue_front();
            let pushed = self.reserve.push(piece);
            debug_assert!(pushed.is_ok());
            let generated = self.factory.generate();
            self.queue.enqueue_back(generated);
            result.moved_to_reserve.push(piece);
            result.generated.push(generated);
        }

        for piece in drained {
            let discarded = self.queue.retract_back();
            self.queue.enqueue_front(piece);
            trace!(inserted = %piece, discarded = %discarded, "exchange front insert");
            result.discarded.push(discarded);
            result.moved_to_queue.push(piece);
        }

        if result.moved_to_queue.len() != result.moved_to_reserve.len() {
            let mismatch = CapacityMismatch {
                moved_to_reserve: result.moved_to_reserve.len(),
                moved_to_queue: result.moved_to_queue.len(),
            };
            warn!(
                moved_to_reserve = mismatch.moved_to_reserve,
                moved_to_queue = mismatch.moved_to_queue,
                "exchange moved unequal piece counts"
            );
            result.mismatch = Some(mismatch);
        }

        debug!(
            moved_to_reserve = result.moved_to_reserve.len(),
            moved_to_queue = result.moved_to_queue.len(),
            "exchange"
        );
        self.check_invariants();
        result
    }

    /// Refill the queue with fresh pieces and clear reserve and history.
    ///
    /// Ids keep counting from where they were.
    pub fn restart(&mut self) -> RestartResult {
        let result = RestartResult {
            cleared_reserve: self.reserve.len(),
            cleared_history: self.history.len(),
        };
        self.reserve.clear();
        self.history.clear();
        self.queue.initialize(&mut self.factory);

        debug!(next_id = self.factory.next_id(), "restart");
        self.check_invariants();
        result
    }

    /// Copy the current state into `out` without allocating.
    pub fn snapshot_into(&self, out: &mut StackSnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter());
        out.reserve.extend(self.reserve.iter());
        out.history.extend(self.history.iter());
        out.queue_slots.extend(self.queue.slots().iter().copied());
        out.queue_front = self.queue.front_index();
        out.queue_back = self.queue.back_index();
        out.queue_capacity = self.queue.capacity();
        out.reserve_capacity = self.reserve.capacity();
        out.undo_capacity = self.history.capacity();
        out.next_id = self.factory.next_id();
    }

    pub fn snapshot(&self) -> StackSnapshot {
        let mut out = StackSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    fn check_invariants(&self) {
        debug_assert!(self.queue.is_full(), "queue must stay full");
        debug_assert!(self.reserve.len() <= self.reserve.capacity());
        debug_assert!(self.history.len() <= self.history.capacity());
    }
}

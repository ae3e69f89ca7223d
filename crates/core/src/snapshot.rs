use arrayvec::ArrayVec;

use crate::types::{Piece, MAX_CAPACITY};

/// Read-only copy of every container, for presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackSnapshot {
    /// Front first.
    pub queue: ArrayVec<Piece, MAX_CAPACITY>,
    /// Top first.
    pub reserve: ArrayVec<Piece, MAX_CAPACITY>,
    /// Newest first.
    pub history: ArrayVec<Piece, MAX_CAPACITY>,
    /// Queue storage in slot order, for index-table views.
    pub queue_slots: ArrayVec<Piece, MAX_CAPACITY>,
    pub queue_front: usize,
    pub queue_back: usize,
    pub queue_capacity: usize,
    pub reserve_capacity: usize,
    pub undo_capacity: usize,
    pub next_id: u32,
}

impl StackSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.reserve.clear();
        self.history.clear();
        self.queue_slots.clear();
        self.queue_front = 0;
        self.queue_back = 0;
        self.queue_capacity = 0;
        self.reserve_capacity = 0;
        self.undo_capacity = 0;
        self.next_id = 0;
    }

    pub fn queue_front(&self) -> Option<Piece> {
        self.queue.first().copied()
    }

    pub fn reserve_top(&self) -> Option<Piece> {
        self.reserve.first().copied()
    }
}

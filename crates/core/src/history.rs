//! Undo history - bounded LIFO of played pieces with oldest-entry eviction.
//!
//! Stored as a ring: `tail` is the oldest entry and the newest sits at
//! `tail + len - 1`. Pushing onto a full history advances `tail`, which drops
//! the oldest piece without shifting the others.

use crate::types::{Piece, MAX_CAPACITY};

#[derive(Debug, Clone)]
pub struct UndoHistory {
    slots: [Option<Piece>; MAX_CAPACITY],
    capacity: usize,
    tail: usize,
    len: usize,
}

impl UndoHistory {
    pub fn new(capacity: usize) -> Self {
        debug_assert!((1..=MAX_CAPACITY).contains(&capacity));
        Self {
            slots: [None; MAX_CAPACITY],
            capacity: capacity.clamp(1, MAX_CAPACITY),
            tail: 0,
            len: 0,
        }
    }

    /// Record `piece` as the newest entry.
    ///
    /// Never fails. When the history is already full the oldest entry is
    /// evicted and returned.
    pub fn push(&mut self, piece: Piece) -> Option<Piece> {
        let mut evicted = None;
        if self.is_full() {
            evicted = self.slots[self.tail].take();
            self.tail = (self.tail + 1) % self.capacity;
            self.len -= 1;
        }
        let idx = (self.tail + self.len) % self.capacity;
        self.slots[idx] = Some(piece);
        self.len += 1;
        evicted
    }

    /// Remove and return the newest entry.
    pub fn pop(&mut self) -> Option<Piece> {
        if self.len == 0 {
            return None;
        }
        let idx = (self.tail + self.len - 1) % self.capacity;
        self.len -= 1;
        self.slots[idx].take()
    }

    pub fn peek(&self) -> Option<Piece> {
        if self.len == 0 {
            return None;
        }
        self.slots[(self.tail + self.len - 1) % self.capacity]
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len)
            .rev()
            .filter_map(move |i| self.slots[(self.tail + i) % self.capacity])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.slots = [None; MAX_CAPACITY];
        self.tail = 0;
        self.len = 0;
    }
}

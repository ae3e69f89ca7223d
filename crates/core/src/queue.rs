//! Lookahead queue - fixed-capacity circular buffer of upcoming pieces.
//!
//! The queue is always full once initialized. It does not police that itself:
//! the controller pairs every removal with an insertion. The cursors follow the
//! classic layout where `front` is the next piece out and `back` is the next slot
//! written. When the queue is full both cursors point at the same slot.
//!
//! Besides the usual FIFO pair, two operations exist only for undo:
//! [`PieceQueue::retract_back`] takes back the newest tail piece and
//! [`PieceQueue::enqueue_front`] inserts a piece ahead of the current front.

use arrayvec::ArrayVec;

use crate::factory::PieceFactory;
use crate::rng::KindSource;
use crate::types::{Piece, MAX_CAPACITY};

#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Raw slot storage, always `capacity` entries long after initialization.
    slots: ArrayVec<Piece, MAX_CAPACITY>,
    capacity: usize,
    front: usize,
    back: usize,
    /// Live pieces; only used to check the always-full invariant.
    len: usize,
}

impl PieceQueue {
    /// Create a queue and fill it with `capacity` fresh pieces.
    pub fn new<S: KindSource>(capacity: usize, factory: &mut PieceFactory<S>) -> Self {
        debug_assert!((1..=MAX_CAPACITY).contains(&capacity));
        let mut queue = Self {
            slots: ArrayVec::new(),
            capacity: capacity.clamp(1, MAX_CAPACITY),
            front: 0,
            back: 0,
            len: 0,
        };
        queue.initialize(factory);
        queue
    }

    /// Reset both cursors and refill every slot in generation order.
    pub fn initialize<S: KindSource>(&mut self, factory: &mut PieceFactory<S>) {
        self.slots.clear();
        self.front = 0;
        self.back = 0;
        self.len = 0;
        for _ in 0..self.capacity {
            self.slots.push(factory.generate());
            self.back = (self.back + 1) % self.capacity;
            self.len += 1;
        }
    }

    /// Write `piece` at the back cursor and advance it.
    ///
    /// Only valid right after a slot was freed.
    pub fn enqueue_back(&mut self, piece: Piece) {
        debug_assert!(self.len < self.capacity, "enqueue_back on a full queue");
        self.slots[self.back] = piece;
        self.back = (self.back + 1) % self.capacity;
        self.len += 1;
    }

    /// Take the front piece and advance the front cursor.
    pub fn dequeue_front(&mut self) -> Piece {
        debug_assert!(self.len > 0, "dequeue_front on an empty queue");
        let piece = self.slots[self.front];
        self.front = (self.front + 1) % self.capacity;
        self.len = self.len.saturating_sub(1);
        piece
    }

    /// Step the front cursor back one slot and write `piece` there.
    pub fn enqueue_front(&mut self, piece: Piece) {
        debug_assert!(self.len < self.capacity, "enqueue_front on a full queue");
        self.front = (self.front + self.capacity - 1) % self.capacity;
        self.slots[self.front] = piece;
        self.len += 1;
    }

    /// Step the back cursor back one slot, giving up the newest tail piece.
    pub fn retract_back(&mut self) -> Piece {
        debug_assert!(self.len > 0, "retract_back on an empty queue");
        self.back = (self.back + self.capacity - 1) % self.capacity;
        self.len = self.len.saturating_sub(1);
        self.slots[self.back]
    }

    pub fn peek_front(&self) -> Piece {
        self.slots[self.front]
    }

    pub fn front_mut(&mut self) -> &mut Piece {
        &mut self.slots[self.front]
    }

    /// Pieces in play order (front first).
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).map(move |i| self.slots[(self.front + i) % self.capacity])
    }

    /// Raw slot storage in index order, independent of the cursors.
    pub fn slots(&self) -> &[Piece] {
        &self.slots
    }

    pub fn front_index(&self) -> usize {
        self.front
    }

    pub fn back_index(&self) -> usize {
        self.back
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedKinds;
    use crate::types::PieceKind;

    fn factory() -> PieceFactory<ScriptedKinds> {
        PieceFactory::new(ScriptedKinds::new(&[
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::L,
            PieceKind::J,
        ]))
    }

    fn ids(queue: &PieceQueue) -> Vec<u32> {
        queue.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_initialize_fills_in_generation_order() {
        let mut f = factory();
        let queue = PieceQueue::new(5, &mut f);

        assert!(queue.is_full());
        assert_eq!(queue.front_index(), 0);
        assert_eq!(queue.back_index(), 0);
        assert_eq!(ids(&queue), vec![1001, 1002, 1003, 1004, 1005]);
        assert_eq!(queue.peek_front(), Piece::new(PieceKind::I, 1001));
    }

    #[test]
    fn test_dequeue_then_enqueue_wraps() {
        let mut f = factory();
        let mut queue = PieceQueue::new(5, &mut f);

        let played = queue.dequeue_front();
        assert_eq!(played.id, 1001);
        assert_eq!(queue.len(), 4);
        assert!(!queue.is_full());

        queue.enqueue_back(f.generate());
        assert!(queue.is_full());
        assert_eq!(queue.front_index(), 1);
        assert_eq!(queue.back_index(), 1);
        assert_eq!(ids(&queue), vec![1002, 1003, 1004, 1005, 1006]);
        // The new piece reused the slot the played piece left.
        assert_eq!(queue.slots()[0].id, 1006);
    }

    #[test]
    fn test_enqueue_front_wraps_below_zero() {
        let mut f = factory();
        let mut queue = PieceQueue::new(5, &mut f);

        let tail = queue.retract_back();
        assert_eq!(tail.id, 1005);
        assert_eq!(queue.back_index(), 4);

        queue.enqueue_front(Piece::new(PieceKind::Z, 42));
        assert_eq!(queue.front_index(), 4);
        assert!(queue.is_full());
        assert_eq!(ids(&queue), vec![42, 1001, 1002, 1003, 1004]);
    }

    #[test]
    fn test_front_mut_replaces_in_place() {
        let mut f = factory();
        let mut queue = PieceQueue::new(3, &mut f);

        *queue.front_mut() = Piece::new(PieceKind::S, 7);
        assert_eq!(ids(&queue), vec![7, 1002, 1003]);
        assert_eq!(queue.front_index(), 0);
    }

    #[test]
    fn test_reinitialize_keeps_counting_ids() {
        let mut f = factory();
        let mut queue = PieceQueue::new(2, &mut f);
        queue.dequeue_front();
        queue.initialize(&mut f);

        assert!(queue.is_full());
        assert_eq!(ids(&queue), vec![1003, 1004]);
    }

    #[test]
    fn test_single_slot_queue() {
        let mut f = factory();
        let mut queue = PieceQueue::new(1, &mut f);

        assert_eq!(queue.dequeue_front().id, 1001);
        queue.enqueue_back(f.generate());
        assert_eq!(ids(&queue), vec![1002]);
    }
}

//! Reserve stack - bounded LIFO of held pieces.

use arrayvec::ArrayVec;

use crate::types::{Piece, MAX_CAPACITY};

#[derive(Debug, Clone)]
pub struct ReserveStack {
    /// Bottom first; the last element is the top.
    items: ArrayVec<Piece, MAX_CAPACITY>,
    capacity: usize,
}

impl ReserveStack {
    pub fn new(capacity: usize) -> Self {
        debug_assert!((1..=MAX_CAPACITY).contains(&capacity));
        Self {
            items: ArrayVec::new(),
            capacity: capacity.clamp(1, MAX_CAPACITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Push `piece` on top.
    ///
    /// A full stack is left untouched and the piece is handed back.
    pub fn push(&mut self, piece: Piece) -> Result<(), Piece> {
        if self.is_full() {
            return Err(piece);
        }
        self.items.push(piece);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Piece> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<Piece> {
        self.items.last().copied()
    }

    pub fn top_mut(&mut self) -> Option<&mut Piece> {
        self.items.last_mut()
    }

    /// Pieces from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.items.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u32) -> Piece {
        Piece::new(PieceKind::T, id)
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = ReserveStack::new(3);
        assert!(stack.is_empty());

        stack.push(piece(1)).unwrap();
        stack.push(piece(2)).unwrap();
        assert_eq!(stack.peek(), Some(piece(2)));
        assert_eq!(stack.pop(), Some(piece(2)));
        assert_eq!(stack.pop(), Some(piece(1)));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_push_on_full_returns_piece() {
        let mut stack = ReserveStack::new(2);
        stack.push(piece(1)).unwrap();
        stack.push(piece(2)).unwrap();
        assert!(stack.is_full());

        assert_eq!(stack.push(piece(3)), Err(piece(3)));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![piece(2), piece(1)]);
    }

    #[test]
    fn test_pop_on_empty_does_not_mutate() {
        let mut stack = ReserveStack::new(1);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
        assert!(stack.top_mut().is_none());
    }
}

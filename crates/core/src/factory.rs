//! Piece factory - kind selection plus sequential ids.

use crate::rng::{KindSource, SimpleRng};
use crate::types::{Piece, FIRST_PIECE_ID};

/// Generates pieces with a random kind and the next sequential id.
///
/// The id counter belongs to the factory and only ever moves forward.
#[derive(Debug, Clone)]
pub struct PieceFactory<S = SimpleRng> {
    source: S,
    next_id: u32,
}

impl PieceFactory<SimpleRng> {
    /// Factory backed by a seeded [`SimpleRng`].
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<S: KindSource> PieceFactory<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            next_id: FIRST_PIECE_ID,
        }
    }

    /// Create the next piece.
    pub fn generate(&mut self) -> Piece {
        let piece = Piece::new(self.source.next_kind(), self.next_id);
        self.next_id += 1;
        piece
    }

    /// Id the next generated piece will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedKinds;
    use crate::types::PieceKind;

    #[test]
    fn test_ids_start_at_first_piece_id() {
        let mut factory = PieceFactory::seeded(1);
        assert_eq!(factory.next_id(), 1001);
        assert_eq!(factory.generate().id, 1001);
        assert_eq!(factory.generate().id, 1002);
        assert_eq!(factory.next_id(), 1003);
    }

    #[test]
    fn test_kinds_follow_source() {
        let mut factory = PieceFactory::new(ScriptedKinds::new(&[PieceKind::O, PieceKind::T]));
        assert_eq!(factory.generate(), Piece::new(PieceKind::O, 1001));
        assert_eq!(factory.generate(), Piece::new(PieceKind::T, 1002));
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let mut a = PieceFactory::seeded(99);
        let mut b = PieceFactory::seeded(99);
        for _ in 0..50 {
            assert_eq!(a.generate(), b.generate());
        }
    }
}

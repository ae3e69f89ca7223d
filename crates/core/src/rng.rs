//! RNG module - piece kind selection
//!
//! Piece kinds are drawn uniformly from the seven-symbol alphabet. The source of
//! kinds is abstracted behind [`KindSource`] so games can run on a seeded LCG
//! ([`SimpleRng`]) or on a fixed script ([`ScriptedKinds`]) for reproducible
//! scenarios.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Anything that can pick the kind of the next piece.
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current RNG state (reseeding with it continues the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl KindSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Maximum script length kept by [`ScriptedKinds`].
pub const SCRIPT_LEN: usize = 32;

/// Replays a fixed list of kinds, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedKinds {
    kinds: ArrayVec<PieceKind, SCRIPT_LEN>,
    index: usize,
}

impl ScriptedKinds {
    /// Build a script from `kinds`.
    ///
    /// Entries past [`SCRIPT_LEN`] are ignored. An empty script falls back to
    /// the alphabet order.
    pub fn new(kinds: &[PieceKind]) -> Self {
        let mut script: ArrayVec<PieceKind, SCRIPT_LEN> =
            kinds.iter().copied().take(SCRIPT_LEN).collect();
        if script.is_empty() {
            script.extend(PieceKind::ALL);
        }
        Self {
            kinds: script,
            index: 0,
        }
    }
}

impl KindSource for ScriptedKinds {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

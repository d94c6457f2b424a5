//! RNG module - seedable piece generation
//!
//! Pieces are drawn uniformly with repetition from the 7 kinds (no bag), using
//! a small LCG so that a seed fully determines the piece sequence. A fixed
//! cycling sequence is also available for scripted play and tests.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of upcoming piece kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceGenerator {
    /// Uniform choice with repetition over all 7 kinds
    Uniform(SimpleRng),
    /// Cycles through a fixed, non-empty list
    Sequence { kinds: Vec<PieceKind>, index: usize },
}

impl PieceGenerator {
    pub fn uniform(seed: u32) -> Self {
        Self::Uniform(SimpleRng::new(seed))
    }

    /// Returns None for an empty list
    pub fn sequence(kinds: &[PieceKind]) -> Option<Self> {
        if kinds.is_empty() {
            return None;
        }
        Some(Self::Sequence {
            kinds: kinds.to_vec(),
            index: 0,
        })
    }

    /// Draw the next kind
    pub fn draw(&mut self) -> PieceKind {
        match self {
            Self::Uniform(rng) => {
                let idx = rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            Self::Sequence { kinds, index } => {
                let kind = kinds[*index % kinds.len()];
                *index = (*index + 1) % kinds.len();
                kind
            }
        }
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::uniform(1)
    }
}

impl Iterator for PieceGenerator {
    type Item = PieceKind;

    fn next(&mut self) -> Option<PieceKind> {
        Some(self.draw())
    }
}

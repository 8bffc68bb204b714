//! RNG module - deterministic piece generation
//!
//! The session owns a [`PieceGenerator`]; the containers never create pieces
//! themselves. Generation is keyed by the piece id, so a session replayed
//! with the same seed produces the same sequence of kinds.
//!
//! The underlying [`SimpleRng`] is a small LCG, good enough for picking one
//! of four kinds and trivially reproducible across platforms.

use crate::types::{Piece, PieceKind};

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
    ///
    /// Draws from the high half of the word; the low bits of an LCG cycle
    /// with a very short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Deterministic piece source keyed by piece id
///
/// [`generate`](Self::generate) is a pure function of `(seed, id)`: it takes
/// `&self` and never advances shared state, so the caller is free to re-derive
/// any piece it has already issued.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    seed: u32,
}

impl PieceGenerator {
    /// Create a generator with the given seed
    pub fn new(seed: u32) -> Self {
        // Matches the SimpleRng zero-seed rule so seed() round-trips.
        Self {
            seed: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed this generator was built with (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Produce the piece for `id`
    ///
    /// The kind is drawn pseudo-randomly from [`PieceKind::ALL`]; the id is
    /// folded into the RNG state so consecutive ids do not walk the kinds in
    /// lockstep.
    pub fn generate(&self, id: u32) -> Piece {
        let mut rng = SimpleRng::new(self.seed ^ id.wrapping_mul(0x9E37_79B9));
        let kind = PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize];
        Piece::new(kind, id)
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

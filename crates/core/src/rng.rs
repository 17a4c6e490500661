//! RNG module - independent uniform piece selection
//!
//! Every draw picks one of the seven kinds with equal probability, with no
//! bag or history: repeats and long streaks are possible.
//!
//! Play uses an entropy-seeded generator; tests and benches seed explicitly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::Tetromino;
use crate::types::PieceKind;

/// Random piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: StdRng,
}

impl PieceGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a kind uniformly from all seven
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// Draw a fresh piece positioned at the spawn anchor for `width`
    pub fn next(&mut self, width: u8) -> Tetromino {
        Tetromino::spawn(self.next_kind(), width)
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

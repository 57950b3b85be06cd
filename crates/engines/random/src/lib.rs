//! Random Checkers Policy
//!
//! Picks moves uniformly at random from the legal set. Useful for:
//! - Baseline comparisons (any trained policy should beat this)
//! - Stress testing move generation and the game runner

use checkers_core::{Move, MoveSource, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

/// A move source with no evaluation at all: every legal move is equally
/// likely.
pub struct RandomPolicy {
    rng: StdRng,
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomPolicy {
    fn choose_move(&mut self, _pos: &Position, legal: &[Move]) -> Move {
        legal[self.rng.gen_range(0..legal.len())]
    }

    fn name(&self) -> &str {
        "random"
    }
}

//! Linear-Evaluation Checkers Policy
//!
//! Scores every legal move with a six-coefficient linear function of board
//! features and picks the argmax, mixing in a configurable rate of uniformly
//! random moves for exploration during self-play training.

mod eval;

pub use eval::{
    evaluate, threat_count_after, Weights, INITIAL_BLACK_WEIGHTS, INITIAL_RED_WEIGHTS,
    WEIGHT_COUNT,
};

use checkers_core::{Move, MoveSource, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


/// Default probability of ignoring the evaluation and playing a uniformly
/// random legal move. Half of all training moves are exploratory.
pub const EXPLORATION_RATE: f64 = 0.5;

/// A move source driven by the linear evaluator.
///
/// With probability `exploration` a move is drawn uniformly from the legal
/// set; otherwise every legal move is evaluated and the maximum wins, ties
/// resolved in favor of the *last* maximum in enumeration order.
pub struct LinearPolicy {
    weights: Weights,
    exploration: f64,
    rng: StdRng,
    name: String,
}

impl LinearPolicy {
    /// Policy with the default exploration rate.
    pub fn new(weights: Weights) -> Self {
        Self::with_exploration(weights, EXPLORATION_RATE)
    }

    pub fn with_exploration(weights: Weights, exploration: f64) -> Self {
        Self {
            weights,
            exploration,
            rng: StdRng::from_entropy(),
            name: format!("linear ({}% random)", (exploration * 100.0).round()),
        }
    }

    /// Deterministic variant for tests and reproducible runs.
    pub fn seeded(weights: Weights, exploration: f64, seed: u64) -> Self {
        let mut policy = Self::with_exploration(weights, exploration);
        policy.rng = StdRng::seed_from_u64(seed);
        policy
    }

    /// Pure-argmax policy with no random moves; used for interactive play.
    pub fn greedy(weights: Weights) -> Self {
        Self::with_exploration(weights, 0.0)
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn set_weights(&mut self, weights: Weights) {
        self.weights = weights;
    }
}

impl MoveSource for LinearPolicy {
    fn choose_move(&mut self, pos: &Position, legal: &[Move]) -> Move {
        if self.exploration > 0.0 && self.rng.gen_bool(self.exploration) {
            return legal[self.rng.gen_range(0..legal.len())];
        }

        let mut best = legal[0];
        let mut best_value = f64::NEG_INFINITY;
        for mv in legal {
            let value = evaluate(pos, mv, &self.weights);
            // `>=` so a later equal score displaces an earlier one.
            if value >= best_value {
                best_value = value;
                best = *mv;
            }
        }
        best
    }

    fn name(&self) -> &str {
        &self.name
    }
}

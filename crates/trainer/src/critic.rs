//! Turns a recorded feature trace into supervised training examples.
//!
//! Each snapshot in a trace is paired with a target equal to the current
//! evaluation of its successor snapshot. The terminal snapshot has no
//! successor and produces no example.

use linear_engine::{Weights, WEIGHT_COUNT};

/// One supervised example: a board's feature vector and the value the
/// evaluation should have produced for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingExample {
    pub features: [u32; WEIGHT_COUNT],
    pub target: f64,
}

/// Dot product of a feature snapshot with the current coefficients.
pub fn target_value(features: &[u32; WEIGHT_COUNT], weights: &Weights) -> f64 {
    features
        .iter()
        .zip(weights.iter())
        .map(|(&f, &w)| f64::from(f) * w)
        .sum()
}

/// Pairs every non-terminal snapshot with the estimated value of its
/// successor. A trace with fewer than two snapshots yields no examples.
pub fn training_values(trace: &[[u32; WEIGHT_COUNT]], weights: &Weights) -> Vec<TrainingExample> {
    trace
        .windows(2)
        .map(|pair| TrainingExample {
            features: pair[0],
            target: target_value(&pair[1], weights),
        })
        .collect()
}

#[cfg(test)]
#[path = "critic_tests.rs"]
mod critic_tests;

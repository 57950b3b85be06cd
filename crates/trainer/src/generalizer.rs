//! Least-mean-squares weight update over a batch of training examples.
//!
//! Coefficients are adjusted one example at a time, rounded to two decimal
//! places, with the per-example correction capped at +/-1 and each
//! coefficient clamped to a fixed magnitude limit so a single lopsided game
//! cannot blow up the evaluation.

use crate::critic::{target_value, TrainingExample};
use linear_engine::{Weights, WEIGHT_COUNT};

/// Learning rate for the per-example correction.
pub const SENSITIVITY: f64 = 0.001;

/// Magnitude limit for each coefficient, in feature order.
pub const COEFF_LIMITS: [f64; WEIGHT_COUNT] = [2.0, 2.0, 4.0, 4.0, 8.0, 8.0];

/// Applies one LMS pass over the examples with the default learning rate.
pub fn update_weights(examples: &[TrainingExample], current: &Weights) -> Weights {
    update_weights_with(examples, current, SENSITIVITY)
}

/// Applies one LMS pass with an explicit learning rate.
pub fn update_weights_with(
    examples: &[TrainingExample],
    current: &Weights,
    sensitivity: f64,
) -> Weights {
    let mut weights = *current;
    for example in examples {
        let estimate = target_value(&example.features, &weights);
        let error = example.target - estimate;
        for (i, weight) in weights.iter_mut().enumerate() {
            let delta = sensitivity * error * f64::from(example.features[i]);
            let delta = delta.clamp(-1.0, 1.0);
            let updated = round2(*weight + delta);
            *weight = updated.clamp(-COEFF_LIMITS[i], COEFF_LIMITS[i]);
        }
    }
    weights
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "generalizer_tests.rs"]
mod generalizer_tests;

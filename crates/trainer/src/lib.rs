//! Self-Play Training Driver for ml-checkers
//!
//! This crate wires the learning loop around the rules engine:
//! - The game runner produces per-side feature traces (performance system)
//! - The critic turns a trace into training examples with one-step targets
//! - The generalizer nudges the linear coefficients toward those targets
//! - The store persists weights and run counters between invocations
//!
//! # Usage
//!
//! ```bash
//! # Run 500 self-play training games against the persisted state
//! cargo run -p trainer -- train --games 500
//!
//! # Benchmark the trained red weights against a random baseline
//! cargo run -p trainer -- bench --games 50
//! ```

mod bench;
mod config;
mod critic;
mod generalizer;
mod session;
mod store;

pub use bench::{run_bench, BenchResult};
pub use config::TrainerConfig;
pub use critic::{target_value, training_values, TrainingExample};
pub use generalizer::{update_weights, update_weights_with, COEFF_LIMITS, SENSITIVITY};
pub use session::TrainingSession;
pub use store::TrainingState;

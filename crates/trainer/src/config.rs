//! Training run configuration

use serde::{Deserialize, Serialize};

/// Knobs for a training run. Every field has a default so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrainerConfig {
    /// Self-play games to run in this invocation
    pub games: u64,
    /// Save state and print a progress line every this many games
    pub checkpoint_interval: u64,
    /// Probability that a training move is chosen uniformly at random
    pub exploration: f64,
    /// Learning rate for the generalizer's weight corrections
    pub sensitivity: f64,
    /// Where the persisted weights and counters live
    pub state_path: String,
    /// Print per-game outcomes, not just checkpoints
    pub verbose: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            games: 100,
            checkpoint_interval: 100,
            exploration: linear_engine::EXPLORATION_RATE,
            sensitivity: crate::generalizer::SENSITIVITY,
            state_path: "training_state.json".to_string(),
            verbose: false,
        }
    }
}

impl TrainerConfig {
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would panic downstream: a zero checkpoint interval
    /// is a remainder-by-zero, and `gen_bool` only accepts probabilities.
    pub fn validate(&self) -> Result<(), String> {
        if self.checkpoint_interval == 0 {
            return Err("checkpoint_interval must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.exploration) {
            return Err(format!(
                "exploration must be within [0, 1], got {}",
                self.exploration
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

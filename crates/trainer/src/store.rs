//! Persistent training state

use linear_engine::{Weights, INITIAL_BLACK_WEIGHTS, INITIAL_RED_WEIGHTS};
use serde::{Deserialize, Serialize};

/// Everything the training loop needs to resume a run: the current
/// coefficients for both sides and the running counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingState {
    pub red: Weights,
    pub black: Weights,
    /// Completed self-play games across all runs
    pub simulations: u64,
    /// Games abandoned because a move failed its preconditions
    pub trace_errors: u64,
}

impl Default for TrainingState {
    fn default() -> Self {
        Self {
            red: INITIAL_RED_WEIGHTS,
            black: INITIAL_BLACK_WEIGHTS,
            simulations: 0,
            trace_errors: 0,
        }
    }
}

impl TrainingState {
    /// Loads state from a JSON file, starting fresh if the file is missing.
    pub fn load_or_default(path: &str) -> Result<Self, String> {
        if !std::path::Path::new(path).exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;

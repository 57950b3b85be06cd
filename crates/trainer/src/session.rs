//! The self-play training loop.
//!
//! One iteration plays a full game between two exploring linear policies,
//! runs the critic over each side's trace, and folds the resulting examples
//! into that side's weights. A game whose move source returns a stale move
//! is counted and skipped rather than aborting the run.

use checkers_core::{GameOutcome, GameReport, GameRunner, RunnerConfig};
use linear_engine::LinearPolicy;

use crate::config::TrainerConfig;
use crate::critic::training_values;
use crate::generalizer::update_weights_with;
use crate::store::TrainingState;

pub struct TrainingSession {
    config: TrainerConfig,
    state: TrainingState,
    runner: GameRunner,
}

impl TrainingSession {
    pub fn new(config: TrainerConfig, state: TrainingState) -> Self {
        Self {
            config,
            state,
            runner: GameRunner::new(RunnerConfig::default()),
        }
    }

    pub fn state(&self) -> &TrainingState {
        &self.state
    }

    pub fn into_state(self) -> TrainingState {
        self.state
    }

    /// Plays one training game and updates both weight sets from its trace.
    /// Returns the game report on success; a rules violation from a move
    /// source is bubbled up for the caller to count.
    pub fn run_one(&mut self) -> Result<GameReport, String> {
        self.config.validate()?;
        let mut red = LinearPolicy::with_exploration(self.state.red, self.config.exploration);
        let mut black = LinearPolicy::with_exploration(self.state.black, self.config.exploration);

        let report = self
            .runner
            .run_game(&mut red, &mut black)
            .map_err(|e| format!("Game aborted: {}", e))?;

        let red_examples = training_values(&report.trace.red, &self.state.red);
        self.state.red =
            update_weights_with(&red_examples, &self.state.red, self.config.sensitivity);

        let black_examples = training_values(&report.trace.black, &self.state.black);
        self.state.black =
            update_weights_with(&black_examples, &self.state.black, self.config.sensitivity);

        self.state.simulations += 1;
        Ok(report)
    }

    /// Runs the configured number of games, checkpointing the state to disk
    /// at the configured interval and once more at the end.
    pub fn train(&mut self) -> Result<(), String> {
        self.config.validate()?;
        for game in 1..=self.config.games {
            match self.run_one() {
                Ok(report) => {
                    if self.config.verbose {
                        println!(
                            "Game {}: {} in {} turns",
                            self.state.simulations,
                            describe_outcome(&report.outcome),
                            report.turns
                        );
                    }
                }
                Err(e) => {
                    self.state.trace_errors += 1;
                    println!("Game {}: {}", self.state.simulations + 1, e);
                }
            }

            if game % self.config.checkpoint_interval == 0 {
                self.checkpoint()?;
            }
        }
        self.checkpoint()
    }

    fn checkpoint(&self) -> Result<(), String> {
        self.state.save(&self.config.state_path)?;
        println!(
            "Checkpoint: {} simulations, {} trace errors",
            self.state.simulations, self.state.trace_errors
        );
        println!("  red:   {:?}", self.state.red);
        println!("  black: {:?}", self.state.black);
        Ok(())
    }
}

fn describe_outcome(outcome: &GameOutcome) -> String {
    match outcome {
        GameOutcome::Elimination { winner } => format!("{:?} wins by elimination", winner),
        GameOutcome::Stalemate { stuck } => format!("{:?} is stalemated", stuck),
        GameOutcome::TurnLimit => "turn limit reached".to_string(),
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;

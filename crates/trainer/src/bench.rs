//! Benchmarking trained weights against a random baseline

use checkers_core::{GameOutcome, GameRunner, RunnerConfig, Side};
use linear_engine::{LinearPolicy, Weights};
use random_engine::RandomPolicy;

/// Aggregate result of a benchmark run, from the linear player's perspective.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl BenchResult {
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    pub fn win_rate(&self) -> f64 {
        if self.total_games() == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.total_games())
    }
}

/// Plays `games` games of greedy linear red against uniformly random black.
/// Stalemates and turn-limit games are counted as draws.
pub fn run_bench(weights: Weights, games: u32, verbose: bool) -> Result<BenchResult, String> {
    let runner = GameRunner::new(RunnerConfig::default());
    let mut result = BenchResult::default();

    for game in 1..=games {
        let mut red = LinearPolicy::greedy(weights);
        let mut black = RandomPolicy::new();

        let report = runner
            .run_game(&mut red, &mut black)
            .map_err(|e| format!("Benchmark game {} failed: {}", game, e))?;

        match report.outcome {
            GameOutcome::Elimination { winner: Side::Red } => result.wins += 1,
            GameOutcome::Elimination { winner: Side::Black } => result.losses += 1,
            // A stalemated side loses nothing here; without a formal
            // scoring rule both stalemate and the turn cap score as draws.
            GameOutcome::Stalemate { .. } | GameOutcome::TurnLimit => result.draws += 1,
        }

        if verbose {
            println!(
                "Game {}/{}: {:?} ({} turns)",
                game, games, report.outcome, report.turns
            );
        }
    }

    Ok(result)
}

#[cfg(test)]
#[path = "bench_tests.rs"]
mod bench_tests;

//! Training CLI
//!
//! Run self-play training games and benchmark the learned weights.

use std::env;

use trainer::{run_bench, TrainerConfig, TrainingSession, TrainingState};

fn print_usage() {
    println!("ML-checkers Training Runner");
    println!();
    println!("Usage:");
    println!("  trainer train [--games N] [--state FILE] [--config FILE]");
    println!("  trainer bench [--games N] [--state FILE]");
    println!("  trainer show  [--state FILE]");
    println!();
    println!("Commands:");
    println!("  train  - run self-play games, updating the persisted weights");
    println!("  bench  - play greedy trained red vs a random mover");
    println!("  show   - print the persisted weights and counters");
    println!();
    println!("Examples:");
    println!("  trainer train --games 1000");
    println!("  trainer bench --games 50 --state training_state.json");
}

/// Scans `args` for `--flag value` pairs, returning (games, state_path,
/// config_path) with `None` for anything not given.
fn parse_flags(args: &[String]) -> (Option<u64>, Option<String>, Option<String>) {
    let mut games = None;
    let mut state_path = None;
    let mut config_path = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    games = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--state" | "-s" => {
                if i + 1 < args.len() {
                    state_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    (games, state_path, config_path)
}

fn run_train(args: &[String]) -> Result<(), String> {
    let (games, state_path, config_path) = parse_flags(args);

    let mut config = match config_path {
        Some(path) => TrainerConfig::load(&path)?,
        None => TrainerConfig::default(),
    };
    if let Some(games) = games {
        config.games = games;
    }
    if let Some(path) = state_path {
        config.state_path = path;
    }

    let state = TrainingState::load_or_default(&config.state_path)?;

    println!("=== Training: {} games ===", config.games);
    println!(
        "Starting from {} simulations ({} trace errors)",
        state.simulations, state.trace_errors
    );
    println!();

    let mut session = TrainingSession::new(config, state);
    session.train()
}

fn run_benchmark(args: &[String]) -> Result<(), String> {
    let (games, state_path, _) = parse_flags(args);
    let games = games.unwrap_or(20) as u32;
    let state_path = state_path.unwrap_or_else(|| "training_state.json".to_string());

    let state = TrainingState::load_or_default(&state_path)?;

    println!("=== Benchmark: trained red vs random black ===");
    println!("Games: {}, weights from {} simulations", games, state.simulations);
    println!();

    let result = run_bench(state.red, games, true)?;

    println!();
    println!("=== Final Result ===");
    println!(
        "red: {} wins, {} losses, {} draws",
        result.wins, result.losses, result.draws
    );
    println!("Win rate: {:.1}%", result.win_rate() * 100.0);
    Ok(())
}

fn show_state(args: &[String]) -> Result<(), String> {
    let (_, state_path, _) = parse_flags(args);
    let state_path = state_path.unwrap_or_else(|| "training_state.json".to_string());

    let state = TrainingState::load(&state_path)?;
    println!("Simulations:  {}", state.simulations);
    println!("Trace errors: {}", state.trace_errors);
    println!("Red weights:   {:?}", state.red);
    println!("Black weights: {:?}", state.black);
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "train" => run_train(&args[2..]),
        "bench" => run_benchmark(&args[2..]),
        "show" => show_state(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use super::*;
use checkers_core::{legal_moves, GameOutcome, GameRunner, RunnerConfig};

#[test]
fn random_policy_returns_a_legal_move() {
    let mut pos = Position::start();
    let legal = legal_moves(&mut pos);

    let mut policy = RandomPolicy::seeded(42);
    for _ in 0..16 {
        let chosen = policy.choose_move(&pos, &legal);
        assert!(legal.contains(&chosen));
    }
}

#[test]
fn random_self_play_reaches_a_terminal_state() {
    let runner = GameRunner::new(RunnerConfig { max_turns: 500 });
    let mut red = RandomPolicy::seeded(1);
    let mut black = RandomPolicy::seeded(2);

    let report = runner.run_game(&mut red, &mut black).unwrap();
    match report.outcome {
        GameOutcome::Elimination { .. }
        | GameOutcome::Stalemate { .. }
        | GameOutcome::TurnLimit => {}
    }
    assert!(!report.trace.red.is_empty());
    assert!(!report.trace.black.is_empty());
}

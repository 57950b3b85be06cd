use super::*;
use crate::types::{Move, PieceClass, PieceId};

/// Deterministic source that always plays the first enumerated move.
struct FirstMove;

impl MoveSource for FirstMove {
    fn choose_move(&mut self, _pos: &Position, legal: &[Move]) -> Move {
        legal[0]
    }

    fn name(&self) -> &str {
        "first-move"
    }
}

/// Source that fabricates a move referencing a piece that does not exist.
struct BogusMove;

impl MoveSource for BogusMove {
    fn choose_move(&mut self, _pos: &Position, _legal: &[Move]) -> Move {
        Move::step(PieceId(9999), PieceClass::Man, 0, 0)
    }

    fn name(&self) -> &str {
        "bogus"
    }
}

#[test]
fn eliminated_side_terminates_without_movegen() {
    // Black has nothing left; the runner must flag elimination on the first
    // status check, before any move generation or selection.
    let mut pos = Position::empty(Side::Red);
    pos.add_piece(Side::Red, PieceClass::Man, 5, 1);

    let runner = GameRunner::default();
    let report = runner
        .run_from(pos, &mut FirstMove, &mut FirstMove)
        .unwrap();

    assert_eq!(
        report.outcome,
        GameOutcome::Elimination { winner: Side::Red }
    );
    assert_eq!(report.turns, 0);
    // Snapshot on entry plus the terminal snapshot, both for red.
    assert_eq!(report.trace.red.len(), 2);
    assert!(report.trace.black.is_empty());
}

#[test]
fn blocked_side_is_stalemate() {
    let mut pos = Position::empty(Side::Red);
    pos.add_piece(Side::Red, PieceClass::Man, 5, 1);
    pos.add_piece(Side::Black, PieceClass::Man, 4, 0);
    pos.add_piece(Side::Black, PieceClass::Man, 4, 2);
    pos.add_piece(Side::Black, PieceClass::Man, 3, 3);

    let runner = GameRunner::default();
    let report = runner
        .run_from(pos, &mut FirstMove, &mut FirstMove)
        .unwrap();

    assert_eq!(report.outcome, GameOutcome::Stalemate { stuck: Side::Red });
    assert_eq!(report.turns, 0);
}

#[test]
fn turn_limit_yields_partial_trace() {
    let runner = GameRunner::new(RunnerConfig { max_turns: 0 });
    let report = runner.run_game(&mut FirstMove, &mut FirstMove).unwrap();

    assert_eq!(report.outcome, GameOutcome::TurnLimit);
    assert_eq!(report.turns, 0);
    assert_eq!(report.trace.red.len(), 2);
}

#[test]
fn capture_win_is_attributed_to_the_capturer() {
    // Lone black man jumped by red; black is eliminated by the move itself.
    let mut pos = Position::empty(Side::Red);
    pos.add_piece(Side::Red, PieceClass::Man, 3, 3);
    pos.add_piece(Side::Black, PieceClass::Man, 2, 4);

    struct TakeJump;
    impl MoveSource for TakeJump {
        fn choose_move(&mut self, _pos: &Position, legal: &[Move]) -> Move {
            *legal.iter().find(|mv| mv.is_capture()).unwrap()
        }
        fn name(&self) -> &str {
            "take-jump"
        }
    }

    let runner = GameRunner::default();
    let report = runner
        .run_from(pos, &mut TakeJump, &mut FirstMove)
        .unwrap();

    assert_eq!(
        report.outcome,
        GameOutcome::Elimination { winner: Side::Red }
    );
    assert_eq!(report.turns, 1);
    // The mover's trace holds the pre-move snapshot; the terminal snapshot
    // lands on the side that would have moved next.
    assert_eq!(report.trace.red.len(), 1);
    assert_eq!(report.trace.black.len(), 1);
}

#[test]
fn full_deterministic_game_completes() {
    let runner = GameRunner::default();
    let report = runner.run_game(&mut FirstMove, &mut FirstMove).unwrap();

    assert!(report.turns > 0);
    assert!(!report.trace.red.is_empty());
    assert!(!report.trace.black.is_empty());
    // First red snapshot is the untouched starting position.
    assert_eq!(report.trace.red[0], [12, 12, 0, 0, 0, 0]);
}

#[test]
fn fabricated_move_surfaces_precondition_error() {
    let runner = GameRunner::default();
    let err = runner
        .run_game(&mut BogusMove, &mut FirstMove)
        .unwrap_err();
    assert_eq!(err, RulesError::UnknownPiece(PieceId(9999)));
}

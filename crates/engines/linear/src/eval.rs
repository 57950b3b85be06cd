//! Linear position evaluation over six board features.

use checkers_core::{square, Move, PieceClass, PieceId, Position, Side};

/// Number of evaluation coefficients.
pub const WEIGHT_COUNT: usize = 6;

/// Coefficients in feature order, from the perspective of the side to move:
/// opponent men, own men, opponent kings, own kings, own threats, opponent
/// threats.
pub type Weights = [f64; WEIGHT_COUNT];

/// Arbitrary starting hypothesis for red, used until training replaces it.
pub const INITIAL_RED_WEIGHTS: Weights = [-1.0, 1.0, -1.0, 1.0, 1.0, -1.0];

/// Arbitrary starting hypothesis for black (mirror of red's).
pub const INITIAL_BLACK_WEIGHTS: Weights = [1.0, -1.0, 1.0, -1.0, -1.0, 1.0];

/// Scores the position as it would stand after `mv`, without touching the
/// real position.
///
/// The first four features are the piece counts adjusted for the move's
/// direct effect: a capture decrements the matching opponent count, and a man
/// landing on its promotion row trades one own man for one own king. The
/// fifth feature re-scans for the capture threats the mover would hold after
/// the move ([`threat_count_after`]); the sixth is the current length of the
/// opponent's (cumulative) threat list.
pub fn evaluate(pos: &Position, mv: &Move, weights: &Weights) -> f64 {
    let mover = pos.turn();
    let opponent = mover.other();

    let mut opp_men = pos.man_count(opponent) as f64;
    let mut opp_kings = pos.king_count(opponent) as f64;
    if let Some(cap) = mv.capture {
        match cap.class {
            PieceClass::Man => opp_men -= 1.0,
            PieceClass::King => opp_kings -= 1.0,
        }
    }

    let mut own_men = pos.man_count(mover) as f64;
    let mut own_kings = pos.king_count(mover) as f64;
    if mv.mover == PieceClass::Man && mv.row == mover.promotion_row() {
        own_men -= 1.0;
        own_kings += 1.0;
    }

    let own_threats = f64::from(threat_count_after(pos, mv));
    let opp_threats = pos.threat_len(opponent) as f64;

    weights[0] * opp_men
        + weights[1] * own_men
        + weights[2] * opp_kings
        + weights[3] * own_kings
        + weights[4] * own_threats
        + weights[5] * opp_threats
}

/// Counts the capture threats the side to move would hold after
/// hypothetically playing `mv`.
///
/// Works on a private copy of the mover's coordinate lists with the moving
/// piece relocated; the board grid itself is scanned as-is, so a jumped-over
/// piece still registers and the vacated origin square still reads occupied.
/// Men are scanned along their two forward diagonals, kings along all four.
pub fn threat_count_after(pos: &Position, mv: &Move) -> u32 {
    let mover = pos.turn();
    let opponent = mover.other();

    let mut men: Vec<(PieceId, (usize, usize))> = pos.pieces(mover, PieceClass::Man).collect();
    let mut kings: Vec<(PieceId, (usize, usize))> = pos.pieces(mover, PieceClass::King).collect();
    let moved = match mv.mover {
        PieceClass::Man => &mut men,
        PieceClass::King => &mut kings,
    };
    for entry in moved.iter_mut() {
        if entry.0 == mv.piece {
            entry.1 = (mv.row, mv.col);
        }
    }

    let forward = mover.forward();
    let man_dirs = [(forward, 1), (forward, -1)];
    let king_dirs = [(-1, 1), (-1, -1), (1, 1), (1, -1)];

    capture_patterns(pos, opponent, &men, &man_dirs)
        + capture_patterns(pos, opponent, &kings, &king_dirs)
}

fn capture_patterns(
    pos: &Position,
    opponent: Side,
    pieces: &[(PieceId, (usize, usize))],
    dirs: &[(i8, i8)],
) -> u32 {
    let mut count = 0;
    for &(_, (row, col)) in pieces {
        for &(dr, dc) in dirs {
            let (r, c) = (row as i8, col as i8);
            let Some((adj_row, adj_col)) = square(r + dr, c + dc) else {
                continue;
            };
            let Some((land_row, land_col)) = square(r + 2 * dr, c + 2 * dc) else {
                continue;
            };
            if pos.cell(adj_row, adj_col).side() == Some(opponent)
                && pos.cell(land_row, land_col).is_empty()
            {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;

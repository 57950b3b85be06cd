use crate::board::Position;
use crate::types::*;

/// Diagonal directions in enumeration order: up-right, up-left, down-right,
/// down-left. Men use only the two forward entries for their side.
const KING_DIRS: [(i8, i8); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];

/// Enumerates every legal move for the side to move.
///
/// Ordering is fixed and load-bearing for the selector's tie-break: king
/// moves come before man moves, pieces are visited in roster discovery
/// order, directions in [`KING_DIRS`] order, and within a direction a plain
/// step precedes a capture.
///
/// Capture probing has a deliberate side effect: every capturable opposing
/// piece found is appended to the mover's threat list, whether or not that
/// capture is ever chosen. The threat lists are never cleared here, so
/// repeated generation against one position accumulates entries.
pub fn legal_moves(pos: &mut Position) -> Vec<Move> {
    let side = pos.turn();
    let mut out = Vec::with_capacity(48);
    gen_class_moves(pos, side, PieceClass::King, &KING_DIRS, &mut out);
    let forward = side.forward();
    let man_dirs = [(forward, 1), (forward, -1)];
    gen_class_moves(pos, side, PieceClass::Man, &man_dirs, &mut out);
    out
}

fn gen_class_moves(
    pos: &mut Position,
    side: Side,
    class: PieceClass,
    dirs: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    // Snapshot the roster up front: threat appends below need &mut access.
    let pieces: Vec<(PieceId, (usize, usize))> = pos.pieces(side, class).collect();
    for (id, (row, col)) in pieces {
        for &(dr, dc) in dirs {
            let (r, c) = (row as i8, col as i8);
            let Some((adj_row, adj_col)) = square(r + dr, c + dc) else {
                continue;
            };
            let adjacent = pos.cell(adj_row, adj_col);
            if adjacent.is_empty() {
                out.push(Move::step(id, class, adj_row, adj_col));
                continue;
            }
            // Jump: the adjacent cell holds an opposing piece and the landing
            // cell two steps out is empty and in bounds.
            let (Some(owner), Some(cap_class)) = (adjacent.side(), adjacent.class()) else {
                continue;
            };
            if owner != side.other() {
                continue;
            }
            let Some((land_row, land_col)) = square(r + 2 * dr, c + 2 * dc) else {
                continue;
            };
            if !pos.cell(land_row, land_col).is_empty() {
                continue;
            }
            let Some(target) = pos.find_piece(owner, cap_class, adj_row, adj_col) else {
                continue;
            };
            pos.push_threat(side, target);
            out.push(Move::jump(
                id,
                class,
                land_row,
                land_col,
                Capture {
                    piece: target,
                    class: cap_class,
                },
            ));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

//! Translating typed square coordinates into legal moves.

use std::io::{self, BufRead, Write};

use checkers_core::{Move, MoveSource, PieceClass, Position, Side};

/// A move source backed by stdin. Prompts for an origin and destination
/// square and re-prompts until the pair resolves to a legal move.
pub struct StdinMoveSource {
    side: Side,
    name: String,
}

impl StdinMoveSource {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            name: format!("human ({:?})", side),
        }
    }
}

impl MoveSource for StdinMoveSource {
    fn choose_move(&mut self, pos: &Position, legal: &[Move]) -> Move {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("Your move (row,col row,col): ");
            let _ = io::stdout().flush();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                // On EOF fall back to the first legal move so the game can end.
                _ => return legal[0],
            };

            match parse_move_line(&line) {
                Some((from, to)) => match resolve_move(pos, legal, self.side, from, to) {
                    Some(mv) => return mv,
                    None => println!("That is not a legal move."),
                },
                None => println!("Enter two squares, e.g. '2,1 3,0'."),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parses "r,c r,c" into an origin and a destination square.
pub fn parse_move_line(line: &str) -> Option<((usize, usize), (usize, usize))> {
    let mut squares = line.split_whitespace();
    let from = parse_square(squares.next()?)?;
    let to = parse_square(squares.next()?)?;
    if squares.next().is_some() {
        return None;
    }
    Some((from, to))
}

fn parse_square(text: &str) -> Option<(usize, usize)> {
    let mut parts = text.split(',');
    let row: usize = parts.next()?.trim().parse().ok()?;
    let col: usize = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() || row > 7 || col > 7 {
        return None;
    }
    Some((row, col))
}

/// Finds the legal move that takes the piece on `from` to `to`, if any.
pub fn resolve_move(
    pos: &Position,
    legal: &[Move],
    side: Side,
    from: (usize, usize),
    to: (usize, usize),
) -> Option<Move> {
    let id = pos
        .find_piece(side, PieceClass::Man, from.0, from.1)
        .or_else(|| pos.find_piece(side, PieceClass::King, from.0, from.1))?;
    legal
        .iter()
        .copied()
        .find(|mv| mv.piece == id && (mv.row, mv.col) == to)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta of a man's forward movement. Red starts on rows 5..8 and
    /// advances toward row 0; black starts on rows 0..3 and advances toward
    /// row 7.
    pub fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Far row where a man of this side is crowned.
    pub fn promotion_row(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Black => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceClass {
    Man,
    King,
}

/// Board cell marker. Rendered as `r`/`R`/`b`/`B` with a space for empty,
/// matching the textual board format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    RedMan,
    RedKing,
    BlackMan,
    BlackKing,
}

impl Cell {
    pub fn piece(side: Side, class: PieceClass) -> Cell {
        match (side, class) {
            (Side::Red, PieceClass::Man) => Cell::RedMan,
            (Side::Red, PieceClass::King) => Cell::RedKing,
            (Side::Black, PieceClass::Man) => Cell::BlackMan,
            (Side::Black, PieceClass::King) => Cell::BlackKing,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::RedMan | Cell::RedKing => Some(Side::Red),
            Cell::BlackMan | Cell::BlackKing => Some(Side::Black),
            Cell::Empty => None,
        }
    }

    pub fn class(self) -> Option<PieceClass> {
        match self {
            Cell::RedMan | Cell::BlackMan => Some(PieceClass::Man),
            Cell::RedKing | Cell::BlackKing => Some(PieceClass::King),
            Cell::Empty => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::RedMan => 'r',
            Cell::RedKing => 'R',
            Cell::BlackMan => 'b',
            Cell::BlackKing => 'B',
        }
    }
}

/// Stable piece identity. Slots are allocated monotonically per position and
/// tombstoned on capture or promotion, so an id never aliases another piece
/// even after removals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    pub piece: PieceId,
    pub class: PieceClass,
}

/// A candidate action for the side to move: relocate `piece` to
/// (`row`, `col`), jumping over `capture` if present. Captures are always a
/// single jump; there are no multi-jump chains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub piece: PieceId,
    pub mover: PieceClass,
    pub row: usize,
    pub col: usize,
    pub capture: Option<Capture>,
}

impl Move {
    pub fn step(piece: PieceId, mover: PieceClass, row: usize, col: usize) -> Self {
        Self {
            piece,
            mover,
            row,
            col,
            capture: None,
        }
    }

    pub fn jump(
        piece: PieceId,
        mover: PieceClass,
        row: usize,
        col: usize,
        capture: Capture,
    ) -> Self {
        Self {
            piece,
            mover,
            row,
            col,
            capture: Some(capture),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }
}

/// Bounds-checked square lookup over signed coordinates.
pub fn square(row: i8, col: i8) -> Option<(usize, usize)> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row as usize, col as usize))
    } else {
        None
    }
}

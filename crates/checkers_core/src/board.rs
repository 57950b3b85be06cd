use crate::error::RulesError;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Slot {
    side: Side,
    class: PieceClass,
    row: usize,
    col: usize,
    alive: bool,
}

/// The mutable game state: an 8x8 grid of cell markers plus per-side piece
/// rosters and threat lists.
///
/// Pieces are identified by stable [`PieceId`]s backed by an arena with
/// tombstones, so captured pieces never shift the identity of the survivors.
/// Each roster additionally keeps its live ids in discovery order; move
/// generation iterates that order, which is what makes enumeration (and the
/// selector's tie-break) deterministic.
///
/// The threat lists are advisory evaluation features, not authoritative game
/// state: move generation appends to them for every capture probe and nothing
/// ever clears them, so they grow cumulatively over the life of a position.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    board: [[Cell; 8]; 8],
    slots: Vec<Slot>,
    red_men: Vec<PieceId>,
    red_kings: Vec<PieceId>,
    black_men: Vec<PieceId>,
    black_kings: Vec<PieceId>,
    red_threat: Vec<PieceId>,
    black_threat: Vec<PieceId>,
    turn: Side,
}

/// Starting squares in discovery order; the roster order at game start
/// matches this listing.
const RED_START: [(usize, usize); 12] = [
    (5, 1),
    (5, 3),
    (5, 5),
    (5, 7),
    (6, 0),
    (6, 2),
    (6, 4),
    (6, 6),
    (7, 1),
    (7, 3),
    (7, 5),
    (7, 7),
];

const BLACK_START: [(usize, usize); 12] = [
    (0, 0),
    (0, 2),
    (0, 4),
    (0, 6),
    (1, 1),
    (1, 3),
    (1, 5),
    (1, 7),
    (2, 0),
    (2, 2),
    (2, 4),
    (2, 6),
];

impl Position {
    /// An empty board with the given side to move. Setup entry point for
    /// hand-built positions; pair with [`Position::add_piece`].
    pub fn empty(turn: Side) -> Self {
        Self {
            board: [[Cell::Empty; 8]; 8],
            slots: Vec::new(),
            red_men: Vec::new(),
            red_kings: Vec::new(),
            black_men: Vec::new(),
            black_kings: Vec::new(),
            red_threat: Vec::new(),
            black_threat: Vec::new(),
            turn,
        }
    }

    /// The standard starting layout: twelve men per side, red to move.
    pub fn start() -> Self {
        let mut pos = Position::empty(Side::Red);
        for (row, col) in BLACK_START {
            pos.add_piece(Side::Black, PieceClass::Man, row, col);
        }
        for (row, col) in RED_START {
            pos.add_piece(Side::Red, PieceClass::Man, row, col);
        }
        pos
    }

    /// Places a new piece, allocating a fresh id appended to the end of the
    /// matching roster's discovery order. The target cell must be empty.
    pub fn add_piece(&mut self, side: Side, class: PieceClass, row: usize, col: usize) -> PieceId {
        debug_assert!(self.board[row][col].is_empty(), "cell already occupied");
        let id = PieceId(self.slots.len() as u32);
        self.slots.push(Slot {
            side,
            class,
            row,
            col,
            alive: true,
        });
        self.board[row][col] = Cell::piece(side, class);
        self.order_mut(side, class).push(id);
        id
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board[row][col]
    }

    /// Read-only grid access for renderers.
    pub fn board(&self) -> &[[Cell; 8]; 8] {
        &self.board
    }

    fn order(&self, side: Side, class: PieceClass) -> &[PieceId] {
        match (side, class) {
            (Side::Red, PieceClass::Man) => &self.red_men,
            (Side::Red, PieceClass::King) => &self.red_kings,
            (Side::Black, PieceClass::Man) => &self.black_men,
            (Side::Black, PieceClass::King) => &self.black_kings,
        }
    }

    fn order_mut(&mut self, side: Side, class: PieceClass) -> &mut Vec<PieceId> {
        match (side, class) {
            (Side::Red, PieceClass::Man) => &mut self.red_men,
            (Side::Red, PieceClass::King) => &mut self.red_kings,
            (Side::Black, PieceClass::Man) => &mut self.black_men,
            (Side::Black, PieceClass::King) => &mut self.black_kings,
        }
    }

    /// Live pieces of one roster in discovery order.
    pub fn pieces(
        &self,
        side: Side,
        class: PieceClass,
    ) -> impl Iterator<Item = (PieceId, (usize, usize))> + '_ {
        self.order(side, class).iter().map(|&id| {
            let slot = &self.slots[id.0 as usize];
            (id, (slot.row, slot.col))
        })
    }

    /// Current square of a piece, or `None` once it has been removed.
    pub fn square_of(&self, id: PieceId) -> Option<(usize, usize)> {
        let slot = self.slots.get(id.0 as usize)?;
        if slot.alive {
            Some((slot.row, slot.col))
        } else {
            None
        }
    }

    /// Resolves the live piece of the given side and class sitting on a
    /// square. Used to identify a jumped-over piece and to translate user
    /// square picks into ids.
    pub fn find_piece(
        &self,
        side: Side,
        class: PieceClass,
        row: usize,
        col: usize,
    ) -> Option<PieceId> {
        self.pieces(side, class)
            .find(|&(_, at)| at == (row, col))
            .map(|(id, _)| id)
    }

    pub fn man_count(&self, side: Side) -> usize {
        self.order(side, PieceClass::Man).len()
    }

    pub fn king_count(&self, side: Side) -> usize {
        self.order(side, PieceClass::King).len()
    }

    pub fn side_eliminated(&self, side: Side) -> bool {
        self.man_count(side) == 0 && self.king_count(side) == 0
    }

    pub fn threat_len(&self, side: Side) -> usize {
        match side {
            Side::Red => self.red_threat.len(),
            Side::Black => self.black_threat.len(),
        }
    }

    /// Records that `side` could capture `target`. Append-only; see the type
    /// docs for why these lists accumulate.
    pub(crate) fn push_threat(&mut self, side: Side, target: PieceId) {
        match side {
            Side::Red => self.red_threat.push(target),
            Side::Black => self.black_threat.push(target),
        }
    }

    #[cfg(test)]
    pub(crate) fn threats(&self, side: Side) -> &[PieceId] {
        match side {
            Side::Red => &self.red_threat,
            Side::Black => &self.black_threat,
        }
    }

    /// The six-count `info` vector recorded into game traces:
    /// `[black_men, red_men, black_kings, red_kings, red_threat, black_threat]`.
    pub fn feature_snapshot(&self) -> [u32; 6] {
        [
            self.man_count(Side::Black) as u32,
            self.man_count(Side::Red) as u32,
            self.king_count(Side::Black) as u32,
            self.king_count(Side::Red) as u32,
            self.threat_len(Side::Red) as u32,
            self.threat_len(Side::Black) as u32,
        ]
    }

    fn slot_checked(&self, id: PieceId) -> Result<&Slot, RulesError> {
        let slot = self
            .slots
            .get(id.0 as usize)
            .ok_or(RulesError::UnknownPiece(id))?;
        if !slot.alive {
            return Err(RulesError::DeadPiece(id));
        }
        Ok(slot)
    }

    /// Tombstones a piece: blanks nothing on the board (callers handle board
    /// markers) but drops the id from its roster order.
    fn remove_piece(&mut self, id: PieceId) {
        let slot = &mut self.slots[id.0 as usize];
        slot.alive = false;
        let (side, class) = (slot.side, slot.class);
        self.order_mut(side, class).retain(|&p| p != id);
    }

    /// Applies a chosen move in place: relocates the mover, removes a
    /// captured piece, crowns a man reaching the far row, and flips the turn.
    ///
    /// Fails without mutating anything if the move references a dead or
    /// mismatched piece, which signals a stale move replayed against a
    /// position that has since changed.
    pub fn apply(&mut self, mv: &Move) -> Result<(), RulesError> {
        let mover_side = self.turn;
        let (from_row, from_col) = {
            let slot = self.slot_checked(mv.piece)?;
            if slot.side != mover_side || slot.class != mv.mover {
                return Err(RulesError::PieceMismatch(mv.piece));
            }
            (slot.row, slot.col)
        };
        if let Some(cap) = mv.capture {
            let slot = self.slot_checked(cap.piece)?;
            if slot.side != mover_side.other() || slot.class != cap.class {
                return Err(RulesError::PieceMismatch(cap.piece));
            }
        }

        if let Some(cap) = mv.capture {
            let (cap_row, cap_col) = {
                let slot = &self.slots[cap.piece.0 as usize];
                (slot.row, slot.col)
            };
            self.board[cap_row][cap_col] = Cell::Empty;
            self.remove_piece(cap.piece);
        }

        self.board[from_row][from_col] = Cell::Empty;
        self.board[mv.row][mv.col] = Cell::piece(mover_side, mv.mover);
        {
            let slot = &mut self.slots[mv.piece.0 as usize];
            slot.row = mv.row;
            slot.col = mv.col;
        }

        // Crown a man on the far row: the man entry is retired and a fresh
        // king id is appended to the king roster, overriding the plain marker
        // just written.
        if mv.mover == PieceClass::Man && mv.row == mover_side.promotion_row() {
            self.remove_piece(mv.piece);
            self.board[mv.row][mv.col] = Cell::Empty;
            self.add_piece(mover_side, PieceClass::King, mv.row, mv.col);
        }

        self.turn = mover_side.other();
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

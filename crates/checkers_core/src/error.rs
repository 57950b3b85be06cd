use crate::types::PieceId;
use std::error::Error;
use std::fmt;

/// Precondition violations surfaced by the rules engine. These indicate a
/// caller bug (typically a stale move replayed against a mutated position);
/// the driver decides whether to abort or retry the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RulesError {
    /// The id was never allocated in this position.
    UnknownPiece(PieceId),
    /// The piece was already captured or promoted away.
    DeadPiece(PieceId),
    /// The piece exists but its side or class does not match the move.
    PieceMismatch(PieceId),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::UnknownPiece(id) => write!(f, "unknown piece id {}", id.0),
            RulesError::DeadPiece(id) => write!(f, "piece id {} is no longer on the board", id.0),
            RulesError::PieceMismatch(id) => {
                write!(f, "piece id {} does not match the move's side/class", id.0)
            }
        }
    }
}

impl Error for RulesError {}

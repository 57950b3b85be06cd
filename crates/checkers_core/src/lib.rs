pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod render;
pub mod types;

// Re-export core game logic (not policy-specific)
pub use board::Position;
pub use error::RulesError;
pub use game::{
    GameOutcome, GameReport, GameRunner, GameTrace, RunnerConfig, MAX_RECORDED_TURNS,
};
pub use movegen::legal_moves;
pub use render::BoardDisplay;
pub use types::*;

// =============================================================================
// MoveSource trait — implemented by every move provider (policies, human input)
// =============================================================================

/// A provider of one chosen move per ply.
///
/// Both machine policies (linear evaluation, uniform random) and the
/// interactive human-input provider implement this, so the same game runner
/// drives self-play and human-vs-machine games.
pub trait MoveSource {
    /// Choose one entry of `legal` for the side to move.
    ///
    /// The runner guarantees `legal` is non-empty (an empty set terminates
    /// the game before any source is consulted); calling this with an empty
    /// slice is a programming error, not a recoverable condition.
    fn choose_move(&mut self, pos: &Position, legal: &[Move]) -> Move;

    /// Human-readable provider name for reporting.
    fn name(&self) -> &str;
}

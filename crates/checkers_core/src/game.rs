use crate::board::Position;
use crate::error::RulesError;
use crate::movegen::legal_moves;
use crate::types::Side;
use crate::MoveSource;

/// Hard cap on recorded turns per game. There is no repetition detection, so
/// this is the guard against two policies shuffling kings forever.
pub const MAX_RECORDED_TURNS: usize = 10_000;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Force-terminate once the red trace exceeds this many snapshots.
    pub max_turns: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_turns: MAX_RECORDED_TURNS,
        }
    }
}

/// Terminal state of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// One side has no men and no kings left.
    Elimination { winner: Side },
    /// The side to move has pieces but no legal move.
    Stalemate { stuck: Side },
    /// The turn cap fired; the trace is partial but still usable.
    TurnLimit,
}

/// Feature snapshots recorded per side, one per ply before that side's move
/// plus a final snapshot at termination. Each entry is the position's
/// [`feature_snapshot`](Position::feature_snapshot) vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameTrace {
    pub red: Vec<[u32; 6]>,
    pub black: Vec<[u32; 6]>,
}

impl GameTrace {
    fn side_mut(&mut self, side: Side) -> &mut Vec<[u32; 6]> {
        match side {
            Side::Red => &mut self.red,
            Side::Black => &mut self.black,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameReport {
    pub trace: GameTrace,
    pub outcome: GameOutcome,
    /// Plies actually applied.
    pub turns: usize,
}

/// Drives one synchronous game to completion, alternating between the two
/// move sources and recording the trace consumed by the training driver.
#[derive(Clone, Debug, Default)]
pub struct GameRunner {
    config: RunnerConfig,
}

impl GameRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Plays a full game from the standard starting layout.
    pub fn run_game(
        &self,
        red: &mut dyn MoveSource,
        black: &mut dyn MoveSource,
    ) -> Result<GameReport, RulesError> {
        self.run_from(Position::start(), red, black)
    }

    /// Plays a game from an arbitrary position.
    ///
    /// Per ply: snapshot for the side to move, then the terminal checks
    /// (elimination is detected without generating moves, an empty legal set
    /// is a stalemate), then one select-and-apply step. A stale move returned
    /// by a source surfaces as `Err`; the runner itself never retries.
    pub fn run_from(
        &self,
        mut pos: Position,
        red: &mut dyn MoveSource,
        black: &mut dyn MoveSource,
    ) -> Result<GameReport, RulesError> {
        let mut trace = GameTrace::default();
        let mut turns = 0usize;

        let outcome = loop {
            trace.side_mut(pos.turn()).push(pos.feature_snapshot());
            if let Some(winner) = winner_by_elimination(&pos) {
                break GameOutcome::Elimination { winner };
            }
            if trace.red.len() > self.config.max_turns {
                break GameOutcome::TurnLimit;
            }

            let legal = legal_moves(&mut pos);
            if legal.is_empty() {
                break GameOutcome::Stalemate { stuck: pos.turn() };
            }

            let source: &mut dyn MoveSource = match pos.turn() {
                Side::Red => red,
                Side::Black => black,
            };
            let mv = source.choose_move(&pos, &legal);
            pos.apply(&mv)?;
            turns += 1;

            if let Some(winner) = winner_by_elimination(&pos) {
                break GameOutcome::Elimination { winner };
            }
        };

        // Final snapshot for whichever side would have moved next.
        trace.side_mut(pos.turn()).push(pos.feature_snapshot());

        Ok(GameReport {
            trace,
            outcome,
            turns,
        })
    }
}

fn winner_by_elimination(pos: &Position) -> Option<Side> {
    if pos.side_eliminated(Side::Red) {
        Some(Side::Black)
    } else if pos.side_eliminated(Side::Black) {
        Some(Side::Red)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

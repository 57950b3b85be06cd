use crate::board::Position;
use std::fmt;

/// Text renderer over the read-only board grid: column headers, one row per
/// rank, cells as their character markers.
pub struct BoardDisplay<'a>(pub &'a Position);

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..8 {
            write!(f, "{} ", col)?;
        }
        writeln!(f)?;
        for row in 0..8 {
            write!(f, "{} ", row)?;
            for col in 0..8 {
                write!(f, "{} ", self.0.cell(row, col).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

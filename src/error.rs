//! Engine error types
//!
//! Every failure is value-returned; a rejected action is never partially
//! applied and never reaches the action log.

use std::fmt;

use thiserror::Error;

use crate::board::Pos;
use crate::rules::ForbiddenKind;

/// Errors surfaced by the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinate outside the board; rejected locally, never logged
    #[error("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// Placement targets an occupied cell
    #[error("cell {0} is already occupied")]
    CellOccupied(Pos),

    /// The constrained player's placement would violate a forbidden-move rule
    #[error("forbidden move at {pos}: {kind}")]
    ForbiddenMove { pos: Pos, kind: ForbiddenKind },

    /// An externally supplied action log failed replay validation
    #[error("corrupt action log: {0}")]
    CorruptLog(LogDefect),

    /// Externally proposed move failed bounds or occupancy checks; retryable
    #[error("invalid suggestion [{row}, {col}] from move source")]
    InvalidSuggestion { row: i32, col: i32 },
}

/// What exactly is wrong with a rejected action log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDefect {
    /// Two effective placements target the same cell
    DuplicateCell(Pos),
    /// An undo with no remaining placement to retract
    NothingToUndo,
    /// The serialized record could not be decoded at all
    Malformed(String),
}

impl fmt::Display for LogDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogDefect::DuplicateCell(pos) => {
                write!(f, "two effective moves target cell {pos}")
            }
            LogDefect::NothingToUndo => write!(f, "undo with no effective move to retract"),
            LogDefect::Malformed(detail) => write!(f, "malformed record: {detail}"),
        }
    }
}

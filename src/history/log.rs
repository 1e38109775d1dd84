//! Log replay: effective moves, board reconstruction, turn derivation

use crate::board::{Board, Player, Pos};
use crate::error::{EngineError, LogDefect};

use super::action::{Action, Move};

/// Placements still in effect after applying every undo in log order.
///
/// The log replays as a stack machine: a place pushes, an undo pops the most
/// recent remaining placement, regardless of which player issued the undo.
/// An undo with nothing left to pop marks the log as corrupt.
pub fn effective_moves(log: &[Action]) -> Result<Vec<Move>, EngineError> {
    let mut stack = Vec::with_capacity(log.len());

    for action in log {
        match action {
            Action::Place(mv) => stack.push(*mv),
            Action::Undo { .. } => {
                if stack.pop().is_none() {
                    return Err(EngineError::CorruptLog(LogDefect::NothingToUndo));
                }
            }
        }
    }

    Ok(stack)
}

/// Rebuild the board by replaying the effective moves onto an empty grid.
///
/// Two effective moves on the same cell are unreachable through legal play,
/// but externally supplied logs must be validated here rather than silently
/// repaired.
pub fn reconstruct_board(log: &[Action]) -> Result<Board, EngineError> {
    let mut board = Board::new();

    for mv in effective_moves(log)? {
        let pos = Pos::checked(i32::from(mv.x), i32::from(mv.y))?;
        if !board.is_empty(pos) {
            return Err(EngineError::CorruptLog(LogDefect::DuplicateCell(pos)));
        }
        board.place_stone(pos, mv.player);
    }

    Ok(board)
}

/// Player to move for a fresh game; Black opens.
pub fn current_player(log: &[Action]) -> Result<Player, EngineError> {
    current_player_from(Player::Black, log)
}

/// Player to move when the session opened with an explicit starting player.
pub fn current_player_from(initial: Player, log: &[Action]) -> Result<Player, EngineError> {
    let effective = effective_moves(log)?;
    Ok(if effective.len() % 2 == 0 {
        initial
    } else {
        initial.opponent()
    })
}

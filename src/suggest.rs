//! Wire types for the external move-suggestion service
//!
//! The engine only assembles the request payload and validates the reply;
//! transport, retries and timeout escalation belong to the caller. A reply
//! that fails validation is a retryable error, never a session fault.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Pos, BOARD_SIZE};
use crate::error::EngineError;
use crate::history::Action;

/// Request payload for the move-suggestion service
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    /// Row-major grid of cell codes: 0 empty, 1 black, 2 white
    pub board_state: Vec<Vec<u8>>,
    pub move_history: Vec<Action>,
    pub ai_model: String,
    pub player_color: u8,
}

impl SuggestionRequest {
    pub fn new(
        board: &Board,
        log: &[Action],
        model: impl Into<String>,
        player: Player,
    ) -> Self {
        Self {
            board_state: board_grid(board),
            move_history: log.to_vec(),
            ai_model: model.into(),
            player_color: u8::from(player),
        }
    }
}

/// Reply payload: `{ "move": [row, col] }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SuggestionResponse {
    #[serde(rename = "move")]
    pub cell: [i32; 2],
}

impl SuggestionResponse {
    /// Validate the proposed cell against bounds and occupancy.
    pub fn validate(&self, board: &Board) -> Result<Pos, EngineError> {
        validate_response(board, self.cell[0], self.cell[1])
    }
}

/// Check a `[row, col]` reply; row maps to y and col to x.
pub fn validate_response(board: &Board, row: i32, col: i32) -> Result<Pos, EngineError> {
    let (x, y) = (col, row);
    if !Pos::is_valid(x, y) {
        return Err(EngineError::InvalidSuggestion { row, col });
    }
    let pos = Pos::new(x as u8, y as u8);
    if !board.is_empty(pos) {
        return Err(EngineError::InvalidSuggestion { row, col });
    }
    Ok(pos)
}

/// Row-major grid of cell codes, the shape the service consumes.
pub fn board_grid(board: &Board) -> Vec<Vec<u8>> {
    (0..BOARD_SIZE)
        .map(|y| {
            (0..BOARD_SIZE)
                .map(|x| u8::from(board.get(Pos::new(x as u8, y as u8))))
                .collect()
        })
        .collect()
}

//! Game session management
//!
//! A `Game` owns the action log for one session and keeps the derived
//! board, turn and outcome in sync with it. Every mutation goes through
//! validation first and appends exactly one log entry on success; rejected
//! actions never touch the log. Timestamps are supplied by the caller;
//! the engine performs no I/O of its own, clock included.

use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::error::{EngineError, LogDefect};
use crate::eval::best_move;
use crate::history::{current_player, effective_moves, reconstruct_board, Action, Move};
use crate::rules::{check_win, forbidden_kind};
use crate::suggest::validate_response;

/// Session options fixed at start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Apply forbidden-move rules to Black
    pub forbidden_moves: bool,
}

/// Result of a committed placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placed {
    InProgress,
    Won(Player),
}

/// One game session: the log plus its cached projections
pub struct Game {
    config: GameConfig,
    log: Vec<Action>,
    /// Placements not yet retracted, oldest first
    effective: Vec<Move>,
    board: Board,
    to_move: Player,
    winner: Option<Player>,
}

impl Game {
    /// Fresh session; Black opens.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            log: Vec::new(),
            effective: Vec::new(),
            board: Board::new(),
            to_move: Player::Black,
            winner: None,
        }
    }

    /// Adopt an externally supplied log after hard validation.
    ///
    /// The board and the player to move are derived from the log. If the
    /// last effective placement already completed a winning line, the
    /// session loads as finished.
    pub fn load(log: Vec<Action>, config: GameConfig) -> Result<Self, EngineError> {
        let board = reconstruct_board(&log)?;
        let effective = effective_moves(&log)?;
        let to_move = current_player(&log)?;
        let winner = effective
            .last()
            .filter(|mv| check_win(&board, mv.pos(), config.forbidden_moves))
            .map(|mv| mv.player);

        Ok(Self {
            config,
            log,
            effective,
            board,
            to_move,
            winner,
        })
    }

    /// Continue from a captured mid-game state.
    ///
    /// Board snapshot and starting player are accepted as given; turn
    /// order is not re-derived from log parity. The log prefix must still
    /// replay cleanly so later undos have a coherent stack to pop.
    pub fn resume(
        board: Board,
        to_move: Player,
        prefix: Vec<Action>,
        config: GameConfig,
    ) -> Result<Self, EngineError> {
        let effective = effective_moves(&prefix)?;
        Ok(Self {
            config,
            log: prefix,
            effective,
            board,
            to_move,
            winner: None,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The full action log, oldest first
    pub fn log(&self) -> &[Action] {
        &self.log
    }

    /// Placements currently in effect, oldest first
    pub fn effective_moves(&self) -> &[Move] {
        &self.effective
    }

    /// Validate and commit a placement by the player to move.
    ///
    /// All-or-nothing: on any rejection the log is untouched.
    pub fn place(&mut self, x: i32, y: i32, timestamp: u64) -> Result<Placed, EngineError> {
        let pos = Pos::checked(x, y)?;
        if !self.board.is_empty(pos) {
            return Err(EngineError::CellOccupied(pos));
        }
        if self.config.forbidden_moves && self.to_move == Player::Black {
            if let Some(kind) = forbidden_kind(&self.board, pos) {
                debug!(%pos, %kind, "placement rejected");
                return Err(EngineError::ForbiddenMove { pos, kind });
            }
        }

        let mv = Move::new(self.to_move, pos, timestamp);
        self.log.push(Action::Place(mv));
        self.effective.push(mv);
        self.board.place_stone(pos, self.to_move);

        if check_win(&self.board, pos, self.config.forbidden_moves) {
            self.winner = Some(mv.player);
            debug!(player = ?mv.player, %pos, "winning line completed");
            return Ok(Placed::Won(mv.player));
        }

        self.to_move = self.to_move.opponent();
        Ok(Placed::InProgress)
    }

    /// Retract the most recent effective placement.
    ///
    /// The undo always pops the top of the effective stack regardless of
    /// who requested it; the requester is recorded on the log entry. A win
    /// already on the board is reopened, mirroring retraction of the
    /// winning stone. Returns the retracted move.
    pub fn undo(&mut self, requested_by: Player, timestamp: u64) -> Result<Move, EngineError> {
        let Some(&last) = self.effective.last() else {
            return Err(EngineError::CorruptLog(LogDefect::NothingToUndo));
        };

        self.log.push(Action::Undo {
            player: requested_by,
            original_move: last,
            timestamp,
        });
        self.effective.pop();
        self.board.remove_stone(last.pos());
        self.to_move = last.player;
        self.winner = None;
        debug!(retracted = %last.pos(), "move retracted");

        Ok(last)
    }

    /// Commit a move proposed by the external move-suggestion service.
    ///
    /// Out-of-range or occupied coordinates are a retryable
    /// `InvalidSuggestion`; a suggestion that passes those checks may still
    /// be rejected as a forbidden move by `place`.
    pub fn apply_suggestion(
        &mut self,
        row: i32,
        col: i32,
        timestamp: u64,
    ) -> Result<Placed, EngineError> {
        let pos = validate_response(&self.board, row, col)?;
        self.place(i32::from(pos.x), i32::from(pos.y), timestamp)
    }

    /// Greedy local move for the player to move, used when no external
    /// move source is available. The result must still be committed through
    /// [`Game::place`].
    pub fn fallback_move(&self) -> Option<Pos> {
        best_move(&self.board, self.to_move)
    }
}

//! Gobang rule engine
//!
//! A rule engine for five-in-a-row (Gobang) on a 15x15 board, with optional
//! Renju-style forbidden-move rules for Black:
//! - 5-in-a-row to win; exactly five for Black when forbidden rules are on
//! - Forbidden moves: overline, double open four, double open three
//! - Append-only action log with undo and deterministic replay
//! - Greedy single-ply evaluator as a local move fallback
//!
//! The engine performs no I/O: it consumes and produces plain data, and
//! timestamps on log entries are supplied by the caller. Rendering,
//! networking and timers live in the surrounding application.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line scanning, win and forbidden-move detection
//! - [`history`]: Append-only action log and board reconstruction
//! - [`eval`]: Heuristic fallback evaluator
//! - [`game`]: Session-level validation and bookkeeping
//! - [`replay`]: Persisted replay format
//! - [`suggest`]: Wire types for the external move-suggestion service
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Game, GameConfig, Placed, Player};
//!
//! // Start a game with forbidden-move rules for Black
//! let mut game = Game::new(GameConfig { forbidden_moves: true });
//!
//! // Black opens at the center
//! let placed = game.place(7, 7, 0)?;
//! assert_eq!(placed, Placed::InProgress);
//! assert_eq!(game.to_move(), Player::White);
//!
//! // The local evaluator proposes White's reply
//! if let Some(pos) = game.fallback_move() {
//!     game.place(i32::from(pos.x), i32::from(pos.y), 1)?;
//! }
//! # Ok::<(), gobang::EngineError>(())
//! ```

pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod history;
pub mod replay;
pub mod rules;
pub mod suggest;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use error::{EngineError, LogDefect};
pub use game::{Game, GameConfig, Placed};
pub use history::{Action, Move};
pub use rules::ForbiddenKind;

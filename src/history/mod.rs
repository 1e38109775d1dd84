//! Append-only action log and board reconstruction
//!
//! The log is the single source of truth for a game session. The board and
//! the player to move are projections derived by replaying the log; they
//! carry no state of their own.

pub mod action;
pub mod log;

// Re-exports
pub use action::{Action, Move};
pub use log::{current_player, current_player_from, effective_moves, reconstruct_board};

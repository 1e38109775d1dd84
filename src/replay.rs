//! Persisted replay format
//!
//! Mirrors the record the surrounding application writes to disk: a format
//! version tag, game metadata and the full action log, camelCase on the
//! wire. The engine's contract is that replaying the embedded log always
//! reproduces an identical board and player-to-move pair, across format
//! versions; version-1.0 files carry place records only and decode
//! unchanged.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::error::{EngineError, LogDefect};
use crate::game::Game;
use crate::history::{current_player, reconstruct_board, Action};

/// Current file format version
pub const FORMAT_VERSION: &str = "1.0";

/// A saved game: version tag, metadata and the full action log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayRecord {
    pub file_format_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_timestamp: Option<String>,
    pub game_info: GameInfo,
    pub move_history: Vec<Action>,
}

/// Game metadata carried alongside the log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub mode: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub options: GameOptions,
    pub start_time: String,
    pub winner: ReplayWinner,
}

/// Session options as recorded at save time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
    pub enable_forbidden_moves: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unified_color: Option<String>,
}

/// Outcome field: a player code, or `"interrupted"` for an unfinished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplayWinner {
    Decided(Player),
    Interrupted(String),
}

impl ReplayRecord {
    /// Capture a live session into a saveable record.
    pub fn from_game(game: &Game, mode: &str, session_type: &str, start_time: &str) -> Self {
        let winner = match game.winner() {
            Some(player) => ReplayWinner::Decided(player),
            None => ReplayWinner::Interrupted("interrupted".to_string()),
        };
        Self {
            file_format_version: FORMAT_VERSION.to_string(),
            save_timestamp: None,
            game_info: GameInfo {
                mode: mode.to_string(),
                session_type: session_type.to_string(),
                options: GameOptions {
                    enable_forbidden_moves: game.config().forbidden_moves,
                    ..GameOptions::default()
                },
                start_time: start_time.to_string(),
                winner,
            },
            move_history: game.log().to_vec(),
        }
    }

    /// Decode a record; malformed input is a hard load failure.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let record: ReplayRecord = serde_json::from_str(json)
            .map_err(|e| EngineError::CorruptLog(LogDefect::Malformed(e.to_string())))?;
        if record.file_format_version.is_empty() {
            return Err(EngineError::CorruptLog(LogDefect::Malformed(
                "missing file format version".to_string(),
            )));
        }
        Ok(record)
    }

    /// Encode for persistence by the caller.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Rebuild the board and the player to move from the embedded log.
    ///
    /// Deterministic: the same record always yields the same pair. Logs
    /// that fail replay validation are rejected, never repaired.
    pub fn replay(&self) -> Result<(Board, Player), EngineError> {
        let board = reconstruct_board(&self.move_history)?;
        let player = current_player(&self.move_history)?;
        Ok((board, player))
    }
}

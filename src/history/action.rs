//! Action log entries

use serde::{Deserialize, Serialize};

use crate::board::{Player, Pos};

/// A stone placement
///
/// Timestamps are caller-supplied milliseconds since the Unix epoch; the
/// engine records them verbatim and assumes (without enforcing) that they
/// never decrease across the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub x: u8,
    pub y: u8,
    pub timestamp: u64,
}

impl Move {
    pub fn new(player: Player, pos: Pos, timestamp: u64) -> Self {
        Self {
            player,
            x: pos.x,
            y: pos.y,
            timestamp,
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }
}

/// One entry in the append-only action log
///
/// On the wire a placement flattens to `{player, x, y, timestamp}`, which
/// keeps version-1.0 replay files (place records only) decoding unchanged.
/// An undo additionally carries the retracted move for audit display; the
/// `Undo` variant is listed first so its extra field disambiguates the
/// untagged representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Action {
    /// Retraction of the most recent still-effective placement
    Undo {
        player: Player,
        #[serde(rename = "originalMove")]
        original_move: Move,
        timestamp: u64,
    },
    /// A stone placement
    Place(Move),
}

impl Action {
    /// Timestamp recorded on this entry
    pub fn timestamp(&self) -> u64 {
        match self {
            Action::Place(mv) => mv.timestamp,
            Action::Undo { timestamp, .. } => *timestamp,
        }
    }
}

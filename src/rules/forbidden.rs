//! Renju forbidden-move rules for the constrained player
//!
//! Black may not play a move that creates an overline (six or more in a
//! row), a double open four, or a double open three. A placement that
//! completes an exact five wins immediately and is exempt from all three
//! rules, even when it would also form one of them in another direction.
//!
//! Detection works on a nine-symbol window around the candidate cell
//! (`rules::scan::line_pattern`), matching the same contiguous substrings
//! in every direction. Only Black is ever constrained, so the patterns are
//! written with Black's symbol.

use std::fmt;

use crate::board::{Board, Player, Pos};

use super::scan::{line_pattern, run_lengths, DIRECTIONS};

/// Which forbidden-move rule a placement violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForbiddenKind {
    /// Six or more in a row without a simultaneous exact five
    Overline,
    /// Two directions each one move away from an unstoppable five
    DoubleFour,
    /// Two directions each able to grow into an open four
    DoubleThree,
}

impl fmt::Display for ForbiddenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForbiddenKind::Overline => write!(f, "overline (six or more in a row)"),
            ForbiddenKind::DoubleFour => write!(f, "double open four"),
            ForbiddenKind::DoubleThree => write!(f, "double open three"),
        }
    }
}

/// Four shapes one uncontested move away from five
const LIVE_FOUR_PATTERNS: [&str; 4] = ["_BBBB_", "B_BBB", "BB_BB", "BBB_B"];

/// Three shapes that become a live four if not blocked
const LIVE_THREE_PATTERNS: [&str; 2] = ["_B_BB_", "_BB_B_"];

fn is_live_four(pattern: &str) -> bool {
    LIVE_FOUR_PATTERNS.iter().any(|p| pattern.contains(p))
}

fn is_live_three(pattern: &str) -> bool {
    LIVE_THREE_PATTERNS.iter().any(|p| pattern.contains(p))
}

/// Classify a hypothetical Black placement at an empty cell.
///
/// Returns `None` when the move is legal. All evaluation happens on a
/// scratch copy; the live board is never mutated.
pub fn forbidden_kind(board: &Board, pos: Pos) -> Option<ForbiddenKind> {
    if !board.is_empty(pos) {
        return None;
    }

    let mut scratch = *board;
    scratch.place_stone(pos, Player::Black);

    let runs = run_lengths(&scratch, pos, Player::Black);
    if runs.iter().any(|&r| r == 5) {
        // Completing exactly five is a win, never a violation.
        return None;
    }
    if runs.iter().any(|&r| r > 5) {
        return Some(ForbiddenKind::Overline);
    }

    let mut four_count = 0;
    let mut three_count = 0;
    for &dir in &DIRECTIONS {
        let pattern = line_pattern(&scratch, pos, dir);
        if is_live_four(&pattern) {
            four_count += 1;
        } else if is_live_three(&pattern) {
            three_count += 1;
        }
    }

    if four_count >= 2 {
        Some(ForbiddenKind::DoubleFour)
    } else if three_count >= 2 {
        Some(ForbiddenKind::DoubleThree)
    } else {
        None
    }
}

/// Check if a hypothetical Black placement at `pos` is forbidden
pub fn is_forbidden(board: &Board, pos: Pos) -> bool {
    forbidden_kind(board, pos).is_some()
}

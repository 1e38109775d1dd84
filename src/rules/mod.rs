//! Game rules for Gobang with optional Renju forbidden moves
//!
//! This module implements the rule set:
//! - Line scanning primitives shared by the detectors
//! - Win conditions (five-in-a-row, exact five for constrained Black)
//! - Forbidden moves (overline, double open four, double open three)

pub mod forbidden;
pub mod scan;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{forbidden_kind, is_forbidden, ForbiddenKind};
pub use scan::{line_pattern, run_lengths, DIRECTIONS};
pub use win::check_win;

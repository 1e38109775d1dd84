//! Payoff table for the greedy evaluator
//!
//! Each scanning direction contributes the payoff of its run length; the
//! steep jumps keep a completed five above any combination of lesser runs.

/// Payoff per run length
pub struct RunScore;

impl RunScore {
    /// Completed five: decisive
    pub const FIVE: i32 = 100_000;
    /// Four: one move from five
    pub const FOUR: i32 = 10_000;
    /// Three
    pub const THREE: i32 = 100;
    /// Two
    pub const TWO: i32 = 10;
    /// Lone stone
    pub const ONE: i32 = 1;
}

/// Relative weight of a run made by the scoring player
pub const ATTACK_WEIGHT: i32 = 10;
/// Relative weight of an opponent run denied, nine tenths of attack
pub const DEFENSE_WEIGHT: i32 = 9;

/// Map a run length to its payoff; lengths above five score as five.
pub fn run_score(len: u8) -> i32 {
    match len.min(5) {
        5 => RunScore::FIVE,
        4 => RunScore::FOUR,
        3 => RunScore::THREE,
        2 => RunScore::TWO,
        1 => RunScore::ONE,
        _ => 0,
    }
}

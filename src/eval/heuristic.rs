//! Greedy single-ply move evaluator
//!
//! Scores every empty cell by its offensive potential for the player plus
//! the defensive value of denying the same cell to the opponent, and picks
//! the arg-max. No lookahead, and no forbidden-move filtering: callers must
//! route the chosen cell back through placement validation before
//! committing it.

use tracing::trace;

use crate::board::{Board, Player, Pos, TOTAL_CELLS};
use crate::rules::scan::run_lengths;

use super::patterns::{run_score, ATTACK_WEIGHT, DEFENSE_WEIGHT};

/// Best fallback move for `player`, or `None` on a full board.
///
/// `run_lengths` never reads the queried cell, so each hypothetical
/// placement is scored directly on the live board without a scratch write.
/// Scores use integer weights (attack 10 : defense 9) so that ties resolve
/// exactly; the first cell encountered in row-major scan order wins a tie.
pub fn best_move(board: &Board, player: Player) -> Option<Pos> {
    let opponent = player.opponent();
    let mut best: Option<(Pos, i32)> = None;

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) {
            continue;
        }

        let attack: i32 = run_lengths(board, pos, player)
            .iter()
            .map(|&r| run_score(r))
            .sum();
        let defend: i32 = run_lengths(board, pos, opponent)
            .iter()
            .map(|&r| run_score(r))
            .sum();
        let total = attack * ATTACK_WEIGHT + defend * DEFENSE_WEIGHT;

        if best.map_or(true, |(_, score)| total > score) {
            best = Some((pos, total));
        }
    }

    if let Some((pos, score)) = best {
        trace!(%pos, score, "fallback move selected");
    }
    best.map(|(pos, _)| pos)
}

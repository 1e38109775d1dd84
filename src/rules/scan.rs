//! Line scanning primitives
//!
//! Both the win detector and the forbidden-move detector reduce to questions
//! about lines of stones radiating from a single point. This module provides
//! the two scans they share: contiguous run lengths and a fixed-radius
//! symbolic window for pattern matching.

use crate::board::{Board, Cell, Player, Pos};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal up-right
];

/// Radius of the window produced by [`line_pattern`]
pub const PATTERN_RADIUS: i32 = 4;

/// Maximal contiguous run of `player`'s stones through `pos`, per direction.
///
/// Each run counts `pos` itself plus at most five contiguous cells each way,
/// which bounds overline detection without truncating any legitimate run.
/// The cell at `pos` is never read, so callers may score a hypothetical
/// placement by passing the cell they are about to fill.
pub fn run_lengths(board: &Board, pos: Pos, player: Player) -> [u8; 4] {
    let own = player.cell();
    let mut runs = [1u8; 4];

    for (i, &(dx, dy)) in DIRECTIONS.iter().enumerate() {
        // Positive direction
        for k in 1..=5 {
            let x = i32::from(pos.x) + dx * k;
            let y = i32::from(pos.y) + dy * k;
            if !Pos::is_valid(x, y) || board.get(Pos::new(x as u8, y as u8)) != own {
                break;
            }
            runs[i] += 1;
        }
        // Negative direction
        for k in 1..=5 {
            let x = i32::from(pos.x) - dx * k;
            let y = i32::from(pos.y) - dy * k;
            if !Pos::is_valid(x, y) || board.get(Pos::new(x as u8, y as u8)) != own {
                break;
            }
            runs[i] += 1;
        }
    }

    runs
}

/// Nine-symbol window centered on `pos` along one direction.
///
/// Symbols: `B`/`W` for stones, `_` for an empty cell, `E` for positions
/// beyond the board edge. The edge symbol is distinct from empty so that
/// open patterns cannot falsely extend past the boundary.
pub fn line_pattern(board: &Board, pos: Pos, dir: (i32, i32)) -> String {
    let (dx, dy) = dir;
    let mut pattern = String::with_capacity((2 * PATTERN_RADIUS + 1) as usize);

    for k in -PATTERN_RADIUS..=PATTERN_RADIUS {
        let x = i32::from(pos.x) + dx * k;
        let y = i32::from(pos.y) + dy * k;
        let symbol = if Pos::is_valid(x, y) {
            match board.get(Pos::new(x as u8, y as u8)) {
                Cell::Black => 'B',
                Cell::White => 'W',
                Cell::Empty => '_',
            }
        } else {
            'E'
        };
        pattern.push(symbol);
    }

    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(x, y) in black {
            board.place_stone(Pos::new(x, y), Player::Black);
        }
        for &(x, y) in white {
            board.place_stone(Pos::new(x, y), Player::White);
        }
        board
    }

    #[test]
    fn test_run_lengths_isolated_stone() {
        let board = board_with(&[(7, 7)], &[]);
        assert_eq!(run_lengths(&board, Pos::new(7, 7), Player::Black), [1, 1, 1, 1]);
    }

    #[test]
    fn test_run_lengths_horizontal_row() {
        // Stones at (5,7)..(9,7); query the middle one
        let board = board_with(&[(5, 7), (6, 7), (7, 7), (8, 7), (9, 7)], &[]);
        let runs = run_lengths(&board, Pos::new(7, 7), Player::Black);
        assert_eq!(runs[0], 5);
        assert_eq!(runs[1], 1);
    }

    #[test]
    fn test_run_lengths_blocked_by_opponent() {
        let board = board_with(&[(6, 7), (7, 7), (8, 7)], &[(9, 7)]);
        let runs = run_lengths(&board, Pos::new(7, 7), Player::Black);
        assert_eq!(runs[0], 3);
    }

    #[test]
    fn test_run_lengths_center_not_read() {
        // The queried cell stays empty; neighbors alone make the count,
        // so a hypothetical placement can be scored without a scratch write.
        let board = board_with(&[(5, 7), (6, 7), (8, 7), (9, 7)], &[]);
        let runs = run_lengths(&board, Pos::new(7, 7), Player::Black);
        assert_eq!(runs[0], 5);
    }

    #[test]
    fn test_run_lengths_scan_cap() {
        // Eleven contiguous stones in column 3; the cap of five per side
        // still reports the full window around the middle stone.
        let black: Vec<(u8, u8)> = (1..=11).map(|y| (3u8, y as u8)).collect();
        let board = board_with(&black, &[]);
        let runs = run_lengths(&board, Pos::new(3, 6), Player::Black);
        assert_eq!(runs[1], 11);
    }

    #[test]
    fn test_run_lengths_diagonals() {
        let board = board_with(&[(5, 5), (6, 6), (7, 7)], &[]);
        let runs = run_lengths(&board, Pos::new(6, 6), Player::Black);
        assert_eq!(runs[2], 3);

        let board2 = board_with(&[], &[(5, 9), (6, 8), (7, 7)]);
        let runs2 = run_lengths(&board2, Pos::new(6, 8), Player::White);
        assert_eq!(runs2[3], 3);
    }

    #[test]
    fn test_line_pattern_center_window() {
        let board = board_with(&[(7, 7), (8, 7)], &[(5, 7)]);
        // Window along the horizontal axis: x in 3..=11 at y=7
        let pattern = line_pattern(&board, Pos::new(7, 7), (1, 0));
        assert_eq!(pattern.len(), 9);
        assert_eq!(pattern, "__W_BB___");
    }

    #[test]
    fn test_line_pattern_edge_symbols() {
        let board = board_with(&[(0, 0)], &[]);
        let pattern = line_pattern(&board, Pos::new(0, 0), (1, 0));
        // Four positions left of x=0 are off the board
        assert_eq!(pattern, "EEEEB____");
    }

    #[test]
    fn test_line_pattern_edge_not_empty() {
        // Positions past the boundary must read as edge, never as empty.
        let board = board_with(&[(0, 3)], &[]);
        let pattern = line_pattern(&board, Pos::new(0, 3), (1, -1));
        assert_eq!(pattern, "EEEEB___E");
    }
}

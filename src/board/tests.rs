use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_player_cell_roundtrip() {
    assert_eq!(Player::Black.cell(), Cell::Black);
    assert_eq!(Player::White.cell(), Cell::White);
    assert_eq!(Cell::Black.player(), Some(Player::Black));
    assert_eq!(Cell::White.player(), Some(Player::White));
    assert_eq!(Cell::Empty.player(), None);
}

#[test]
fn test_wire_codes() {
    assert_eq!(u8::from(Cell::Empty), 0);
    assert_eq!(u8::from(Cell::Black), 1);
    assert_eq!(u8::from(Cell::White), 2);
    assert_eq!(u8::from(Player::Black), 1);
    assert_eq!(Player::try_from(2u8), Ok(Player::White));
    assert!(Player::try_from(0u8).is_err());
    assert!(Player::try_from(3u8).is_err());
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.x, 7);
    assert_eq!(pos2.y, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_checked() {
    assert!(Pos::checked(7, 7).is_ok());
    assert!(matches!(
        Pos::checked(15, 3),
        Err(crate::error::EngineError::OutOfBounds { x: 15, y: 3 })
    ));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(14, 0).to_index(), 14);
    assert_eq!(Pos::new(0, 14).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_board_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);

    assert!(board.is_empty(pos));
    board.place_stone(pos, Player::Black);
    assert_eq!(board.get(pos), Cell::Black);
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert_eq!(board.get(pos), Cell::Empty);
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_board_equality() {
    let mut a = Board::new();
    let mut b = Board::new();
    a.place_stone(Pos::new(1, 2), Player::White);
    b.place_stone(Pos::new(1, 2), Player::White);
    assert_eq!(a, b);

    b.place_stone(Pos::new(2, 1), Player::Black);
    assert_ne!(a, b);
}

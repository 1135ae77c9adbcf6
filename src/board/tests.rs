use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_distance() {
    assert_eq!(Pos::new(7, 7).distance(Pos::new(7, 7)), 0);
    assert_eq!(Pos::new(7, 7).distance(Pos::new(9, 8)), 2);
    assert_eq!(Pos::new(0, 14).distance(Pos::new(3, 10)), 4);
}

#[test]
fn test_default_board_is_15x15() {
    let board = Board::default();
    assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
    assert_eq!(board.center(), Pos::new(7, 7));
    assert!(board.is_board_empty());
    assert!(!board.is_full());
}

#[test]
fn test_center_uses_integer_division() {
    assert_eq!(Board::new(10).center(), Pos::new(5, 5));
    assert_eq!(Board::new(9).center(), Pos::new(4, 4));
}

#[test]
fn test_pos_at_bounds() {
    let board = Board::new(15);
    assert_eq!(board.pos_at(0, 0), Some(Pos::new(0, 0)));
    assert_eq!(board.pos_at(14, 14), Some(Pos::new(14, 14)));
    assert_eq!(board.pos_at(-1, 0), None);
    assert_eq!(board.pos_at(0, -1), None);
    assert_eq!(board.pos_at(15, 0), None);
    assert_eq!(board.pos_at(0, 15), None);
}

#[test]
fn test_place_and_remove_track_count() {
    let mut board = Board::new(15);
    board.place_stone(Pos::new(3, 4), Stone::Black);
    board.place_stone(Pos::new(3, 5), Stone::White);
    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);

    // Overwriting an occupied cell does not change the count
    board.place_stone(Pos::new(3, 4), Stone::White);
    assert_eq!(board.stone_count(), 2);

    board.remove_stone(Pos::new(3, 4));
    assert_eq!(board.stone_count(), 1);
    assert!(board.is_empty(Pos::new(3, 4)));
}

#[test]
fn test_with_stone_restores_board() {
    let mut board = Board::new(15);
    board.place_stone(Pos::new(7, 7), Stone::Black);
    let before = board.clone();

    let seen = board.with_stone(Pos::new(7, 8), Stone::White, |b| {
        assert_eq!(b.stone_count(), 2);
        b.get(Pos::new(7, 8))
    });

    assert_eq!(seen, Stone::White);
    assert_eq!(board, before);
}

#[test]
fn test_full_board() {
    let mut board = Board::new(5);
    for pos in board.positions().collect::<Vec<_>>() {
        board.place_stone(pos, Stone::Black);
    }
    assert!(board.is_full());
    assert_eq!(board.stone_count(), 25);
}

#[test]
fn test_positions_row_major() {
    let board = Board::new(5);
    let positions: Vec<_> = board.positions().take(6).collect();
    assert_eq!(positions[0], Pos::new(0, 0));
    assert_eq!(positions[4], Pos::new(0, 4));
    assert_eq!(positions[5], Pos::new(1, 0));
    assert_eq!(board.positions().count(), 25);
}

#[test]
fn test_display_grid() {
    let mut board = Board::new(5);
    board.place_stone(Pos::new(0, 0), Stone::Black);
    board.place_stone(Pos::new(1, 1), Stone::White);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], " 0  ● . . . .");
    assert_eq!(lines[2], " 1  . ○ . . .");
}

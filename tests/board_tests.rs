//! Board tests - grid access, line clears and the top-row check

use tetris_engine::core::{Board, GameManager, PieceGenerator};
use tetris_engine::types::{Cell, Coord, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: i32, kind: PieceKind) {
    for col in 0..board.width() as i32 {
        board.set(Coord::new(row, col), Cell::Occupied(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT as i32 {
        for col in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(Coord::new(row, col)), Some(Cell::Empty));
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(Coord::new(-1, 0)), None);
    assert_eq!(board.get(Coord::new(0, -1)), None);
    assert_eq!(board.get(Coord::new(BOARD_HEIGHT as i32, 0)), None);
    assert_eq!(board.get(Coord::new(0, BOARD_WIDTH as i32)), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(Coord::new(10, 5), Cell::Occupied(PieceKind::T)));
    assert_eq!(board.get(Coord::new(10, 5)), Some(Cell::Occupied(PieceKind::T)));
    assert!(board.is_occupied(Coord::new(10, 5)));

    assert!(board.set(Coord::new(10, 5), Cell::Empty));
    assert!(!board.is_occupied(Coord::new(10, 5)));

    assert!(!board.set(Coord::new(-1, 0), Cell::Occupied(PieceKind::T)));
    assert!(!board.set(Coord::new(0, 10), Cell::Occupied(PieceKind::T)));
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(19));

    fill_row(&mut board, 19, PieceKind::I);
    assert!(board.is_row_full(19));

    board.set(Coord::new(19, 3), Cell::Empty);
    assert!(!board.is_row_full(19));

    assert!(!board.is_row_full(20));
}

#[test]
fn test_clear_without_full_rows_changes_nothing() {
    let mut board = Board::new();
    for (row, col) in [(19, 0), (19, 9), (18, 4), (5, 5), (0, 7)] {
        board.set(Coord::new(row, col), Cell::Occupied(PieceKind::S));
    }
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut board = Board::new();
    let r = 15;
    fill_row(&mut board, r, PieceKind::J);
    // Distinct markers above and below the full row
    board.set(Coord::new(r - 1, 2), Cell::Occupied(PieceKind::T));
    board.set(Coord::new(r - 3, 8), Cell::Occupied(PieceKind::Z));
    board.set(Coord::new(0, 0), Cell::Occupied(PieceKind::O));
    board.set(Coord::new(r + 2, 6), Cell::Occupied(PieceKind::L));
    let before = board.to_cells();

    assert_eq!(board.clear_full_rows(), 1);

    let after = board.to_cells();
    // Rows below r are untouched
    for row in (r as usize + 1)..BOARD_HEIGHT {
        assert_eq!(after[row], before[row]);
    }
    // Every row above r moved down by exactly one
    for row in 0..r as usize {
        assert_eq!(after[row + 1], before[row]);
    }
    // Top row is empty
    assert!(after[0].iter().all(Cell::is_empty));
}

#[test]
fn test_clear_multiple_rows_preserves_order() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    fill_row(&mut board, 17, PieceKind::I);
    board.set(Coord::new(18, 1), Cell::Occupied(PieceKind::T));
    board.set(Coord::new(16, 2), Cell::Occupied(PieceKind::S));

    assert_eq!(board.clear_full_rows(), 2);

    assert_eq!(board.get(Coord::new(19, 1)), Some(Cell::Occupied(PieceKind::T)));
    assert_eq!(board.get(Coord::new(18, 2)), Some(Cell::Occupied(PieceKind::S)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_entire_board() {
    let mut board = Board::new();
    for row in 0..BOARD_HEIGHT as i32 {
        fill_row(&mut board, row, PieceKind::O);
    }
    assert_eq!(board.clear_full_rows(), BOARD_HEIGHT);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_top_row_check() {
    let mut board = Board::new();
    assert!(!board.is_top_row_occupied());

    board.set(Coord::new(1, 4), Cell::Occupied(PieceKind::T));
    assert!(!board.is_top_row_occupied());

    board.set(Coord::new(0, 9), Cell::Occupied(PieceKind::T));
    assert!(board.is_top_row_occupied());
}

#[test]
fn test_game_over_iff_top_row_occupied() {
    let manager = GameManager::new(7);
    assert!(!manager.is_game_over());

    let mut board = Board::new();
    board.set(Coord::new(0, 0), Cell::Occupied(PieceKind::Z));
    let manager = GameManager::with_board(board, PieceGenerator::uniform(7));
    assert!(manager.is_game_over());
}

#[test]
fn test_custom_size_board() {
    let mut board = Board::with_size(6, 8).unwrap();
    fill_row(&mut board, 7, PieceKind::L);
    assert!(board.is_row_full(7));
    assert_eq!(board.rows().count(), 8);
    assert_eq!(board.clear_full_rows(), 1);
}

//! Board tests - placement and line clearing through the public API.

use blockfall::core::{Board, Shape};

#[test]
fn test_new_board_dimensions() {
    let board = Board::new(20, 10);
    assert_eq!(board.rows(), 20);
    assert_eq!(board.cols(), 10);
    assert_eq!(board.cells().len(), 200);
}

#[test]
fn test_dimensions_survive_place_and_clear() {
    let mut board = Board::new(20, 10);
    let square = Shape::from_rows(&[&[1, 1], &[1, 1]]);

    board.place(&square, 0, 18);
    board.fill_row(19);
    board.clear_lines();

    assert_eq!(board.rows(), 20);
    assert_eq!(board.cols(), 10);
    assert_eq!(board.cells().len(), 200);
}

#[test]
fn test_no_full_rows_remain_after_clear() {
    let mut board = Board::new(20, 10);
    for y in 15..20 {
        if y != 17 {
            board.fill_row(y);
        }
    }
    board.clear_lines();
    for y in 0..20 {
        assert!(!board.is_row_full(y), "row {} still full", y);
    }
}

#[test]
fn test_cleared_rows_collapse_downward_in_order() {
    let mut board = Board::new(20, 10);
    // Two marker cells separated by a full row; their relative order must
    // survive the collapse.
    board.set_occupied(2, 15);
    board.fill_row(16);
    board.set_occupied(7, 17);
    board.fill_row(18);
    board.set_occupied(4, 19);

    let cleared = board.clear_lines();
    assert_eq!(cleared.as_slice(), &[18, 16]);

    assert!(board.occupied(2, 17));
    assert!(board.occupied(7, 18));
    assert!(board.occupied(4, 19));
    assert_eq!(board.occupied_count(), 3);
}

#[test]
fn test_i_piece_completes_row_nineteen() {
    // End-to-end scenario: an I piece on columns 0-3 of row 19 plus
    // fillers on 4-9 complete the row; clearing empties the board.
    let mut board = Board::new(20, 10);
    board.place(&Shape::from_rows(&[&[1, 1, 1, 1]]), 0, 19);
    let pair = Shape::from_rows(&[&[1, 1]]);
    board.place(&pair, 4, 19);
    board.place(&pair, 6, 19);
    board.place(&pair, 8, 19);

    assert!(board.is_row_full(19));
    let cleared = board.clear_lines();
    assert_eq!(cleared.len(), 1);
    assert_eq!(board.occupied_count(), 0);
}

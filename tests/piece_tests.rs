//! Piece tests - pair geometry, fit testing, and wall-kick rotation

use tui_puyo::core::{try_rotate, Board, PiecePair};
use tui_puyo::types::{Orientation, PuyoColor, SPAWN_COL, SPAWN_ROW};

fn pair_at(row: i8, col: i8, orientation: Orientation) -> PiecePair {
    PiecePair {
        satellite: PuyoColor::Green,
        pivot: PuyoColor::Red,
        row,
        col,
        orientation,
    }
}

// ============== Geometry Tests ==============

#[test]
fn test_new_pair_spawns_upright_at_center() {
    let piece = PiecePair::new(PuyoColor::Green, PuyoColor::Red);

    assert_eq!(piece.row, SPAWN_ROW);
    assert_eq!(piece.col, SPAWN_COL);
    assert_eq!(piece.orientation, Orientation::Up);
}

#[test]
fn test_cells_satellite_first_pivot_second() {
    let piece = pair_at(5, 2, Orientation::Up);

    let cells = piece.cells();
    assert_eq!(cells[0], (4, 2, PuyoColor::Green));
    assert_eq!(cells[1], (5, 2, PuyoColor::Red));
}

#[test]
fn test_satellite_offsets_by_orientation() {
    assert_eq!(pair_at(5, 2, Orientation::Up).cells()[0], (4, 2, PuyoColor::Green));
    assert_eq!(pair_at(5, 2, Orientation::Right).cells()[0], (5, 3, PuyoColor::Green));
    assert_eq!(pair_at(5, 2, Orientation::Down).cells()[0], (6, 2, PuyoColor::Green));
    assert_eq!(pair_at(5, 2, Orientation::Left).cells()[0], (5, 1, PuyoColor::Green));
}

#[test]
fn test_orientation_cycle() {
    let mut orientation = Orientation::Up;
    for expected in [
        Orientation::Right,
        Orientation::Down,
        Orientation::Left,
        Orientation::Up,
    ] {
        orientation = orientation.rotated();
        assert_eq!(orientation, expected);
    }
}

// ============== Fit Tests ==============

#[test]
fn test_fits_on_empty_board() {
    let board = Board::new();
    assert!(pair_at(5, 2, Orientation::Up).fits(&board));
}

#[test]
fn test_spawn_position_fits_on_empty_board() {
    let board = Board::new();
    let piece = PiecePair::new(PuyoColor::Blue, PuyoColor::Blue);
    assert!(piece.fits(&board));
}

#[test]
fn test_fits_rejects_columns_outside_grid() {
    let board = Board::new();

    // Satellite pokes past the left wall.
    assert!(!pair_at(5, 0, Orientation::Left).fits(&board));
    // Satellite pokes past the right wall.
    assert!(!pair_at(5, 5, Orientation::Right).fits(&board));
    // Pivot itself outside.
    assert!(!pair_at(5, -1, Orientation::Up).fits(&board));
    assert!(!pair_at(5, 6, Orientation::Up).fits(&board));
}

#[test]
fn test_fits_rejects_rows_below_floor() {
    let board = Board::new();

    assert!(!pair_at(11, 2, Orientation::Down).fits(&board));
    assert!(!pair_at(12, 2, Orientation::Up).fits(&board));
}

#[test]
fn test_fits_allows_rows_above_grid() {
    let board = Board::new();

    // Satellite at row -1 is fine; only the visible pivot cell matters.
    assert!(pair_at(0, 2, Orientation::Up).fits(&board));
}

#[test]
fn test_fits_rejects_occupied_cells() {
    let mut board = Board::new();
    board.set(5, 2, Some(PuyoColor::Purple));

    // Pivot on the occupied cell.
    assert!(!pair_at(5, 2, Orientation::Up).fits(&board));
    // Satellite on the occupied cell.
    assert!(!pair_at(5, 1, Orientation::Right).fits(&board));
    // Next to it is fine.
    assert!(pair_at(5, 3, Orientation::Up).fits(&board));
}

// ============== Rotation Tests ==============

#[test]
fn test_rotation_cycle_returns_to_start_without_kicks() {
    let board = Board::new();
    let mut piece = pair_at(5, 2, Orientation::Up);

    for _ in 0..4 {
        piece = try_rotate(&piece, &board).expect("rotation should fit mid-board");
    }

    // Four kick-free rotations restore the original pose.
    assert_eq!(piece, pair_at(5, 2, Orientation::Up));
}

#[test]
fn test_rotation_kicks_off_right_wall() {
    let board = Board::new();
    let piece = pair_at(5, 5, Orientation::Up);

    // Up -> Right would put the satellite at column 6; the piece shifts one
    // column left instead.
    let rotated = try_rotate(&piece, &board).expect("kick should fit");
    assert_eq!(rotated.orientation, Orientation::Right);
    assert_eq!(rotated.col, 4);
    assert_eq!(rotated.row, 5);
}

#[test]
fn test_rotation_kicks_off_left_wall() {
    let board = Board::new();
    let piece = pair_at(5, 0, Orientation::Down);

    // Down -> Left would put the satellite at column -1; the left kick is
    // also off-grid, so the piece shifts right.
    let rotated = try_rotate(&piece, &board).expect("kick should fit");
    assert_eq!(rotated.orientation, Orientation::Left);
    assert_eq!(rotated.col, 1);
}

#[test]
fn test_rotation_prefers_left_kick() {
    let mut board = Board::new();
    // Block the in-place rotation target; both kicks would fit.
    board.set(5, 3, Some(PuyoColor::Blue));

    let piece = pair_at(5, 2, Orientation::Up);
    let rotated = try_rotate(&piece, &board).expect("left kick should fit");

    assert_eq!(rotated.orientation, Orientation::Right);
    assert_eq!(rotated.col, 1);
}

#[test]
fn test_rotation_fails_when_all_kicks_collide() {
    let mut board = Board::new();
    board.set(5, 3, Some(PuyoColor::Blue));
    board.set(5, 1, Some(PuyoColor::Blue));
    board.set(5, 4, Some(PuyoColor::Blue));

    // In place: satellite lands on (5, 3). Left kick: pivot lands on
    // (5, 1). Right kick: pivot lands on (5, 3).
    let piece = pair_at(5, 2, Orientation::Up);
    assert!(try_rotate(&piece, &board).is_none());
}

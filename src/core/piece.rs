//! Piece module - falling pair geometry and wall-kick rotation
//!
//! A piece is a pivot cell plus a satellite cell orbiting it through the
//! four orientations. The pivot position is the piece's reference
//! coordinate; the satellite offset comes from the orientation table in
//! [`crate::types::Orientation`].

use crate::core::Board;
use crate::types::{Orientation, PuyoColor, GRID_HEIGHT, GRID_WIDTH, SPAWN_COL, SPAWN_ROW};

/// One piece cell as (row, col, color)
pub type PieceCell = (i8, i8, PuyoColor);

/// Active falling pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PiecePair {
    pub satellite: PuyoColor,
    pub pivot: PuyoColor,
    pub row: i8,
    pub col: i8,
    pub orientation: Orientation,
}

impl PiecePair {
    /// Create a new pair at the spawn position, satellite above the pivot.
    pub fn new(satellite: PuyoColor, pivot: PuyoColor) -> Self {
        Self {
            satellite,
            pivot,
            row: SPAWN_ROW,
            col: SPAWN_COL,
            orientation: Orientation::Up,
        }
    }

    /// Enumerate both cells, satellite first, pivot second.
    pub fn cells(&self) -> [PieceCell; 2] {
        let (dr, dc) = self.orientation.satellite_offset();
        [
            (self.row + dr, self.col + dc, self.satellite),
            (self.row, self.col, self.pivot),
        ]
    }

    /// Candidate translated by (dr, dc), orientation unchanged.
    pub fn translated(&self, dr: i8, dc: i8) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
            ..*self
        }
    }

    /// Candidate advanced one rotation step, position unchanged.
    pub fn rotated(&self) -> Self {
        Self {
            orientation: self.orientation.rotated(),
            ..*self
        }
    }

    /// Check that both cells sit at placeable positions.
    ///
    /// Columns must be inside the grid and rows above the floor; rows above
    /// the visible grid (row < 0) are always allowed so a piece can spawn
    /// and rotate partially off-screen. Visible cells must be unoccupied.
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(row, col, _)| {
            if col < 0 || col >= GRID_WIDTH as i8 || row >= GRID_HEIGHT as i8 {
                return false;
            }
            row < 0 || !board.is_occupied(row, col)
        })
    }
}

/// Try to rotate a pair one step with wall kicks.
///
/// Attempts the raw rotation in place, then the same orientation shifted
/// one column left, then one column right. The left-before-right order is
/// a deterministic tie-break. Returns the piece to commit, or None if all
/// three candidates collide.
pub fn try_rotate(piece: &PiecePair, board: &Board) -> Option<PiecePair> {
    let turned = piece.rotated();
    if turned.fits(board) {
        return Some(turned);
    }

    for dc in [-1, 1] {
        let kicked = turned.translated(0, dc);
        if kicked.fits(board) {
            return Some(kicked);
        }
    }

    None
}

//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions
pub const GRID_WIDTH: u8 = 6;
pub const GRID_HEIGHT: u8 = 12;

/// Connected same-color groups of at least this size clear.
pub const MIN_GROUP_SIZE: usize = 4;

/// Spawn coordinate for the pivot cell. The satellite starts one row above,
/// so a fresh piece occupies rows 0 and 1 of the center column.
pub const SPAWN_ROW: i8 = 1;
pub const SPAWN_COL: i8 = (GRID_WIDTH / 2) as i8;

/// Driver timing (milliseconds): one automatic descent per interval.
pub const DROP_INTERVAL_MS: u32 = 700;

/// Number of colors in the palette.
pub const PALETTE_SIZE: u32 = 5;

/// Puyo colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuyoColor {
    Red,
    Green,
    Blue,
    Orange,
    Purple,
}

impl PuyoColor {
    /// All palette colors, in draw-index order.
    pub const ALL: [PuyoColor; PALETTE_SIZE as usize] = [
        PuyoColor::Red,
        PuyoColor::Green,
        PuyoColor::Blue,
        PuyoColor::Orange,
        PuyoColor::Purple,
    ];

    /// Upper-case symbol used for locked cells.
    pub fn symbol(&self) -> char {
        match self {
            PuyoColor::Red => 'R',
            PuyoColor::Green => 'G',
            PuyoColor::Blue => 'B',
            PuyoColor::Orange => 'O',
            PuyoColor::Purple => 'P',
        }
    }

    /// Lower-case symbol used for the falling piece.
    pub fn symbol_lower(&self) -> char {
        match self {
            PuyoColor::Red => 'r',
            PuyoColor::Green => 'g',
            PuyoColor::Blue => 'b',
            PuyoColor::Orange => 'o',
            PuyoColor::Purple => 'p',
        }
    }

    /// Parse a color from its upper-case symbol.
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'R' => Some(PuyoColor::Red),
            'G' => Some(PuyoColor::Green),
            'B' => Some(PuyoColor::Blue),
            'O' => Some(PuyoColor::Orange),
            'P' => Some(PuyoColor::Purple),
            _ => None,
        }
    }
}

/// Orientation of the falling pair (Up = spawn orientation).
///
/// The orientation fixes where the satellite cell sits relative to the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Up,
    Right,
    Down,
    Left,
}

impl Orientation {
    /// Advance one rotation step: Up -> Right -> Down -> Left -> Up.
    pub fn rotated(&self) -> Self {
        match self {
            Orientation::Up => Orientation::Right,
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
        }
    }

    /// Satellite displacement from the pivot as (row, col) deltas.
    pub fn satellite_offset(&self) -> (i8, i8) {
        match self {
            Orientation::Up => (-1, 0),
            Orientation::Right => (0, 1),
            Orientation::Down => (1, 0),
            Orientation::Left => (0, -1),
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    HardDrop,
    Restart,
}

/// Cell on the grid (None = empty, Some = locked puyo)
pub type Cell = Option<PuyoColor>;

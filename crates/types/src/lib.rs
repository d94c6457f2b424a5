//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the engine and by whatever
//! presentation layer drives it. Everything here is plain data with no logic
//! beyond conversions.
//!
//! # Board Dimensions
//!
//! Canonical playfield:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn offset**: row -2 (above the grid), column `width / 2 - 1`
//!
//! Smaller or larger boards are allowed down to [`MIN_BOARD_WIDTH`] x
//! [`MIN_BOARD_HEIGHT`].
//!
//! # Coordinates
//!
//! A [`Coord`] is `(row, col)`. Rows grow downward and may be negative while a
//! freshly spawned piece is still above the visible grid.
//!
//! # Examples
//!
//! ```
//! use tetris_engine_types::{Cell, Intent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let cell = Cell::Occupied(kind);
//! assert!(cell.is_occupied());
//! assert_eq!(Cell::Empty.color_code(), 0);
//!
//! let intent = Intent::from_str("moveLeft").unwrap();
//! assert_eq!(intent, Intent::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Narrowest board on which every piece spawns inside the horizontal bounds
pub const MIN_BOARD_WIDTH: usize = 5;

/// Shortest supported board
pub const MIN_BOARD_HEIGHT: usize = 4;

/// Row offset applied to a template when it becomes the current piece
pub const SPAWN_ROW_OFFSET: i32 = -2;

/// A lock with any cell at or above this row ends the game
pub const LOCK_GAME_OVER_ROW: i32 = 1;

/// Points awarded per cleared line
pub const SCORE_PER_LINE: u32 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in generator order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Nonzero rendering code (1-7). Never used by game rules.
    pub fn color_code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }
}

/// Cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PieceKind),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// Rendering code: 0 for empty, otherwise the occupant's color code
    pub fn color_code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(kind) => kind.color_code(),
        }
    }
}

/// Grid coordinate (row grows downward, col grows rightward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Same coordinate shifted by the given delta
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Discrete requests from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::MoveLeft,
        Intent::MoveRight,
        Intent::SoftDrop,
        Intent::Rotate,
    ];

    /// Parse intent from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(Intent::MoveLeft),
            "moveright" | "right" => Some(Intent::MoveRight),
            "softdrop" | "down" => Some(Intent::SoftDrop),
            "rotate" | "up" => Some(Intent::Rotate),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
        }
    }
}

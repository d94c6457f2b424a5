//! Pieces module - tetromino templates and pivot rotation
//!
//! Each kind is a fixed 4-cell template anchored at row 0, column 0, plus an
//! optional pivot. Rotation is a 90° clockwise turn about the pivot:
//!
//! ```text
//! new_row = (col - pivot_col) + pivot_row
//! new_col = -(row - pivot_row) + pivot_col
//! ```
//!
//! The O piece has no pivot and never rotates. Nothing here knows about the
//! board; legality of a move or rotation is decided by the game manager.

use crate::types::{Coord, PieceKind};

/// The 4 occupied cells of a piece
pub type PieceCells = [Coord; 4];

const fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col)
}

/// Template cells for a kind, in spawn orientation
pub fn template_cells(kind: PieceKind) -> PieceCells {
    match kind {
        PieceKind::T => [c(0, 1), c(1, 0), c(1, 1), c(1, 2)],
        PieceKind::J => [c(0, 0), c(1, 0), c(1, 1), c(1, 2)],
        PieceKind::L => [c(0, 2), c(1, 0), c(1, 1), c(1, 2)],
        PieceKind::S => [c(0, 1), c(0, 2), c(1, 0), c(1, 1)],
        PieceKind::Z => [c(0, 0), c(0, 1), c(1, 1), c(1, 2)],
        PieceKind::I => [c(0, 0), c(0, 1), c(0, 2), c(0, 3)],
        PieceKind::O => [c(0, 0), c(0, 1), c(1, 0), c(1, 1)],
    }
}

/// Rotation center for a kind, relative to the template origin
pub fn template_pivot(kind: PieceKind) -> Option<Coord> {
    match kind {
        PieceKind::O => None,
        PieceKind::I => Some(c(0, 1)),
        PieceKind::T | PieceKind::J | PieceKind::L | PieceKind::S | PieceKind::Z => {
            Some(c(1, 1))
        }
    }
}

/// A tetromino with a fixed shape and a mutable position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    kind: PieceKind,
    cells: PieceCells,
    pivot: Option<Coord>,
}

impl Piece {
    /// Create a piece from its template, anchored at the origin
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            cells: template_cells(kind),
            pivot: template_pivot(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn cells(&self) -> &PieceCells {
        &self.cells
    }

    pub fn pivot(&self) -> Option<Coord> {
        self.pivot
    }

    /// Whether `coord` is one of this piece's cells
    pub fn occupies(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Shift every cell (and the pivot) by the given delta
    pub fn translate(&mut self, d_row: i32, d_col: i32) {
        for cell in &mut self.cells {
            *cell = cell.offset(d_row, d_col);
        }
        if let Some(pivot) = self.pivot.as_mut() {
            *pivot = pivot.offset(d_row, d_col);
        }
    }

    /// Cells this piece would occupy after the given shift
    pub fn cells_at(&self, d_row: i32, d_col: i32) -> PieceCells {
        self.cells.map(|cell| cell.offset(d_row, d_col))
    }

    /// Propose a clockwise rotation without applying it.
    ///
    /// Returns `None` for kinds without a pivot. The caller validates the
    /// proposal and commits it with [`Piece::set_cells`].
    pub fn rotate(&self) -> Option<PieceCells> {
        let pivot = self.pivot?;
        Some(self.cells.map(|cell| {
            Coord::new(
                (cell.col - pivot.col) + pivot.row,
                -(cell.row - pivot.row) + pivot.col,
            )
        }))
    }

    /// Commit a validated rotation proposal
    pub(crate) fn set_cells(&mut self, cells: PieceCells) {
        self.cells = cells;
    }

    /// Topmost row spanned by the piece
    pub fn top_row(&self) -> i32 {
        self.cells.iter().map(|cell| cell.row).min().unwrap_or(0)
    }
}

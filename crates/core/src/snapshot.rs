use crate::piece::{Piece, PieceCells};
use crate::types::{Coord, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Kind and cells of one piece, as a renderer needs them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub cells: PieceCells,
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            cells: *value.cells(),
        }
    }
}

/// Renderable view of the game after a step.
///
/// `board` is row-major color codes (0 = empty) and already contains the
/// visible cells of `current`. `next` is anchored at the template origin for
/// preview widgets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub board: Vec<u8>,
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
}

impl GameSnapshot {
    /// Color code at (row, col), or None outside the grid
    pub fn color_at(&self, coord: Coord) -> Option<u8> {
        if coord.row < 0 || coord.col < 0 {
            return None;
        }
        let (row, col) = (coord.row as usize, coord.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        self.board.get(row * self.width + col).copied()
    }

    /// Board as rows of color codes, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.board.chunks_exact(self.width.max(1))
    }

    pub fn clear(&mut self) {
        let empty = PieceSnapshot::from(&Piece::new(PieceKind::O));
        self.width = BOARD_WIDTH;
        self.height = BOARD_HEIGHT;
        self.board.clear();
        self.board.resize(BOARD_WIDTH * BOARD_HEIGHT, 0);
        self.current = empty;
        self.next = empty;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            current: PieceSnapshot::from(&Piece::new(PieceKind::O)),
            next: PieceSnapshot::from(&Piece::new(PieceKind::O)),
        };
        s.clear();
        s
    }
}

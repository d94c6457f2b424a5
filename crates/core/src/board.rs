//! Board module - manages the game grid
//!
//! The board is a `width` x `height` grid (canonically 10x20) where each cell is
//! empty or occupied by a piece kind. Storage is a flat row-major buffer that is
//! allocated once and never resized.
//! Coordinates: (row, col) where row ranges 0..height (top to bottom) and col
//! ranges 0..width (left to right).

use crate::types::{Cell, Coord, BOARD_HEIGHT, BOARD_WIDTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 10x20 board
    pub fn new() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: vec![Cell::Empty; BOARD_WIDTH * BOARD_HEIGHT],
        }
    }

    /// Create an empty board of the given size.
    /// Returns None below the minimum supported dimensions.
    pub fn with_size(width: usize, height: usize) -> Option<Self> {
        if width < MIN_BOARD_WIDTH || height < MIN_BOARD_HEIGHT {
            return None;
        }
        Some(Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Build a board from rows of cells (top row first)
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let mut board = Self::with_size(width, height)?;
        board.cells = rows.into_iter().flatten().collect();
        Some(board)
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some(coord.row as usize * self.width + coord.col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a coordinate lies inside the grid
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.height
            && (coord.col as usize) < self.width
    }

    /// Check if a column lies inside the horizontal bounds
    pub fn col_in_bounds(&self, col: i32) -> bool {
        col >= 0 && (col as usize) < self.width
    }

    /// Get cell at a coordinate.
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Set cell at a coordinate.
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a coordinate is inside the grid and filled
    pub fn is_occupied(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Occupied(_)))
    }

    /// Cells of one row. Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.height, "row {row} outside board");
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        self.row(row).iter().all(Cell::is_occupied)
    }

    /// Check if any cell of the top row is filled
    pub fn is_top_row_occupied(&self) -> bool {
        self.row(0).iter().any(Cell::is_occupied)
    }

    /// Remove every full row, compacting the rest downward.
    ///
    /// Builds a fresh buffer bottom-up, skipping full rows, so the relative
    /// order of surviving rows is preserved and vacated top rows are empty.
    /// Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width;
        let mut rebuilt = vec![Cell::Empty; self.cells.len()];
        let mut write_row = self.height;
        let mut cleared = 0;

        for read_row in (0..self.height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            let src = read_row * width;
            let dst = write_row * width;
            rebuilt[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }

        if cleared > 0 {
            self.cells = rebuilt;
        }
        cleared
    }

    /// Number of filled cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write row-major color codes into `out` (0 = empty), reusing its buffer
    pub fn write_color_codes(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(Cell::color_code));
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Convert to 2D vector for testing/display
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

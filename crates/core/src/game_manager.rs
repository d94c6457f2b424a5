//! Game manager module - rules for motion, locking, line clears and game over
//!
//! The manager owns the board, the current and next piece, the 7 templates and
//! the piece generator. The current piece is painted onto the board (cells with
//! row >= 0) and is excluded from its own collision checks. When a downward
//! move is blocked the painted cells simply stay on the board: that is the lock.
//!
//! Every user-facing operation is total. An illegal move or rotation leaves the
//! board and the piece untouched and reports `false`.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::board::Board;
use crate::piece::{Piece, PieceCells};
use crate::rng::PieceGenerator;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Coord, Intent, PieceKind, LOCK_GAME_OVER_ROW, SPAWN_ROW_OFFSET};

/// Result of a single step, reported to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepOutcome {
    /// The current piece was committed to the board and a new one spawned
    pub locked: bool,
    /// Rows removed after the lock
    pub lines_cleared: u32,
    /// The lock ended the game
    pub game_over: bool,
}

/// Cells of `cells` that lead in the direction `(d_row, d_col)`: for each lane
/// perpendicular to travel, the cell furthest ahead.
fn leading_edge(cells: &PieceCells, d_row: i32, d_col: i32) -> ArrayVec<Coord, 4> {
    let progress = |c: &Coord| c.row * d_row + c.col * d_col;
    let same_lane = |a: &Coord, b: &Coord| {
        if d_col != 0 {
            a.row == b.row
        } else {
            a.col == b.col
        }
    };

    let mut edge = ArrayVec::new();
    for cell in cells {
        let shadowed = cells
            .iter()
            .any(|other| same_lane(cell, other) && progress(other) > progress(cell));
        if !shadowed {
            edge.push(*cell);
        }
    }
    edge
}

/// Board plus active/next piece and all movement rules
#[derive(Debug, Clone)]
pub struct GameManager {
    board: Board,
    current: Piece,
    next: Piece,
    templates: [Piece; 7],
    generator: PieceGenerator,
    /// Set by a terminal lock; further steps are ignored
    finished: bool,
}

impl GameManager {
    /// New game on an empty 10x20 board with a uniform generator
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(), PieceGenerator::uniform(seed))
    }

    /// New game on the given board; the first piece is spawned immediately
    pub fn with_board(board: Board, mut generator: PieceGenerator) -> Self {
        let templates = PieceKind::ALL.map(Piece::new);
        let first = templates[generator.draw().index()];

        let mut manager = Self {
            board,
            current: first,
            next: first,
            templates,
            generator,
            finished: false,
        };
        manager.spawn_next();
        manager
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    /// Column offset applied to a template at spawn
    fn spawn_col(&self) -> i32 {
        (self.board.width() / 2) as i32 - 1
    }

    /// Promote the next piece to current and draw a new next piece.
    ///
    /// The previous current piece is not erased: whatever it painted stays on
    /// the board. Caller checks game over separately.
    pub fn spawn_next(&mut self) {
        let mut piece = self.next;
        piece.translate(SPAWN_ROW_OFFSET, self.spawn_col());
        self.current = piece;
        self.next = self.templates[self.generator.draw().index()];
        self.paint_current();

        debug!(
            kind = self.current.kind().as_str(),
            next = self.next.kind().as_str(),
            "spawned piece"
        );
    }

    /// Swap in an arbitrary piece as the current one. No validation.
    pub fn replace_current(&mut self, piece: Piece) {
        self.erase_current();
        self.current = piece;
        self.paint_current();
    }

    fn write_current(&mut self, cell: Cell) {
        for &coord in self.current.cells() {
            if coord.row >= 0 {
                let written = self.board.set(coord, cell);
                debug_assert!(written, "piece cell {coord:?} outside the board");
            }
        }
    }

    fn paint_current(&mut self) {
        self.write_current(Cell::Occupied(self.current.kind()));
    }

    fn erase_current(&mut self) {
        self.write_current(Cell::Empty);
    }

    /// Whether every leading-edge cell can advance by the delta
    fn can_shift(&self, d_row: i32, d_col: i32) -> bool {
        let height = self.board.height() as i32;
        leading_edge(self.current.cells(), d_row, d_col)
            .iter()
            .all(|cell| {
                let target = cell.offset(d_row, d_col);
                self.board.col_in_bounds(target.col)
                    && target.row < height
                    && !self.board.is_occupied(target)
            })
    }

    fn shift(&mut self, d_row: i32, d_col: i32) {
        self.erase_current();
        self.current.translate(d_row, d_col);
        self.paint_current();
    }

    fn try_shift_sideways(&mut self, d_col: i32) -> bool {
        if !self.can_shift(0, d_col) {
            trace!(d_col, "sideways move rejected");
            return false;
        }
        self.shift(0, d_col);
        true
    }

    /// Move one column left. Returns whether the piece moved.
    pub fn move_left(&mut self) -> bool {
        self.try_shift_sideways(-1)
    }

    /// Move one column right. Returns whether the piece moved.
    pub fn move_right(&mut self) -> bool {
        self.try_shift_sideways(1)
    }

    /// Move one row down.
    ///
    /// Returns `true` when the piece could not descend and was locked (a new
    /// piece has been spawned), `false` while it is still falling.
    pub fn move_down(&mut self) -> bool {
        if self.can_shift(1, 0) {
            self.shift(1, 0);
            return false;
        }

        debug!(
            kind = self.current.kind().as_str(),
            top_row = self.current.top_row(),
            "piece locked"
        );
        self.spawn_next();
        true
    }

    fn rotation_target_free(&self, cell: Coord) -> bool {
        if !self.board.col_in_bounds(cell.col) || cell.row >= self.board.height() as i32 {
            return false;
        }
        !self.board.is_occupied(cell) || self.current.occupies(cell)
    }

    /// Rotate 90° clockwise about the pivot, all or nothing.
    /// Returns whether the rotation was applied; always `false` for O.
    pub fn rotate(&mut self) -> bool {
        let Some(proposal) = self.current.rotate() else {
            return false;
        };

        if !proposal.iter().all(|&cell| self.rotation_target_free(cell)) {
            trace!(kind = self.current.kind().as_str(), "rotation rejected");
            return false;
        }

        self.erase_current();
        self.current.set_cells(proposal);
        self.paint_current();
        true
    }

    /// Remove full rows and compact the rest. Returns the number removed.
    ///
    /// The current piece is lifted off the board first, so a falling piece
    /// never completes a row, and is repainted at its unchanged position.
    pub fn clear_filled_lines(&mut self) -> usize {
        self.erase_current();
        let cleared = self.board.clear_full_rows();
        self.paint_current();
        if cleared > 0 {
            debug!(cleared, "lines cleared");
        }
        cleared
    }

    /// True iff a locked cell occupies the top row. Cells of the falling
    /// piece do not count.
    pub fn is_game_over(&self) -> bool {
        self.board
            .row(0)
            .iter()
            .zip(0..)
            .any(|(cell, col)| cell.is_occupied() && !self.current.occupies(Coord::new(0, col)))
    }

    /// True once a lock has ended the game
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Apply one intent and report what happened
    ///
    /// Once the game is finished every intent is ignored and reported as
    /// `game_over`.
    pub fn step(&mut self, intent: Intent) -> StepOutcome {
        if self.finished {
            return StepOutcome {
                game_over: true,
                ..StepOutcome::default()
            };
        }

        match intent {
            Intent::MoveLeft => {
                self.move_left();
                StepOutcome::default()
            }
            Intent::MoveRight => {
                self.move_right();
                StepOutcome::default()
            }
            Intent::Rotate => {
                self.rotate();
                StepOutcome::default()
            }
            Intent::SoftDrop => self.drop_one_row(),
        }
    }

    /// Gravity tick: same as a soft drop of one row
    pub fn tick(&mut self) -> StepOutcome {
        self.step(Intent::SoftDrop)
    }

    fn drop_one_row(&mut self) -> StepOutcome {
        let falling = self.current;
        if !self.move_down() {
            return StepOutcome::default();
        }

        let lines_cleared = self.clear_filled_lines() as u32;
        // Two independent checks: the lock position itself, then the top row.
        let locked_too_high = falling.top_row() <= LOCK_GAME_OVER_ROW;
        let game_over = locked_too_high || self.is_game_over();
        if game_over {
            self.finished = true;
            debug!(
                kind = falling.kind().as_str(),
                top_row = falling.top_row(),
                "game over"
            );
        }

        StepOutcome {
            locked: true,
            lines_cleared,
            game_over,
        }
    }

    /// Fill `out` with the renderable state, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_color_codes(&mut out.board);
        out.current = (&self.current).into();
        out.next = (&self.next).into();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new(1)
    }
}

//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block puzzle: the grid, the
//! pieces, collision detection, movement, rotation, line clears and game-over
//! detection. It has no notion of time, input devices or rendering; a
//! presentation layer feeds it intents and gravity ticks and reads back a
//! [`GameSnapshot`] after each mutation.
//!
//! - **Deterministic**: a seed fully determines the piece sequence
//! - **Total**: illegal moves are silently rejected, never reported as errors
//! - **Small**: the hot paths touch at most 4 cells and do not allocate
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with row queries and line compaction
//! - [`piece`]: tetromino templates, pivots and the rotation proposal
//! - [`rng`]: seedable uniform piece generation (with repetition)
//! - [`game_manager`]: movement, rotation, locking, clearing, game over
//! - [`snapshot`]: renderable view of the board, current and next piece
//!
//! # Game Rules
//!
//! - Pieces spawn two rows above the grid, horizontally centered
//! - Rotation is a 90° clockwise turn about a per-kind pivot; O never rotates
//! - A blocked downward move locks the piece where it stands
//! - Full rows are removed and everything above drops down
//! - A lock touching row 0 or 1, or any filled cell in row 0, ends the game
//!
//! # Example
//!
//! ```
//! use tetris_engine_core::GameManager;
//! use tetris_engine_types::Intent;
//!
//! let mut game = GameManager::new(12345);
//! game.step(Intent::MoveLeft);
//! game.step(Intent::Rotate);
//!
//! // Let gravity take the first piece to the floor.
//! let mut outcome = game.tick();
//! while !outcome.locked {
//!     outcome = game.tick();
//! }
//! assert!(!outcome.game_over);
//! assert_eq!(outcome.lines_cleared, 0);
//! ```

pub mod board;
pub mod game_manager;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use tetris_engine_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_manager::{GameManager, StepOutcome};
pub use piece::{Piece, PieceCells};
pub use rng::{PieceGenerator, SimpleRng};
pub use snapshot::{GameSnapshot, PieceSnapshot};

//! Session configuration
//!
//! Values come from the environment, falling back to defaults when a variable
//! is missing or unparseable:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_SEED` | 1 | Piece generator seed |
//! | `TETRIS_BOARD_WIDTH` | 10 | Columns |
//! | `TETRIS_BOARD_HEIGHT` | 20 | Rows |
//! | `TETRIS_MAX_STEPS` | 10000 | Step limit for the headless runner |
//! | `TETRIS_LOG_LEVEL` | info | `off`, `error`, `warn`, `info`, `debug`, `trace` |

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use tracing::level_filters::LevelFilter;

use crate::core::Board;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH};

pub const ENV_SEED: &str = "TETRIS_SEED";
pub const ENV_BOARD_WIDTH: &str = "TETRIS_BOARD_WIDTH";
pub const ENV_BOARD_HEIGHT: &str = "TETRIS_BOARD_HEIGHT";
pub const ENV_MAX_STEPS: &str = "TETRIS_MAX_STEPS";
pub const ENV_LOG_LEVEL: &str = "TETRIS_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    pub board_width: usize,
    pub board_height: usize,
    pub max_steps: u32,
    pub log_level: LevelFilter,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            max_steps: 10_000,
            log_level: LevelFilter::INFO,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, test maps, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: FromStr>(value: Option<String>) -> Option<T> {
            value.and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            seed: parsed(lookup(ENV_SEED)).unwrap_or(defaults.seed),
            board_width: parsed(lookup(ENV_BOARD_WIDTH)).unwrap_or(defaults.board_width),
            board_height: parsed(lookup(ENV_BOARD_HEIGHT)).unwrap_or(defaults.board_height),
            max_steps: parsed(lookup(ENV_MAX_STEPS)).unwrap_or(defaults.max_steps),
            log_level: parsed(lookup(ENV_LOG_LEVEL)).unwrap_or(defaults.log_level),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.board_width < MIN_BOARD_WIDTH {
            bail!(
                "board width {} is below the minimum of {}",
                self.board_width,
                MIN_BOARD_WIDTH
            );
        }
        if self.board_height < MIN_BOARD_HEIGHT {
            bail!(
                "board height {} is below the minimum of {}",
                self.board_height,
                MIN_BOARD_HEIGHT
            );
        }
        if self.max_steps == 0 {
            bail!("max steps must be positive");
        }
        Ok(())
    }

    /// Empty board with the configured dimensions
    pub fn board(&self) -> Result<Board> {
        Board::with_size(self.board_width, self.board_height).with_context(|| {
            format!(
                "cannot build a {}x{} board",
                self.board_width, self.board_height
            )
        })
    }
}

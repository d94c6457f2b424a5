//! Session - score and lifecycle bookkeeping around one game
//!
//! The engine itself keeps no score. A session adds what a presentation layer
//! needs on top: 100 points per cleared line, running counters, a game-over
//! latch and restart.

use anyhow::Result;
use tracing::info;

use crate::config::SessionConfig;
use crate::core::{GameManager, GameSnapshot, PieceGenerator, StepOutcome};
use crate::types::{Intent, SCORE_PER_LINE};

/// End-of-run report
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionSummary {
    pub seed: u32,
    pub episode: u32,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub steps: u32,
    pub game_over: bool,
    pub snapshot: GameSnapshot,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    manager: GameManager,
    /// Increments on restart
    episode: u32,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    steps: u32,
    game_over: bool,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let manager = Self::build_manager(&config, 0)?;
        Ok(Self::with_manager(config, manager))
    }

    /// Wrap an already-built manager (scripted piece sequences, puzzles)
    pub fn with_manager(config: SessionConfig, manager: GameManager) -> Self {
        Self {
            config,
            manager,
            episode: 0,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            steps: 0,
            game_over: false,
        }
    }

    fn build_manager(config: &SessionConfig, episode: u32) -> Result<GameManager> {
        config.validate()?;
        let seed = config.seed.wrapping_add(episode);
        Ok(GameManager::with_board(
            config.board()?,
            PieceGenerator::uniform(seed),
        ))
    }

    /// Apply one intent. After game over every intent is ignored.
    pub fn apply(&mut self, intent: Intent) -> StepOutcome {
        if self.game_over {
            return StepOutcome {
                game_over: true,
                ..StepOutcome::default()
            };
        }

        let outcome = self.manager.step(intent);
        self.steps += 1;

        if outcome.locked {
            self.pieces_locked += 1;
            self.lines += outcome.lines_cleared;
            self.score += outcome.lines_cleared * SCORE_PER_LINE;
        }

        if outcome.game_over {
            self.game_over = true;
            info!(
                episode = self.episode,
                score = self.score,
                lines = self.lines,
                pieces = self.pieces_locked,
                "game over"
            );
        }

        outcome
    }

    /// Gravity tick
    pub fn tick(&mut self) -> StepOutcome {
        self.apply(Intent::SoftDrop)
    }

    /// Start a fresh game with the same configuration
    pub fn restart(&mut self) -> Result<()> {
        let episode = self.episode.wrapping_add(1);
        self.manager = Self::build_manager(&self.config, episode)?;
        self.episode = episode;
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.steps = 0;
        self.game_over = false;
        info!(episode, "session restarted");
        Ok(())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn manager(&self) -> &GameManager {
        &self.manager
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.manager.snapshot()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.config.seed,
            episode: self.episode,
            score: self.score,
            lines: self.lines,
            pieces_locked: self.pieces_locked,
            steps: self.steps,
            game_over: self.game_over,
            snapshot: self.snapshot(),
        }
    }
}

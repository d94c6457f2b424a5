//! Headless runner (default binary).
//!
//! Plays a seeded random policy against a [`Session`] until the game ends or
//! the step limit is reached, then prints the final summary as one JSON line.
//! Logs go to stderr; configuration comes from `TETRIS_*` environment
//! variables (see `tetris_engine::config`).

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::prelude::*;

use tetris_engine::core::SimpleRng;
use tetris_engine::types::Intent;
use tetris_engine::{Session, SessionConfig};

/// Mixed into the seed so the policy does not mirror the piece generator
const POLICY_SALT: u32 = 0x9e37_79b9;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(config.log_level)
        .init();
    info!(
        seed = config.seed,
        width = config.board_width,
        height = config.board_height,
        max_steps = config.max_steps,
        "starting headless session"
    );

    let mut session = Session::new(config.clone()).context("invalid session configuration")?;
    let mut policy = SimpleRng::new(config.seed ^ POLICY_SALT);

    while !session.game_over() && session.steps() < config.max_steps {
        let intent = Intent::ALL[policy.next_range(Intent::ALL.len() as u32) as usize];
        let outcome = session.apply(intent);
        if outcome.lines_cleared > 0 {
            debug!(
                lines = outcome.lines_cleared,
                score = session.score(),
                "cleared lines"
            );
        }
    }

    let summary = session.summary();
    info!(
        score = summary.score,
        lines = summary.lines,
        pieces = summary.pieces_locked,
        steps = summary.steps,
        game_over = summary.game_over,
        "session finished"
    );

    let json = serde_json::to_string(&summary).context("failed to encode summary")?;
    println!("{json}");
    Ok(())
}

//! Falling-block puzzle engine (workspace facade crate).
//!
//! The rules live in `crates/core` and the shared data types in `crates/types`;
//! this package re-exports them as `tetris_engine::{core, types}` and adds the
//! session bookkeeping and configuration used by the headless runner.

pub use tetris_engine_core as core;
pub use tetris_engine_types as types;

pub mod config;
pub mod session;

pub use config::SessionConfig;
pub use session::{Session, SessionSummary};

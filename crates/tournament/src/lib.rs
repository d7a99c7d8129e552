//! Tournament Runner for Othello engines
//!
//! This crate provides infrastructure for:
//! - Running series of games between two engines
//! - Writing per-game logs (a readable record and a result stream)
//! - Saving results and generating reports
//!
//! # Usage
//!
//! ```bash
//! # Minimax as Black against random as White, 100 games
//! cargo run -p tournament -- match minimax random --games 100
//!
//! # Print a saved results file
//! cargo run -p tournament -- report results.json
//! ```

mod config;
mod error;
mod game_log;
mod match_runner;
mod results;

pub use config::*;
pub use error::TournamentError;
pub use game_log::GameLogger;
pub use match_runner::*;
pub use results::*;

use minimax_engine::{MinimaxEngine, SearchConfig};
use othello_core::Engine;
use random_engine::RandomEngine;

/// Build an engine from its command-line name.
///
/// `minimax` uses `search`; `random` takes an optional seed as `random:<seed>`.
pub fn create_engine(spec: &str, search: &SearchConfig) -> Result<Box<dyn Engine>, TournamentError> {
    let (name, arg) = match spec.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (spec, None),
    };
    match (name.to_lowercase().as_str(), arg) {
        ("minimax" | "bot", None) => Ok(Box::new(MinimaxEngine::with_config(*search))),
        ("random" | "rnd", None) => Ok(Box::new(RandomEngine::new())),
        ("random" | "rnd", Some(seed)) => match seed.parse() {
            Ok(seed) => Ok(Box::new(RandomEngine::with_seed(seed))),
            Err(_) => Err(TournamentError::UnknownEngine(spec.to_string())),
        },
        _ => Err(TournamentError::UnknownEngine(spec.to_string())),
    }
}

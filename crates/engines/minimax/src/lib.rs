//! Minimax Othello Engine
//!
//! Depth and time bounded minimax with a parent-supplied cutoff bound and
//! a two-phase leaf evaluation:
//! - while a corner is still empty, weighted corner regions
//! - afterwards, or close to the end, the raw disk count
//!
//! Finished games always score as a win, a loss or a (pessimistic) tie.

pub mod config;
pub mod eval;
pub mod search;

use std::time::Instant;

use othello_core::{legal_moves, Engine, Move, Position, SearchLimits, SearchResult, Side};
use tracing::debug;

pub use config::SearchConfig;
pub use eval::{evaluate, EvalMode, LOSS_SCORE, TIE_SCORE, WIN_SCORE};
pub use search::{pick_best_move, SearchOutcome};

/// Othello engine running the bounded minimax search.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
    /// Node counter of the last search
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Convenience wrapper returning only the chosen move.
    pub fn choose_move(&mut self, pos: &Position, side: Side, limits: SearchLimits) -> Option<Move> {
        self.search(pos, side, limits).best_move
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, side: Side, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        let moves = legal_moves(pos, side);
        match moves.as_slice() {
            [] => return SearchResult::no_move(),
            // Nothing to compare: play it without searching.
            [only] => return SearchResult::immediate(*only),
            _ => {}
        }

        let start = Instant::now();
        let mut tc = limits.time_control();
        tc.start();

        let outcome = pick_best_move(pos, side, &self.config, &mut tc);
        self.nodes = outcome.nodes;
        let elapsed = start.elapsed();

        let phase = EvalMode::for_leaf(outcome.opening_phase, pos.empty_count(), self.config.endgame_empties);
        debug!(
            %side,
            phase = phase.label(),
            depth = outcome.max_depth,
            nodes = outcome.nodes,
            score = outcome.score,
            stopped = outcome.stopped,
            elapsed_ms = elapsed.as_millis() as u64,
            "search finished"
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: outcome.max_depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
            elapsed,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        self.config.set(name, value)
    }
}

//! Random Move Othello Engine
//!
//! Picks uniformly among the legal moves. It is the default opponent of a
//! match series: any real engine should beat it almost every game.

use othello_core::{legal_moves_into, Engine, Position, SearchLimits, SearchResult, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// An Othello engine that plays random legal moves.
///
/// Unseeded engines are seeded from OS entropy. A seeded engine replays the
/// same choices for the same sequence of positions.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, side: Side, _limits: SearchLimits) -> SearchResult {
        let mut moves = Vec::with_capacity(32);
        legal_moves_into(pos, side, &mut moves);

        match moves.choose(&mut self.rng).copied() {
            Some(mv) => SearchResult::immediate(mv),
            None => SearchResult::no_move(),
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}

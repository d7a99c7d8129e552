pub mod bitboard;
pub mod board;
pub mod error;
pub mod movegen;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use bitboard::*;
pub use board::*;
pub use error::BoardError;
pub use movegen::*;
pub use time_control::*;
pub use types::*;

use std::time::Duration;

// =============================================================================
// Board interface used by searches
// =============================================================================

/// The board operations a search needs, and nothing more.
///
/// `Position` is the real implementation; tests plug in synthetic game
/// trees through the same interface.
pub trait GameBoard: Sized {
    /// Legal moves for `side` in a fixed, deterministic order. Empty when
    /// the side has no move.
    fn legal_moves(&self, side: Side) -> Vec<Move>;

    /// The board after `side` plays `mv`, which must come from
    /// `legal_moves(side)`. Never mutates `self`.
    fn apply_move(&self, mv: Move, side: Side) -> Self;

    fn disk_count(&self, side: Side) -> u32;

    fn empty_count(&self) -> u32;

    fn cell(&self, mv: Move) -> Option<Side>;
}

impl GameBoard for Position {
    fn legal_moves(&self, side: Side) -> Vec<Move> {
        movegen::legal_moves(self, side)
    }

    fn apply_move(&self, mv: Move, side: Side) -> Self {
        let mut next = *self;
        next.place_unchecked(mv, side);
        next
    }

    fn disk_count(&self, side: Side) -> u32 {
        Position::disk_count(self, side)
    }

    fn empty_count(&self) -> u32 {
        Position::empty_count(self)
    }

    fn cell(&self, mv: Move) -> Option<Side> {
        Position::cell(self, mv)
    }
}

// =============================================================================
// Engine trait — implemented by every move selector (minimax, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if the side to move has no legal move)
    pub best_move: Option<Move>,
    /// Backed-up value of the root from the mover's perspective
    pub score: i32,
    /// Depth limit used by this search
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
    /// Whether the time budget truncated sibling expansion somewhere
    pub stopped: bool,
    /// Wall time spent
    pub elapsed: Duration,
}

impl SearchResult {
    /// Result for a side that has nothing to play.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Result for a move picked without searching.
    pub fn immediate(mv: Move) -> Self {
        Self {
            best_move: Some(mv),
            score: 0,
            depth: 1,
            nodes: 1,
            stopped: false,
            elapsed: Duration::ZERO,
        }
    }
}

/// Trait that all Othello engines implement.
///
/// Engines are `Send` so independent games can run on separate threads;
/// a search never shares mutable state with another search.
pub trait Engine: Send {
    /// Choose a move for `side` on `pos` within `limits`.
    ///
    /// Returns `best_move: None` only when `side` has no legal move.
    fn search(&mut self, pos: &Position, side: Side, limits: SearchLimits) -> SearchResult;

    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "othello-lab"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}

    /// Optional: set a named option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}

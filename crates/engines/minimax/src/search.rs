//! Depth and time bounded minimax with a parent-supplied cutoff bound.
//!
//! Every node is a plain recursive call that returns its backed-up value
//! (and, at the root, the move that produced it). Nothing outlives the
//! call that built it.
//!
//! Cutoff rule: each node receives the best value its earlier siblings
//! already achieved. A min node stops widening as soon as one child drops
//! below that bound, because its parent (a max node) would never prefer it;
//! a max node stops as soon as one child rises above it.

use othello_core::{GameBoard, Move, Side, TimeControl};
use tracing::debug;

use crate::config::SearchConfig;
use crate::eval::{evaluate, EvalMode, LOSS_SCORE, WIN_SCORE};

/// Result of `pick_best_move`.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best root move, if the root was expanded
    pub best_move: Option<Move>,
    /// Backed-up root value from the root side's perspective
    pub score: i32,
    /// Nodes visited, root included
    pub nodes: u64,
    /// True if the time budget truncated sibling expansion somewhere
    pub stopped: bool,
    /// Whether leaves were scored positionally (an empty corner at the root)
    pub opening_phase: bool,
    /// Depth limit applied to this search
    pub max_depth: u8,
}

/// Value of one searched node, plus the chosen move at the root.
#[derive(Debug, Clone, Copy)]
struct Node {
    value: i32,
    best_move: Option<Move>,
}

/// Per-search state that stays fixed while the tree is walked.
struct Searcher<'a> {
    root_side: Side,
    opening_phase: bool,
    max_depth: u8,
    endgame_empties: u32,
    nodes: u64,
    tc: &'a mut TimeControl,
}

/// True while any true corner is still empty.
pub fn corners_empty<B: GameBoard>(board: &B) -> bool {
    othello_core::CORNERS.iter().any(|&c| board.cell(c).is_none())
}

/// Searches `board` for `side` and returns the best root move with its value.
///
/// `tc` should already be started; its budget is checked before every
/// sibling expansion except the first one at each node.
pub fn pick_best_move<B: GameBoard>(
    board: &B,
    side: Side,
    config: &SearchConfig,
    tc: &mut TimeControl,
) -> SearchOutcome {
    let opening_phase = corners_empty(board);
    let max_depth = config.depth_for(board.empty_count());

    let mut searcher = Searcher {
        root_side: side,
        opening_phase,
        max_depth,
        endgame_empties: config.endgame_empties,
        nodes: 0,
        tc,
    };
    let root = searcher.search(board, side, 1, WIN_SCORE);

    SearchOutcome {
        best_move: root.best_move,
        score: root.value,
        nodes: searcher.nodes,
        stopped: searcher.tc.is_expired(),
        opening_phase,
        max_depth,
    }
}

impl Searcher<'_> {
    /// Value of `board` with `to_move` about to play, at search level `depth`.
    ///
    /// `bound` is the best value already established among the earlier
    /// siblings of this node.
    fn search<B: GameBoard>(&mut self, board: &B, to_move: Side, depth: u8, bound: i32) -> Node {
        self.nodes += 1;
        let maximizing = to_move == self.root_side;

        let children = if depth < self.max_depth {
            self.expand(board, to_move, depth, bound, maximizing)
        } else {
            Vec::new()
        };

        if children.is_empty() {
            return Node {
                value: self.score_leaf(board),
                best_move: None,
            };
        }

        let (mv, value) = if maximizing {
            first_extreme(&children, |candidate, best| candidate > best)
        } else {
            first_extreme(&children, |candidate, best| candidate < best)
        };

        Node {
            value,
            best_move: (maximizing && depth == 1).then_some(mv),
        }
    }

    /// Searches children in board order, returning `(move, value)` for each
    /// child that was actually generated.
    fn expand<B: GameBoard>(
        &mut self,
        board: &B,
        to_move: Side,
        depth: u8,
        bound: i32,
        maximizing: bool,
    ) -> Vec<(Move, i32)> {
        let moves = board.legal_moves(to_move);
        let mut children = Vec::with_capacity(moves.len());
        let mut sibling_best = if maximizing { LOSS_SCORE } else { WIN_SCORE };

        for mv in moves {
            if !children.is_empty() && self.out_of_time(depth) {
                break;
            }

            let next = board.apply_move(mv, to_move);
            let child = self.search(&next, to_move.opponent(), depth + 1, sibling_best);
            children.push((mv, child.value));

            sibling_best = if maximizing {
                sibling_best.max(child.value)
            } else {
                sibling_best.min(child.value)
            };

            let cutoff = if maximizing {
                child.value > bound
            } else {
                child.value < bound
            };
            if cutoff {
                break;
            }
        }
        children
    }

    fn out_of_time(&mut self, depth: u8) -> bool {
        let was_expired = self.tc.is_expired();
        let expired = self.tc.check_time();
        if expired && !was_expired {
            debug!(
                depth,
                elapsed_ms = self.tc.elapsed().as_millis() as u64,
                "time budget spent, truncating sibling expansion"
            );
        }
        expired
    }

    fn score_leaf<B: GameBoard>(&self, board: &B) -> i32 {
        let mode = EvalMode::for_leaf(self.opening_phase, board.empty_count(), self.endgame_empties);
        evaluate(board, self.root_side, mode)
    }
}

/// First entry whose value beats every earlier one under `better`.
///
/// Later entries that only tie never replace the current pick.
fn first_extreme(children: &[(Move, i32)], better: impl Fn(i32, i32) -> bool) -> (Move, i32) {
    let mut best = children[0];
    for &child in &children[1..] {
        if better(child.1, best.1) {
            best = child;
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

//! Leaf evaluation: terminal outcome first, then either a corner-aware
//! positional score or a plain disk count.

use othello_core::{GameBoard, Move, Side};

/// Score of a finished game won by the perspective side.
pub const WIN_SCORE: i32 = 5000;
/// Score of a finished game lost by the perspective side.
pub const LOSS_SCORE: i32 = -5000;
/// Score of a finished game with equal disk counts. Draws are treated as
/// nearly as bad as a loss, not as neutral.
pub const TIE_SCORE: i32 = -2000;

pub const CORNER_WEIGHT: i32 = 25;
pub const CORNER_ADJACENT_WEIGHT: i32 = 15;
pub const NEAR_EDGE_WEIGHT: i32 = 7;

/// The four true corners.
pub const CORNER_CELLS: [(u8, u8); 4] = [(0, 7), (7, 0), (0, 0), (7, 7)];

/// Cells touching a corner. Holding one tends to hand the corner over.
#[rustfmt::skip]
pub const CORNER_ADJACENT_CELLS: [(u8, u8); 12] = [
    (0, 1), (1, 0), (1, 1),
    (0, 6), (1, 6), (1, 7),
    (6, 0), (6, 1), (7, 1),
    (6, 6), (6, 7), (7, 6),
];

/// The ring one step further out from each corner.
#[rustfmt::skip]
pub const NEAR_EDGE_CELLS: [(u8, u8); 20] = [
    (0, 2), (1, 2), (2, 2), (2, 1), (2, 0),
    (0, 5), (1, 5), (2, 5), (2, 6), (2, 7),
    (5, 0), (5, 1), (5, 2), (6, 2), (7, 2),
    (5, 5), (5, 6), (5, 7), (6, 5), (7, 5),
];

/// Which heuristic scores a non-terminal leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalMode {
    /// Opening and midgame: weighted corner regions.
    Positional,
    /// Endgame: raw disk count.
    Count,
}

impl EvalMode {
    /// Positional while the search started with an empty corner and this
    /// leaf still has more than `endgame_empties` free cells.
    pub fn for_leaf(opening_phase: bool, empties: u32, endgame_empties: u32) -> Self {
        if opening_phase && empties > endgame_empties {
            EvalMode::Positional
        } else {
            EvalMode::Count
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EvalMode::Positional => "corner search",
            EvalMode::Count => "endgame",
        }
    }
}

/// Scores `board` for `perspective`.
///
/// A finished game always scores as win, loss or tie; otherwise `mode`
/// decides the heuristic.
pub fn evaluate<B: GameBoard>(board: &B, perspective: Side, mode: EvalMode) -> i32 {
    if let Some(score) = terminal_score(board, perspective) {
        return score;
    }
    match mode {
        EvalMode::Positional => positional_score(board, perspective),
        EvalMode::Count => board.disk_count(perspective) as i32,
    }
}

/// Outcome score once neither side can move, `None` while the game goes on.
pub fn terminal_score<B: GameBoard>(board: &B, perspective: Side) -> Option<i32> {
    if !board.legal_moves(Side::Black).is_empty() || !board.legal_moves(Side::White).is_empty() {
        return None;
    }
    let own = board.disk_count(perspective);
    let opp = board.disk_count(perspective.opponent());
    Some(match own.cmp(&opp) {
        std::cmp::Ordering::Greater => WIN_SCORE,
        std::cmp::Ordering::Less => LOSS_SCORE,
        std::cmp::Ordering::Equal => TIE_SCORE,
    })
}

pub fn positional_score<B: GameBoard>(board: &B, perspective: Side) -> i32 {
    corner_term(board, perspective)
        + corner_adjacent_term(board, perspective)
        + near_edge_term(board, perspective)
}

pub fn corner_term<B: GameBoard>(board: &B, perspective: Side) -> i32 {
    ownership_score(board, &CORNER_CELLS, CORNER_WEIGHT, perspective)
}

/// Counted for the opponent: our disks next to a corner cost points.
pub fn corner_adjacent_term<B: GameBoard>(board: &B, perspective: Side) -> i32 {
    ownership_score(
        board,
        &CORNER_ADJACENT_CELLS,
        CORNER_ADJACENT_WEIGHT,
        perspective.opponent(),
    )
}

pub fn near_edge_term<B: GameBoard>(board: &B, perspective: Side) -> i32 {
    ownership_score(board, &NEAR_EDGE_CELLS, NEAR_EDGE_WEIGHT, perspective)
}

/// `+weight` per cell held by `owner`, `-weight` per cell held by the other side.
fn ownership_score<B: GameBoard>(board: &B, cells: &[(u8, u8)], weight: i32, owner: Side) -> i32 {
    cells
        .iter()
        .map(|&(row, col)| match board.cell(Move::new(row, col)) {
            Some(side) if side == owner => weight,
            Some(_) => -weight,
            None => 0,
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;

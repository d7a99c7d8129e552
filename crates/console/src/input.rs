//! Parsing of the human player's "row col" input.

use othello_core::{Move, Position, Side};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected two numbers \"row col\", got \"{0}\"")]
    Malformed(String),

    #[error("row and column must be between 1 and 8")]
    OutOfRange,

    #[error("{} is not a legal move here", .0.to_human())]
    Illegal(Move),
}

/// Parse a 1-based "row col" pair such as `3 4`.
pub fn parse_move(line: &str) -> Result<Move, InputError> {
    let malformed = || InputError::Malformed(line.trim().to_string());

    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let row: i32 = row.parse().map_err(|_| malformed())?;
    let col: i32 = col.parse().map_err(|_| malformed())?;

    let (Some(row), Some(col)) = (row.checked_sub(1), col.checked_sub(1)) else {
        return Err(InputError::OutOfRange);
    };
    Move::try_new(row, col).ok_or(InputError::OutOfRange)
}

/// Parse `line` and check it is a legal move for `side` on `pos`.
pub fn parse_legal_move(pos: &Position, side: Side, line: &str) -> Result<Move, InputError> {
    let mv = parse_move(line)?;
    if pos.is_legal(mv, side) {
        Ok(mv)
    } else {
        Err(InputError::Illegal(mv))
    }
}

/// The legal moves of `side`, listed as "row col" pairs.
pub fn list_moves(pos: &Position, side: Side) -> String {
    pos.legal_moves(side)
        .into_iter()
        .map(|mv| format!("({})", mv.to_human()))
        .collect::<Vec<_>>()
        .join(" ")
}

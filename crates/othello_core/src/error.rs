use thiserror::Error;

use crate::types::{Move, Side};

/// Errors raised by the board engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{side} cannot play {mv}: no disks would be flipped or the cell is occupied")]
    IllegalMove { mv: Move, side: Side },

    #[error("unexpected symbol '{symbol}' at row {row}, column {col}")]
    InvalidSymbol { symbol: char, row: u8, col: u8 },

    #[error("board text has {0} cells, expected 64")]
    WrongCellCount(usize),
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board edge length.
pub const BOARD_SIZE: u8 = 8;

/// One of the two colours. Black always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }

    /// Single-letter tag used in board dumps and result files.
    pub fn symbol(self) -> char {
        match self {
            Side::Black => 'B',
            Side::White => 'W',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("BLACK"),
            Side::White => f.write_str("WHITE"),
        }
    }
}

/// A disk placement at `(row, col)`, both in `0..8`.
///
/// Row 0 is the top edge of the board. The search root has no move of its
/// own; that is expressed as `Option<Move>::None` rather than a sentinel
/// coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from user input.
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Bit index of this cell (`row * 8 + col`).
    pub const fn square(self) -> u8 {
        self.row * BOARD_SIZE + self.col
    }

    pub const fn from_square(sq: u8) -> Self {
        Self {
            row: sq / BOARD_SIZE,
            col: sq % BOARD_SIZE,
        }
    }

    /// 1-based "row col" form used by the game log and the console.
    pub fn to_human(self) -> String {
        format!("{} {}", self.row + 1, self.col + 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", move_to_coord(*self))
    }
}

/// Algebraic coordinate: column letter then 1-based row, e.g. `d3`.
pub fn move_to_coord(mv: Move) -> String {
    let c = (b'a' + mv.col) as char;
    let r = (b'1' + mv.row) as char;
    format!("{c}{r}")
}

pub fn coord_to_move(c: &str) -> Option<Move> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let col = b[0].to_ascii_lowercase();
    let row = b[1];
    if !(b'a'..=b'h').contains(&col) || !(b'1'..=b'8').contains(&row) {
        return None;
    }
    Some(Move::new(row - b'1', col - b'a'))
}

/// The four true corners.
pub const CORNERS: [Move; 4] = [
    Move::new(0, 0),
    Move::new(0, 7),
    Move::new(7, 0),
    Move::new(7, 7),
];

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

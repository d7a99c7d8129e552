use std::fmt;
use std::str::FromStr;

use crate::{
    bitboard::Bitboard,
    error::BoardError,
    movegen::{flips_for, legal_moves, move_targets},
    types::*,
};

/// Symbols used by the plain-text board format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardSymbols {
    pub black: char,
    pub white: char,
    pub empty: char,
}

impl Default for BoardSymbols {
    fn default() -> Self {
        Self {
            black: 'B',
            white: 'W',
            empty: '-',
        }
    }
}

/// An 8x8 Othello position: one occupancy bitboard per side.
///
/// Positions are small `Copy` values. `apply` always yields a fresh
/// position; only `play` and `set` mutate in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    black: Bitboard,
    white: Bitboard,
}

impl Position {
    /// A board with no disks at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The canonical opening: two disks of each colour on the centre diagonals.
    pub fn startpos() -> Self {
        let mut p = Self::empty();
        p.set(Move::new(3, 3), Some(Side::White));
        p.set(Move::new(3, 4), Some(Side::Black));
        p.set(Move::new(4, 3), Some(Side::Black));
        p.set(Move::new(4, 4), Some(Side::White));
        p
    }

    /// Parse a board from text: 64 cell symbols in row-major order.
    ///
    /// Any whitespace between symbols is ignored, so both the compact
    /// `BBW-...` form and the spaced `B B W - ...` dump are accepted.
    pub fn parse(text: &str, symbols: BoardSymbols) -> Result<Self, BoardError> {
        let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 64 {
            return Err(BoardError::WrongCellCount(cells.len()));
        }

        let mut pos = Self::empty();
        for (sq, &ch) in cells.iter().enumerate() {
            let mv = Move::from_square(sq as u8);
            let cell = if ch == symbols.black {
                Some(Side::Black)
            } else if ch == symbols.white {
                Some(Side::White)
            } else if ch == symbols.empty {
                None
            } else {
                return Err(BoardError::InvalidSymbol {
                    symbol: ch,
                    row: mv.row,
                    col: mv.col,
                });
            };
            pos.set(mv, cell);
        }
        Ok(pos)
    }

    /// Render with the given symbols, one row per line, cells separated by spaces.
    pub fn to_text(&self, symbols: BoardSymbols) -> String {
        let mut out = String::with_capacity(8 * 17);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = match self.cell(Move::new(row, col)) {
                    Some(Side::Black) => symbols.black,
                    Some(Side::White) => symbols.white,
                    None => symbols.empty,
                };
                out.push(ch);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    #[inline]
    pub fn disks(&self, side: Side) -> Bitboard {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    #[inline]
    fn disks_mut(&mut self, side: Side) -> &mut Bitboard {
        match side {
            Side::Black => &mut self.black,
            Side::White => &mut self.white,
        }
    }

    #[inline]
    pub fn cell(&self, mv: Move) -> Option<Side> {
        let sq = mv.square();
        if self.black.contains(sq) {
            Some(Side::Black)
        } else if self.white.contains(sq) {
            Some(Side::White)
        } else {
            None
        }
    }

    /// Read-only snapshot of the grid, indexed `[row][col]`.
    pub fn cells(&self) -> [[Option<Side>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (row, line) in grid.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = self.cell(Move::new(row as u8, col as u8));
            }
        }
        grid
    }

    /// Overwrite a single cell without any flipping. Used for setup.
    pub fn set(&mut self, mv: Move, cell: Option<Side>) {
        let sq = mv.square();
        self.black.clear(sq);
        self.white.clear(sq);
        if let Some(side) = cell {
            self.disks_mut(side).set(sq);
        }
    }

    pub fn disk_count(&self, side: Side) -> u32 {
        self.disks(side).popcount()
    }

    pub fn empty_count(&self) -> u32 {
        64 - (self.black | self.white).popcount()
    }

    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        legal_moves(self, side)
    }

    pub fn is_legal(&self, mv: Move, side: Side) -> bool {
        move_targets(self.disks(side), self.disks(side.opponent())).contains(mv.square())
    }

    pub fn has_moves(&self, side: Side) -> bool {
        !move_targets(self.disks(side), self.disks(side.opponent())).is_empty()
    }

    /// The game is over once neither side has a legal move.
    pub fn is_game_over(&self) -> bool {
        !self.has_moves(Side::Black) && !self.has_moves(Side::White)
    }

    /// Side with more disks, `None` on equal counts.
    pub fn winner(&self) -> Option<Side> {
        let black = self.disk_count(Side::Black);
        let white = self.disk_count(Side::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Play a legal move in place. Returns the number of flipped disks.
    pub fn play(&mut self, mv: Move, side: Side) -> Result<u32, BoardError> {
        if !self.is_legal(mv, side) {
            return Err(BoardError::IllegalMove { mv, side });
        }
        Ok(self.place_unchecked(mv, side))
    }

    /// Return the position after `side` plays `mv`. `self` is left untouched.
    pub fn apply(&self, mv: Move, side: Side) -> Result<Position, BoardError> {
        let mut next = *self;
        next.play(mv, side)?;
        Ok(next)
    }

    /// Place and flip without the legality check.
    ///
    /// Callers must pass a move taken from `legal_moves(side)`.
    pub(crate) fn place_unchecked(&mut self, mv: Move, side: Side) -> u32 {
        let sq = mv.square();
        let flips = flips_for(self.disks(side), self.disks(side.opponent()), sq);
        *self.disks_mut(side) |= flips | Bitboard::from_square(sq);
        *self.disks_mut(side.opponent()) &= !flips;
        flips.popcount()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(BoardSymbols::default()))
    }
}

impl FromStr for Position {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::parse(s, BoardSymbols::default())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

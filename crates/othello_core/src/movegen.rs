use crate::{
    bitboard::{Bitboard, Direction},
    board::Position,
    types::{Move, Side},
};

/// Generate all legal moves for `side`, in row-major order.
pub fn legal_moves(pos: &Position, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(pos, side, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &Position, side: Side, out: &mut Vec<Move>) {
    out.clear();
    let targets = move_targets(pos.disks(side), pos.disks(side.opponent()));
    out.extend(targets.map(Move::from_square));
}

/// Empty cells from which at least one line of `opp` disks ends in an `own` disk.
pub fn move_targets(own: Bitboard, opp: Bitboard) -> Bitboard {
    let empty = !(own | opp);
    let mut targets = Bitboard::EMPTY;
    for dir in Direction::ALL {
        let mut run = own.shift(dir) & opp;
        // A bracketed run is at most six disks long.
        for _ in 0..5 {
            run |= run.shift(dir) & opp;
        }
        targets |= run.shift(dir) & empty;
    }
    targets
}

/// Opponent disks flipped by placing an `own` disk on `sq`.
///
/// Empty when `sq` brackets nothing; occupancy of `sq` itself is not checked.
pub fn flips_for(own: Bitboard, opp: Bitboard, sq: u8) -> Bitboard {
    let origin = Bitboard::from_square(sq);
    let mut flips = Bitboard::EMPTY;
    for dir in Direction::ALL {
        let mut run = Bitboard::EMPTY;
        let mut cursor = origin.shift(dir);
        while !(cursor & opp).is_empty() {
            run |= cursor;
            cursor = cursor.shift(dir);
        }
        if !(cursor & own).is_empty() {
            flips |= run;
        }
    }
    flips
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

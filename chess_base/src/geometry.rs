//! Movement geometry shared by the move generators and the build script
//!
//! All deltas are `(delta_file, delta_rank)` pairs in index space, where rank index grows from
//! rank 8 towards rank 1. So "up the board" for White is a negative rank delta.

use crate::types::{Color, Rank};

/// Rank step of a pawn moving forward
pub const fn pawn_direction(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Rank from which a pawn may advance two squares
pub const fn pawn_start_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, -1),
    (2, 1),
    (-2, 1),
    (-2, -1),
    (1, -2),
    (1, 2),
    (-1, 2),
    (-1, -2),
];

pub const KING_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Up, right, down, left
pub const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Up-right, down-right, down-left, up-left
pub const DIAGONAL: [(isize, isize); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

//! Move generation
//!
//! Each generator takes a piece and a board snapshot and returns the set of squares the piece
//! may go to. Generators only read the board. The piece doesn't have to be on the board itself,
//! but its square must not be occupied by another piece.
//!
//! Checks, pins, castling, en passant and promotions are not considered.

use crate::bitboard::Bitboard;
use crate::board::{Board, Piece};
use crate::types::PieceKind;
use crate::{attack, bitboard_consts, geometry};

use log::trace;

/// Move targets of a piece, split by whether the target square is occupied
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Highlights {
    /// Empty target squares
    pub quiet: Bitboard,
    /// Target squares with enemy pieces on them
    pub captures: Bitboard,
}

impl Highlights {
    #[inline]
    pub fn all(&self) -> Bitboard {
        self.quiet | self.captures
    }
}

/// Generates pawn moves
///
/// The pawn steps forward onto an empty square, and also two squares from its start rank if both
/// squares are empty. It captures one square diagonally forward, but only onto an enemy piece.
pub fn pawn(piece: &Piece, board: &Board) -> Bitboard {
    let color = piece.color();
    let src = piece.pos();
    let dir = geometry::pawn_direction(color);
    let occupied = board.occupied();
    let mut res = Bitboard::EMPTY;

    if let Some(single) = src.shift(0, dir).filter(|&c| !occupied.has(c)) {
        res.set(single);
        if src.rank() == geometry::pawn_start_rank(color) {
            if let Some(double) = single.shift(0, dir).filter(|&c| !occupied.has(c)) {
                res.set(double);
            }
        }
    }

    let enemies = board.color(color.inv());
    for delta_file in [-1, 1] {
        if let Some(dst) = src.shift(delta_file, dir).filter(|&c| enemies.has(c)) {
            res.set(dst);
        }
    }

    trace!("{}: {} pawn targets", piece, res.len());
    res
}

/// Generates knight moves
///
/// Squares in between are never checked, as knights jump over them.
pub fn knight(piece: &Piece, board: &Board) -> Bitboard {
    let res = attack::knight(piece.pos()) & !board.color(piece.color());
    trace!("{}: {} knight targets", piece, res.len());
    res
}

/// Generates king moves
pub fn king(piece: &Piece, board: &Board) -> Bitboard {
    let res = attack::king(piece.pos()) & !board.color(piece.color());
    trace!("{}: {} king targets", piece, res.len());
    res
}

/// Casts a ray along each direction, stopping at the edge or at the first piece
///
/// An enemy piece ends the ray and is included, a friendly piece ends the ray and is not.
fn slide(piece: &Piece, board: &Board, dirs: &[(isize, isize)]) -> Bitboard {
    let ours = board.color(piece.color());
    let theirs = board.color(piece.color().inv());
    let mut res = Bitboard::EMPTY;
    for &(delta_file, delta_rank) in dirs {
        let mut cur = piece.pos();
        while let Some(next) = cur.shift(delta_file, delta_rank) {
            if ours.has(next) {
                break;
            }
            res.set(next);
            if theirs.has(next) {
                break;
            }
            cur = next;
        }
    }
    res
}

/// Generates bishop moves
pub fn bishop(piece: &Piece, board: &Board) -> Bitboard {
    let res = slide(piece, board, &geometry::DIAGONAL);
    // Diagonal steps never change the square shade
    debug_assert!((res & !bitboard_consts::shade(piece.pos().shade())).is_empty());
    trace!("{}: {} bishop targets", piece, res.len());
    res
}

/// Generates rook moves
pub fn rook(piece: &Piece, board: &Board) -> Bitboard {
    let res = slide(piece, board, &geometry::ORTHOGONAL);
    trace!("{}: {} rook targets", piece, res.len());
    res
}

/// Generates queen moves, i.e. the union of rook and bishop moves from the same square
pub fn queen(piece: &Piece, board: &Board) -> Bitboard {
    rook(piece, board) | bishop(piece, board)
}

/// Generates moves for `piece` according to its kind
pub fn gen_moves(piece: &Piece, board: &Board) -> Bitboard {
    match piece.kind() {
        PieceKind::Pawn => pawn(piece, board),
        PieceKind::Knight => knight(piece, board),
        PieceKind::Bishop => bishop(piece, board),
        PieceKind::Rook => rook(piece, board),
        PieceKind::Queen => queen(piece, board),
        PieceKind::King => king(piece, board),
    }
}

/// Generates moves for `piece` and splits them into quiet moves and captures
pub fn highlights(piece: &Piece, board: &Board) -> Highlights {
    let all = gen_moves(piece, board);
    let captures = all & board.color(piece.color().inv());
    Highlights {
        quiet: all & !captures,
        captures,
    }
}

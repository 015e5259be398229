//! Move validation

use crate::board::{Board, Piece, PieceId};
use crate::movegen;
use crate::types::Coord;

use log::debug;
use thiserror::Error;

/// Error indicating that move is invalid
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// There is no piece with such identity on the board
    #[error("no piece with id {0}")]
    UnknownPiece(PieceId),
    /// The target is the square the piece already stands on
    #[error("piece already stands on {0}")]
    SameSquare(Coord),
    /// The piece cannot reach the target square
    #[error("{piece} cannot go to {target}")]
    Unreachable { piece: Piece, target: Coord },
}

/// Returns `true` if `piece` may go to `target` on `board`
///
/// This is a single stateless query: it generates the move set of the piece and checks whether
/// `target` is in it.
///
/// # Example
///
/// ```
/// # use chessrules::{Board, validate};
/// #
/// let board = Board::initial();
/// let pawn = board.piece_at("e2".parse().unwrap()).unwrap();
/// assert!(validate::is_valid_move(pawn, "e4".parse().unwrap(), &board));
/// assert!(!validate::is_valid_move(pawn, "e5".parse().unwrap(), &board));
/// ```
#[inline]
pub fn is_valid_move(piece: &Piece, target: Coord, board: &Board) -> bool {
    movegen::gen_moves(piece, board).has(target)
}

/// Checks whether the piece with identity `id` may go to `target`
///
/// Returns the piece on success, or the reason why the move is rejected.
pub fn check_move(board: &Board, id: PieceId, target: Coord) -> Result<Piece, MoveError> {
    let piece = *board.piece(id).ok_or(MoveError::UnknownPiece(id))?;
    if piece.pos() == target {
        debug!("rejecting {} -> {}: same square", piece, target);
        return Err(MoveError::SameSquare(target));
    }
    if !is_valid_move(&piece, target, board) {
        debug!("rejecting {} -> {}: unreachable", piece, target);
        return Err(MoveError::Unreachable { piece, target });
    }
    Ok(piece)
}

//! Two-player session on top of the board
//!
//! [`Game`] keeps the current [`Board`] together with the side to move. It only checks that the
//! moving piece belongs to the side to move and that the move is reachable by movement rules.

use crate::bitboard::Bitboard;
use crate::board::{Board, BoardError, Piece, PieceId};
use crate::movegen::{self, Highlights};
use crate::types::{Color, Coord};
use crate::validate::{self, MoveError};

use log::debug;
use thiserror::Error;

/// Error indicating that a move cannot be played
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum GameError {
    /// The piece belongs to the side which doesn't move now
    #[error("it is {0}'s turn")]
    NotYourTurn(Color),
    /// There is no piece on the source square
    #[error("no piece on {0}")]
    EmptySquare(Coord),
    /// The move is rejected by movement rules
    #[error("invalid move: {0}")]
    Move(#[from] MoveError),
    /// The board cannot apply the move
    #[error("cannot apply move: {0}")]
    Board(#[from] BoardError),
}

/// Game session
///
/// # Example
///
/// ```
/// # use chessrules::{Color, game::Game};
/// #
/// let mut game = Game::new();
/// let pawn = game.board().piece_at("e2".parse().unwrap()).unwrap().id();
/// assert_eq!(game.play(pawn, "e4".parse().unwrap()), Ok(None));
/// assert_eq!(game.side(), Color::Black);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side: Color,
}

impl Game {
    /// Starts a game from the initial position with White to move
    pub fn new() -> Game {
        Game::from_board(Board::initial(), Color::White)
    }

    /// Starts a game from an arbitrary board
    pub fn from_board(board: Board, side: Color) -> Game {
        Game { board, side }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    fn movable(&self, id: PieceId) -> Option<&Piece> {
        self.board.piece(id).filter(|p| p.color() == self.side)
    }

    /// Returns all the squares the piece `id` may go to
    ///
    /// The result is empty if there is no such piece or it is not its side's turn.
    pub fn targets(&self, id: PieceId) -> Bitboard {
        self.movable(id)
            .map_or(Bitboard::EMPTY, |p| movegen::gen_moves(p, &self.board))
    }

    /// Same as [`Game::targets()`], but splits the targets into quiet moves and captures
    pub fn highlights(&self, id: PieceId) -> Highlights {
        self.movable(id)
            .map_or(Highlights::default(), |p| movegen::highlights(p, &self.board))
    }

    /// Plays the piece `id` to `dst` and passes the turn
    ///
    /// Returns the captured piece, if any. If the move is rejected, the game stays the same.
    pub fn play(&mut self, id: PieceId, dst: Coord) -> Result<Option<Piece>, GameError> {
        let piece = *self
            .board
            .piece(id)
            .ok_or(MoveError::UnknownPiece(id))?;
        if piece.color() != self.side {
            debug!("rejecting {} -> {}: {} to move", piece, dst, self.side);
            return Err(GameError::NotYourTurn(self.side));
        }
        validate::check_move(&self.board, id, dst)?;
        let (board, captured) = self.board.after_move(id, dst)?;
        match captured {
            Some(victim) => debug!("{} takes {}", piece, victim),
            None => debug!("{} goes to {}", piece, dst),
        }
        self.board = board;
        self.side = self.side.inv();
        Ok(captured)
    }

    /// Same as [`Game::play()`], but the piece is chosen by its square
    pub fn play_squares(&mut self, src: Coord, dst: Coord) -> Result<Option<Piece>, GameError> {
        let id = self
            .board
            .piece_at(src)
            .ok_or(GameError::EmptySquare(src))?
            .id();
        self.play(id, dst)
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Game {
        Game::new()
    }
}

//! # Chess movement rules
//!
//! This crate answers one question for a drag-and-drop chess board: given a piece and the current
//! board, which squares may it go to? It contains:
//!
//! - board snapshot with stable piece identities ([`Board`], [`Piece`], [`PieceId`])
//! - per-kind move generators ([`movegen`])
//! - move validation on top of the generators ([`validate`])
//! - a small two-player session which alternates turns and commits moves ([`game::Game`])
//!
//! Only movement and capture geometry is considered. Checks, castling, en passant, promotion and
//! game end are out of scope.
//!
//! # Example
//!
//! ```
//! use chessrules::{movegen, Board, Coord};
//! use std::str::FromStr;
//!
//! let board = Board::initial();
//! let knight = board.piece_at(Coord::from_str("g1").unwrap()).unwrap();
//! let targets = movegen::gen_moves(knight, &board);
//! assert_eq!(targets.len(), 2);
//! assert!(targets.has(Coord::from_str("f3").unwrap()));
//! ```

mod attack;

pub mod board;
pub mod game;
pub mod movegen;
pub mod validate;

pub use chessrules_base::{bitboard, bitboard_consts, geometry, types};

pub use bitboard::Bitboard;
pub use board::{Board, BoardError, Piece, PieceId};
pub use game::{Game, GameError};
pub use types::{Color, Coord, File, PieceKind, Rank, Shade};
pub use validate::{check_move, is_valid_move, MoveError};

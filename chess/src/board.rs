//! Board snapshot and related things

use crate::bitboard::Bitboard;
use crate::geometry;
use crate::movegen::Highlights;
use crate::types::{Color, Coord, File, PieceKind, Rank};

use std::fmt::{self, Display};
use std::str::FromStr;

use arrayvec::ArrayVec;
use log::warn;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of a piece
///
/// Identities are chosen by whoever builds the board and stay the same while the piece moves
/// around. Two pieces on the same board never share an identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PieceId(pub u16);

impl Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "#{}", self.0)
    }
}

/// Piece standing on some square
///
/// Pieces are plain values. Moving a piece means building a new value with [`Piece::moved_to()`]
/// and a new [`Board`] containing it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    pos: Coord,
}

impl Piece {
    #[inline]
    pub const fn new(id: PieceId, kind: PieceKind, color: Color, pos: Coord) -> Piece {
        Piece {
            id,
            kind,
            color,
            pos,
        }
    }

    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn pos(&self) -> Coord {
        self.pos
    }

    /// Returns the same piece standing on `dst`
    #[inline]
    pub const fn moved_to(self, dst: Coord) -> Piece {
        Piece { pos: dst, ..self }
    }

    /// Returns the same piece with the opposite color, reflected across the rank midpoint
    #[inline]
    pub const fn mirrored(self) -> Piece {
        Piece {
            color: self.color.inv(),
            pos: self.pos.flipped_rank(),
            ..self
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{} {} on {}", self.color, self.kind, self.pos)
    }
}

/// Board construction error
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum BoardError {
    /// Two pieces stand on the same square
    #[error("square {0} is occupied by more than one piece")]
    Occupied(Coord),
    /// Two pieces share the same identity
    #[error("piece id {0} is used more than once")]
    DuplicateId(PieceId),
    /// There is no piece with such identity
    #[error("no piece with id {0}")]
    UnknownPiece(PieceId),
}

/// Error parsing a board layout (the first part of FEN)
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum LayoutParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Snapshot of all the pieces on the board
///
/// The board is an arena of [`Piece`] records together with an index from squares to pieces, so
/// looking up a square never scans the arena. Every square holds at most one piece and every
/// identity appears at most once; both are checked when the board is built.
///
/// The board is never changed in place. Move generators only read it, and committing a move
/// produces a new board (see [`Board::after_move()`]).
///
/// # Example
///
/// ```
/// # use chessrules::{Board, Coord, PieceKind, Color};
/// #
/// let board = Board::from_layout("4k3/8/8/8/8/8/4P3/4K3").unwrap();
/// let pawn = board.piece_at("e2".parse().unwrap()).unwrap();
/// assert_eq!(pawn.kind(), PieceKind::Pawn);
/// assert_eq!(pawn.color(), Color::White);
/// assert_eq!(board.len(), 3);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Piece>", into = "Vec<Piece>")
)]
pub struct Board {
    pieces: ArrayVec<Piece, 64>,
    cells: [Option<u8>; 64],
    white: Bitboard,
    black: Bitboard,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Returns a board without pieces
    pub fn empty() -> Board {
        Board::index(ArrayVec::new())
    }

    /// Builds a board from the given pieces
    ///
    /// Fails if two pieces share a square or an identity.
    pub fn new<I: IntoIterator<Item = Piece>>(pieces: I) -> Result<Board, BoardError> {
        let mut arena: ArrayVec<Piece, 64> = ArrayVec::new();
        let mut occupied = Bitboard::EMPTY;
        for piece in pieces {
            if occupied.has(piece.pos) {
                warn!("rejecting board: {} is occupied twice", piece.pos);
                return Err(BoardError::Occupied(piece.pos));
            }
            if arena.iter().any(|p| p.id == piece.id) {
                warn!("rejecting board: id {} is used twice", piece.id);
                return Err(BoardError::DuplicateId(piece.id));
            }
            occupied.set(piece.pos);
            // All squares are distinct, so there are at most 64 pieces here
            arena.push(piece);
        }
        Ok(Board::index(arena))
    }

    /// Returns a board with the initial position
    ///
    /// White pieces get identities 0 to 15 and Black pieces get 16 to 31, the back rank first,
    /// from the a-file to the h-file.
    pub fn initial() -> Board {
        let mut arena: ArrayVec<Piece, 64> = ArrayVec::new();
        let mut next_id = 0;
        let mut add = |kind: PieceKind, color: Color, pos: Coord| {
            arena.push(Piece::new(PieceId(next_id), kind, color, pos));
            next_id += 1;
        };
        for (color, back) in [(Color::White, Rank::R1), (Color::Black, Rank::R8)] {
            for (file, kind) in File::iter().zip(BACK_RANK) {
                add(kind, color, Coord::from_parts(file, back));
            }
            for file in File::iter() {
                let pos = Coord::from_parts(file, geometry::pawn_start_rank(color));
                add(PieceKind::Pawn, color, pos);
            }
        }
        Board::index(arena)
    }

    /// Parses the board from the piece placement part of FEN
    ///
    /// Identities are assigned in reading order, starting from zero at a8.
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this function instead of
    /// `from_str()` for better readability.
    pub fn from_layout(s: &str) -> Result<Board, LayoutParseError> {
        Board::from_str(s)
    }

    /// Builds the arena index. Pieces must already stand on distinct squares.
    fn index(pieces: ArrayVec<Piece, 64>) -> Board {
        let mut cells = [None; 64];
        let mut white = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        for (i, piece) in pieces.iter().enumerate() {
            debug_assert!(cells[piece.pos.index()].is_none());
            cells[piece.pos.index()] = Some(i as u8);
            match piece.color {
                Color::White => white.set(piece.pos),
                Color::Black => black.set(piece.pos),
            }
        }
        let res = Board {
            pieces,
            cells,
            white,
            black,
        };
        #[cfg(feature = "selftest")]
        res.selftest();
        res
    }

    #[cfg(feature = "selftest")]
    fn selftest(&self) {
        for coord in Coord::iter() {
            match self.cells[coord.index()] {
                Some(i) => {
                    let piece = &self.pieces[i as usize];
                    assert_eq!(piece.pos, coord);
                    assert!(self.color(piece.color).has(coord));
                }
                None => assert!(!self.occupied().has(coord)),
            }
        }
        assert_eq!(self.occupied().len() as usize, self.pieces.len());
        assert!((self.white & self.black).is_empty());
    }

    /// Returns the piece on `c`, if any
    #[inline]
    pub fn piece_at(&self, c: Coord) -> Option<&Piece> {
        self.cells[c.index()].map(|i| &self.pieces[i as usize])
    }

    /// Returns the piece with identity `id`, if any
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// Returns all the pieces, in the order they were given when building the board
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Returns the set of squares occupied by the pieces of color `c`
    #[inline]
    pub fn color(&self, c: Color) -> Bitboard {
        match c {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Returns the set of all occupied squares
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white | self.black
    }

    /// Returns the board with colors swapped and ranks reflected
    ///
    /// Identities are kept. Move sets on the mirrored board are the reflections of the move sets
    /// on the original one.
    pub fn mirrored(&self) -> Board {
        Board::index(self.pieces.iter().map(|p| p.mirrored()).collect())
    }

    /// Builds the board after the piece `id` goes to `dst`
    ///
    /// The piece is removed from its square, the occupant of `dst` (if any) is removed and
    /// returned, and the moved piece is put on `dst`. The move itself is not checked, so validate
    /// it first (e.g. with [`validate::check_move()`](crate::validate::check_move())).
    ///
    /// `self` is left untouched.
    pub fn after_move(
        &self,
        id: PieceId,
        dst: Coord,
    ) -> Result<(Board, Option<Piece>), BoardError> {
        let piece = *self.piece(id).ok_or(BoardError::UnknownPiece(id))?;
        let captured = self.piece_at(dst).copied().filter(|p| p.id != id);
        let mut arena: ArrayVec<Piece, 64> = self
            .pieces
            .iter()
            .filter(|p| p.id != id && Some(p.id) != captured.map(|c| c.id))
            .copied()
            .collect();
        arena.push(piece.moved_to(dst));
        Ok((Board::index(arena), captured))
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use chessrules::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        self.pretty_marked(style, Highlights::default())
    }

    /// Same as [`Board::pretty()`], but also marks the given move targets
    ///
    /// Quiet targets are shown as `*` and capture targets as `x`.
    #[inline]
    pub fn pretty_marked(&self, style: PrettyStyle, marks: Highlights) -> Pretty<'_> {
        Pretty {
            board: self,
            style,
            marks,
        }
    }

    /// Converts the board into the piece placement part of FEN
    ///
    /// Does the same as `Board::to_string()`. It is recommended to use this function instead of
    /// `to_string()` for better readability.
    #[inline]
    pub fn layout(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.len() == other.len()
            && self
                .pieces
                .iter()
                .all(|p| other.piece_at(p.pos) == Some(p))
    }
}

impl Eq for Board {}

impl TryFrom<Vec<Piece>> for Board {
    type Error = BoardError;

    fn try_from(pieces: Vec<Piece>) -> Result<Board, BoardError> {
        Board::new(pieces)
    }
}

impl From<Board> for Vec<Piece> {
    fn from(b: Board) -> Vec<Piece> {
        b.pieces.into_iter().collect()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
    marks: Highlights,
}

fn parse_cells(s: &str) -> Result<ArrayVec<Piece, 64>, LayoutParseError> {
    type Error = LayoutParseError;

    let mut file = 0_usize;
    let mut rank = 0_usize;
    let mut pieces: ArrayVec<Piece, 64> = ArrayVec::new();
    for ch in s.chars() {
        match ch {
            '1'..='8' => {
                let add = (ch as u8 - b'0') as usize;
                if file + add > 8 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
                file += add;
            }
            '/' => {
                if file < 8 {
                    return Err(Error::RankUnderflow(Rank::from_index(rank)));
                }
                rank += 1;
                file = 0;
                if rank >= 8 {
                    return Err(Error::Overflow);
                }
            }
            _ => {
                if file >= 8 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
                let (color, kind) =
                    PieceKind::from_fen_char(ch).ok_or(Error::UnexpectedChar(ch))?;
                let pos = Coord::from_parts(File::from_index(file), Rank::from_index(rank));
                let id = PieceId(pieces.len() as u16);
                pieces.push(Piece::new(id, kind, color, pos));
                file += 1;
            }
        };
    }

    if file < 8 {
        return Err(Error::RankUnderflow(Rank::from_index(rank)));
    }
    if rank < 7 {
        return Err(Error::Underflow);
    }

    Ok(pieces)
}

impl FromStr for Board {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        Ok(Board::index(parse_cells(s)?))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            if rank.index() != 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for file in File::iter() {
                let piece = match self.piece_at(Coord::from_parts(file, rank)) {
                    Some(piece) => piece,
                    None => {
                        empty += 1;
                        continue;
                    }
                };
                if empty != 0 {
                    write!(f, "{}", (b'0' + empty) as char)?;
                    empty = 0;
                }
                write!(f, "{}", piece.kind.as_fen_char(piece.color))?;
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
            }
        }
        Ok(())
    }
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;
    const EMPTY: char;
    const QUIET_MARK: char;
    const CAPTURE_MARK: char;

    fn piece(p: &Piece) -> char;

    fn fmt(p: &Pretty<'_>, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                let coord = Coord::from_parts(file, rank);
                let ch = if p.marks.captures.has(coord) {
                    Self::CAPTURE_MARK
                } else if p.marks.quiet.has(coord) {
                    Self::QUIET_MARK
                } else {
                    p.board.piece_at(coord).map_or(Self::EMPTY, Self::piece)
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';
    const EMPTY: char = '.';
    const QUIET_MARK: char = '*';
    const CAPTURE_MARK: char = 'x';

    fn piece(p: &Piece) -> char {
        p.kind.as_fen_char(p.color)
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';
    const EMPTY: char = '.';
    const QUIET_MARK: char = '*';
    const CAPTURE_MARK: char = 'x';

    fn piece(p: &Piece) -> char {
        p.kind.as_utf8_char(p.color)
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self, f),
        }
    }
}

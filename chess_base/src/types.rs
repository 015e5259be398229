use std::fmt::{self, Display};
use std::hint;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unexpected color {0:?}")]
    Unexpected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PieceKindParseError {
    #[error("unknown piece type {0:?}")]
    Unknown(String),
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            7 => File::H,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "file index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(Self::from_index((u32::from(c) - u32::from('a')) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Board rank
///
/// Ranks are numbered from the top of the board, as seen by White: [`Rank::R8`] has index 0
/// and [`Rank::R1`] has index 7.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    R8 = 0,
    R7 = 1,
    R6 = 2,
    R5 = 3,
    R4 = 4,
    R3 = 5,
    R2 = 6,
    R1 = 7,
}

impl Rank {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => Rank::R8,
            1 => Rank::R7,
            2 => Rank::R6,
            3 => Rank::R5,
            4 => Rank::R4,
            5 => Rank::R3,
            6 => Rank::R2,
            7 => Rank::R1,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "rank index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(Self::from_index((u32::from('8') - u32::from(c)) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'8' - *self as u8) as char
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Returns `true` if both `file` and `rank` lie in `0..8`
#[inline]
pub const fn in_bounds(file: isize, rank: isize) -> bool {
    file >= 0 && file < 8 && rank >= 0 && rank < 8
}

/// Square shade
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// Shade of the square with given file and rank indices
    ///
    /// The square is light iff `file + rank` is even, so a8 and h1 are light.
    #[inline]
    pub const fn of(file: usize, rank: usize) -> Shade {
        if (file + rank) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

/// Board square
///
/// Stores `rank * 8 + file`, so a8 has index 0 and h1 has index 63.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Coord(u8);

impl Coord {
    pub const fn from_index(val: usize) -> Coord {
        assert!(val < 64, "coord must be between 0 and 63");
        Coord(val as u8)
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Coord {
        Coord(val as u8)
    }

    pub const fn from_parts(file: File, rank: Rank) -> Coord {
        Coord(((rank as u8) << 3) | file as u8)
    }

    /// Builds a square from `(file, rank)` indices, or returns `None` if they are off the board
    ///
    /// This is the inverse of [`Coord::to_coordinates()`].
    pub fn from_coordinates(file: u8, rank: u8) -> Option<Coord> {
        if file >= 8 || rank >= 8 {
            return None;
        }
        Some(Coord((rank << 3) | file))
    }

    /// Returns `(file, rank)` indices, where a = 0 and rank 8 = 0
    pub const fn to_coordinates(&self) -> (u8, u8) {
        (self.0 & 7, self.0 >> 3)
    }

    pub const fn file(&self) -> File {
        unsafe { File::from_index_unchecked((self.0 & 7) as usize) }
    }

    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_index_unchecked((self.0 >> 3) as usize) }
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    pub const fn shade(&self) -> Shade {
        Shade::of(self.file().index(), self.rank().index())
    }

    /// Reflects the square across the rank midpoint (a2 becomes a7)
    pub const fn flipped_rank(self) -> Coord {
        Coord(self.0 ^ 56)
    }

    /// Moves the square by the given deltas, or returns `None` if the result leaves the board
    pub fn shift(self, delta_file: isize, delta_rank: isize) -> Option<Coord> {
        let new_file = self.file().index() as isize + delta_file;
        let new_rank = self.rank().index() as isize + delta_rank;
        if !in_bounds(new_file, new_rank) {
            return None;
        }
        Some(Coord::from_parts(
            File::from_index(new_file as usize),
            Rank::from_index(new_rank as usize),
        ))
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Coord)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.0 < 64 {
            return write!(f, "Coord({})", self);
        }
        write!(f, "Coord(?{:?})", self.0)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file().as_char(), self.rank().as_char())
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file_ch, rank_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file_ch), Some(rank_ch), None) => (file_ch, rank_ch),
            _ => return Err(CoordParseError::BadLength),
        };
        Ok(Coord::from_parts(
            File::from_char(file_ch).ok_or(CoordParseError::UnexpectedFileChar(file_ch))?,
            Rank::from_char(rank_ch).ok_or(CoordParseError::UnexpectedRankChar(rank_ch))?,
        ))
    }
}

impl TryFrom<String> for Coord {
    type Error = CoordParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Coord::from_str(&s)
    }
}

impl From<Coord> for String {
    fn from(c: Coord) -> String {
        c.to_string()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(ColorParseError::Unexpected(s.to_string())),
        }
    }
}

/// Kind of a chess piece
///
/// The set of kinds is closed. Type tags coming from outside (e.g. from a UI) are converted with
/// [`PieceKind::from_str()`], which rejects anything it doesn't know instead of letting such pieces
/// move freely.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn as_str(&self) -> &'static str {
        match *self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Returns the FEN letter of the piece, in upper case
    pub fn as_char(&self) -> char {
        b"PNBRQK"[*self as usize] as char
    }

    /// Returns the FEN letter of the piece, in upper case for White and in lower case for Black
    pub fn as_fen_char(&self, color: Color) -> char {
        match color {
            Color::White => self.as_char(),
            Color::Black => self.as_char().to_ascii_lowercase(),
        }
    }

    pub fn as_utf8_char(&self, color: Color) -> char {
        let table = match color {
            Color::White => ['♙', '♘', '♗', '♖', '♕', '♔'],
            Color::Black => ['♟', '♞', '♝', '♜', '♛', '♚'],
        };
        table[*self as usize]
    }

    /// Parses a FEN letter, returning the piece kind together with the color given by the case
    pub fn from_fen_char(c: char) -> Option<(Color, PieceKind)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((color, kind))
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PieceKind {
    type Err = PieceKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| PieceKindParseError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file() {
        for (idx, file) in File::iter().enumerate() {
            assert_eq!(file.index(), idx);
            assert_eq!(File::from_index(idx), file);
            assert_eq!(File::from_char(file.as_char()), Some(file));
        }
        assert_eq!(File::from_char('i'), None);
    }

    #[test]
    fn test_rank() {
        for (idx, rank) in Rank::iter().enumerate() {
            assert_eq!(rank.index(), idx);
            assert_eq!(Rank::from_index(idx), rank);
            assert_eq!(Rank::from_char(rank.as_char()), Some(rank));
        }
        assert_eq!(Rank::R8.as_char(), '8');
        assert_eq!(Rank::R1.as_char(), '1');
        assert_eq!(Rank::from_char('0'), None);
    }

    #[test]
    fn test_coord() {
        let mut coords = Vec::new();
        for rank in Rank::iter() {
            for file in File::iter() {
                let coord = Coord::from_parts(file, rank);
                assert_eq!(coord.file(), file);
                assert_eq!(coord.rank(), rank);
                coords.push(coord);
            }
        }
        assert_eq!(coords, Coord::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_coordinates_roundtrip() {
        for file in 0..8 {
            for rank in 0..8 {
                let coord = Coord::from_coordinates(file, rank).unwrap();
                assert_eq!(coord.to_coordinates(), (file, rank));
            }
        }
        assert_eq!(Coord::from_coordinates(8, 0), None);
        assert_eq!(Coord::from_coordinates(0, 8), None);
    }

    #[test]
    fn test_coordinates_orientation() {
        assert_eq!(Coord::from_str("a8").unwrap().to_coordinates(), (0, 0));
        assert_eq!(Coord::from_str("a1").unwrap().to_coordinates(), (0, 7));
        assert_eq!(Coord::from_str("e2").unwrap().to_coordinates(), (4, 6));
        assert_eq!(Coord::from_str("h1").unwrap().to_coordinates(), (7, 7));
        assert_eq!(Coord::from_coordinates(4, 1).unwrap().to_string(), "e7");
    }

    #[test]
    fn test_coord_str() {
        assert_eq!(Coord::from_parts(File::B, Rank::R4).to_string(), "b4");
        assert_eq!(
            Coord::from_str("a1"),
            Ok(Coord::from_parts(File::A, Rank::R1))
        );
        assert_eq!(Coord::from_str("h9"), Err(CoordParseError::UnexpectedRankChar('9')));
        assert_eq!(Coord::from_str("i4"), Err(CoordParseError::UnexpectedFileChar('i')));
        assert_eq!(Coord::from_str("a"), Err(CoordParseError::BadLength));
        assert_eq!(Coord::from_str("a1b"), Err(CoordParseError::BadLength));
        assert_eq!(Coord::from_str("ф1"), Err(CoordParseError::UnexpectedFileChar('ф')));
        for coord in Coord::iter() {
            assert_eq!(Coord::from_str(&coord.to_string()), Ok(coord));
        }
    }

    #[test]
    fn test_bounds_and_shift() {
        assert!(in_bounds(0, 0));
        assert!(in_bounds(7, 7));
        assert!(!in_bounds(-1, 3));
        assert!(!in_bounds(3, 8));

        let a1 = Coord::from_parts(File::A, Rank::R1);
        assert_eq!(a1.shift(0, -1), Some(Coord::from_parts(File::A, Rank::R2)));
        assert_eq!(a1.shift(1, 0), Some(Coord::from_parts(File::B, Rank::R1)));
        assert_eq!(a1.shift(-1, 0), None);
        assert_eq!(a1.shift(0, 1), None);
    }

    #[test]
    fn test_shade() {
        assert_eq!(Coord::from_str("a8").unwrap().shade(), Shade::Light);
        assert_eq!(Coord::from_str("h1").unwrap().shade(), Shade::Light);
        assert_eq!(Coord::from_str("a1").unwrap().shade(), Shade::Dark);
        assert_eq!(Coord::from_str("e4").unwrap().shade(), Shade::Light);
        assert_eq!(Coord::from_str("d4").unwrap().shade(), Shade::Dark);
    }

    #[test]
    fn test_flipped_rank() {
        assert_eq!(Coord::from_str("a2").unwrap().flipped_rank().to_string(), "a7");
        assert_eq!(Coord::from_str("h8").unwrap().flipped_rank().to_string(), "h1");
        for coord in Coord::iter() {
            assert_eq!(coord.flipped_rank().flipped_rank(), coord);
            assert_eq!(coord.flipped_rank().file(), coord.file());
        }
    }

    #[test]
    fn test_color_str() {
        assert_eq!(Color::from_str("white"), Ok(Color::White));
        assert_eq!(Color::from_str("b"), Ok(Color::Black));
        assert!(Color::from_str("red").is_err());
        assert_eq!(Color::White.inv(), Color::Black);
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn test_piece_kind_str() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Ok(kind));
            assert_eq!(
                PieceKind::from_fen_char(kind.as_fen_char(Color::Black)),
                Some((Color::Black, kind))
            );
            assert_eq!(
                PieceKind::from_fen_char(kind.as_fen_char(Color::White)),
                Some((Color::White, kind))
            );
        }
        assert_eq!(
            PieceKind::from_str("archbishop"),
            Err(PieceKindParseError::Unknown("archbishop".to_string()))
        );
        assert_eq!(PieceKind::from_fen_char('x'), None);
    }
}

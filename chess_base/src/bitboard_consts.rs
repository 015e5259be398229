use crate::bitboard::Bitboard;
use crate::types::{File, Rank, Shade};

const RANK: [Bitboard; 8] = [
    Bitboard::from_raw(0x00000000000000ff),
    Bitboard::from_raw(0x000000000000ff00),
    Bitboard::from_raw(0x0000000000ff0000),
    Bitboard::from_raw(0x00000000ff000000),
    Bitboard::from_raw(0x000000ff00000000),
    Bitboard::from_raw(0x0000ff0000000000),
    Bitboard::from_raw(0x00ff000000000000),
    Bitboard::from_raw(0xff00000000000000),
];

pub const fn rank(r: Rank) -> Bitboard {
    RANK[r.index()]
}

const FILE: [Bitboard; 8] = [
    Bitboard::from_raw(0x0101010101010101),
    Bitboard::from_raw(0x0202020202020202),
    Bitboard::from_raw(0x0404040404040404),
    Bitboard::from_raw(0x0808080808080808),
    Bitboard::from_raw(0x1010101010101010),
    Bitboard::from_raw(0x2020202020202020),
    Bitboard::from_raw(0x4040404040404040),
    Bitboard::from_raw(0x8080808080808080),
];

pub const fn file(f: File) -> Bitboard {
    FILE[f.index()]
}

pub const CELLS_LIGHT: Bitboard = Bitboard::from_raw(0xaa55aa55aa55aa55);
pub const CELLS_DARK: Bitboard = Bitboard::from_raw(0x55aa55aa55aa55aa);

pub const fn shade(s: Shade) -> Bitboard {
    match s {
        Shade::Light => CELLS_LIGHT,
        Shade::Dark => CELLS_DARK,
    }
}

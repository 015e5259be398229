//! Precomputed target tables for single-step pieces
//!
//! The tables are built by the build script from the offsets in [`geometry`](crate::geometry) and
//! only account for the board edges. Occupancy is applied by the move generators.

use crate::bitboard::Bitboard;
use crate::types::Coord;

#[inline]
const fn bb(val: u64) -> Bitboard {
    Bitboard::from_raw(val)
}

include!(concat!(env!("OUT_DIR"), "/near_attacks.rs"));

#[inline]
pub fn king(coord: Coord) -> Bitboard {
    KING_ATTACKS[coord.index()]
}

#[inline]
pub fn knight(coord: Coord) -> Bitboard {
    KNIGHT_ATTACKS[coord.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry;

    fn by_offsets(coord: Coord, deltas: &[(isize, isize)]) -> Bitboard {
        deltas
            .iter()
            .filter_map(|&(df, dr)| coord.shift(df, dr))
            .collect()
    }

    #[test]
    fn test_tables_match_offsets() {
        for coord in Coord::iter() {
            assert_eq!(king(coord), by_offsets(coord, &geometry::KING_OFFSETS));
            assert_eq!(knight(coord), by_offsets(coord, &geometry::KNIGHT_OFFSETS));
        }
    }

    #[test]
    fn test_corners() {
        let a1: Coord = "a1".parse().unwrap();
        assert_eq!(king(a1).len(), 3);
        assert_eq!(knight(a1).len(), 2);
        let d4: Coord = "d4".parse().unwrap();
        assert_eq!(king(d4).len(), 8);
        assert_eq!(knight(d4).len(), 8);
    }
}

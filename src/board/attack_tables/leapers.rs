//! Per-square attack tables for knights, kings and empty-board sliders.

use once_cell::sync::Lazy;

use super::kogge;
use crate::board::types::{Bitboard, Square};

fn per_square(f: impl Fn(Bitboard) -> Bitboard) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for (sq, slot) in table.iter_mut().enumerate() {
        *slot = f(Bitboard::from_square(Square::from_index(sq)));
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| per_square(kogge::knight_set));

pub(crate) static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| per_square(kogge::king_set));

/// Bishop attacks on an empty board
pub(crate) static BISHOP_PSEUDO: Lazy<[Bitboard; 64]> =
    Lazy::new(|| per_square(kogge::bishop_rays));

/// Rook attacks on an empty board
pub(crate) static ROOK_PSEUDO: Lazy<[Bitboard; 64]> = Lazy::new(|| per_square(kogge::rook_rays));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_table_counts() {
        assert_eq!(KNIGHT_ATTACKS[0].popcount(), 2); // a1
        assert_eq!(KNIGHT_ATTACKS[Square::new(3, 4).index()].popcount(), 8); // e4
        assert_eq!(KNIGHT_ATTACKS[Square::new(0, 1).index()].popcount(), 3); // b1
    }

    #[test]
    fn test_king_table_counts() {
        assert_eq!(KING_ATTACKS[0].popcount(), 3); // a1
        assert_eq!(KING_ATTACKS[Square::new(3, 0).index()].popcount(), 5); // a4
        assert_eq!(KING_ATTACKS[Square::new(3, 3).index()].popcount(), 8); // d4
    }

    #[test]
    fn test_pseudo_slider_counts() {
        // Corner: 7 diagonal squares, 14 orthogonal
        assert_eq!(BISHOP_PSEUDO[0].popcount(), 7);
        assert_eq!(ROOK_PSEUDO[0].popcount(), 14);
        // d4: 13 diagonal, 14 orthogonal
        let d4 = Square::new(3, 3).index();
        assert_eq!(BISHOP_PSEUDO[d4].popcount(), 13);
        assert_eq!(ROOK_PSEUDO[d4].popcount(), 14);
    }
}

//! Line-connecting and line-between tables.
//!
//! `LINE_CONNECTING[a][b]` is the full rank, file or diagonal through two
//! aligned squares (both endpoints included), empty when no line exists.
//! `LINE_BETWEEN[a][b]` holds only the bits strictly between the squares.
//! Pin resolution rests on these: a pinned piece may only move along the
//! line connecting it to its own king.

use once_cell::sync::Lazy;

use super::kogge;
use crate::board::types::{Bitboard, Square};

static LINE_CONNECTING: Lazy<Box<[[Bitboard; 64]; 64]>> = Lazy::new(|| {
    let mut table = Box::new([[Bitboard::EMPTY; 64]; 64]);
    for i in 0..64 {
        let a = Bitboard::from_square(Square::from_index(i));
        let bishop_a = kogge::bishop_rays(a);
        let rook_a = kogge::rook_rays(a);
        for j in 0..64 {
            let b = Bitboard::from_square(Square::from_index(j));
            if bishop_a.intersects(b) {
                table[i][j] = (bishop_a & kogge::bishop_rays(b)) | a | b;
            } else if rook_a.intersects(b) {
                table[i][j] = (rook_a & kogge::rook_rays(b)) | a | b;
            }
        }
    }
    table
});

static LINE_BETWEEN: Lazy<Box<[[Bitboard; 64]; 64]>> = Lazy::new(|| {
    let mut table = Box::new([[Bitboard::EMPTY; 64]; 64]);
    for i in 0..64 {
        for j in 0..64 {
            // Mask the connecting line to the open interval (i, j): the XOR of
            // the two upward-closed intervals covers [min, max), and clearing
            // the low bit drops the lower endpoint.
            let span = (!0u64 << i) ^ (!0u64 << j);
            let mut bb = LINE_CONNECTING[i][j].0 & span;
            bb &= bb.wrapping_sub(1);
            table[i][j] = Bitboard(bb);
        }
    }
    table
});

#[inline]
pub(crate) fn line_connecting(a: Square, b: Square) -> Bitboard {
    LINE_CONNECTING[a.index()][b.index()]
}

#[inline]
pub(crate) fn line_between(a: Square, b: Square) -> Bitboard {
    LINE_BETWEEN[a.index()][b.index()]
}

/// True if `c` lies on the (extended) line through `a` and `b`
#[inline]
pub(crate) fn aligned(a: Square, b: Square, c: Square) -> bool {
    line_connecting(a, b).contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_line_connecting_rank() {
        let line = line_connecting(sq("a1"), sq("h1"));
        assert_eq!(line, Bitboard::RANK_1);
    }

    #[test]
    fn test_line_connecting_diagonal() {
        let line = line_connecting(sq("a1"), sq("c3"));
        assert_eq!(line.popcount(), 8); // whole a1-h8 diagonal
        assert!(line.contains(sq("h8")));
    }

    #[test]
    fn test_line_connecting_unaligned() {
        assert_eq!(line_connecting(sq("a1"), sq("b3")), Bitboard::EMPTY);
    }

    #[test]
    fn test_line_between() {
        let between = line_between(sq("a1"), sq("d4"));
        assert_eq!(
            between,
            Bitboard::from_square(sq("b2")) | Bitboard::from_square(sq("c3"))
        );
        // Endpoints excluded
        assert!(!between.contains(sq("a1")));
        assert!(!between.contains(sq("d4")));
    }

    #[test]
    fn test_line_between_symmetric() {
        for (a, b) in [("a1", "a8"), ("h1", "a8"), ("c2", "c7"), ("b2", "g7")] {
            assert_eq!(line_between(sq(a), sq(b)), line_between(sq(b), sq(a)));
        }
    }

    #[test]
    fn test_line_between_adjacent_and_unaligned() {
        assert_eq!(line_between(sq("e1"), sq("e2")), Bitboard::EMPTY);
        assert_eq!(line_between(sq("a1"), sq("c2")), Bitboard::EMPTY);
    }

    #[test]
    fn test_aligned() {
        assert!(aligned(sq("e1"), sq("e8"), sq("e4")));
        assert!(aligned(sq("a1"), sq("c3"), sq("h8"))); // extended line
        assert!(!aligned(sq("e1"), sq("e8"), sq("d4")));
    }
}

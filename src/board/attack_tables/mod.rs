//! Precomputed attack tables.
//!
//! Everything here is immutable after first use and derived from the
//! Kogge-Stone fills: leaper tables, empty-board slider tables, the
//! line-connecting/line-between geometry, and the occupancy-indexed
//! sliding attack tables.

pub(crate) mod kogge;
mod leapers;
mod lines;
mod sliders;

use crate::board::types::{Bitboard, Square};

pub(crate) use lines::{aligned, line_between, line_connecting};
pub(crate) use sliders::{bishop_attacks, rook_attacks};

#[inline]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    leapers::KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    leapers::KING_ATTACKS[sq.index()]
}

/// Bishop attacks on an empty board (pin-candidate detection)
#[inline]
pub(crate) fn bishop_pseudo(sq: Square) -> Bitboard {
    leapers::BISHOP_PSEUDO[sq.index()]
}

/// Rook attacks on an empty board (pin-candidate detection)
#[inline]
pub(crate) fn rook_pseudo(sq: Square) -> Bitboard {
    leapers::ROOK_PSEUDO[sq.index()]
}

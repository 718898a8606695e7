//! Legality analysis: checkers, unsafe squares and pinned pieces.
//!
//! The walker asks these three questions once per node and restricts
//! generation with the answers instead of filtering moves after the fact.

use super::attack_tables::{
    bishop_attacks, bishop_pseudo, king_attacks, knight_attacks, kogge, line_between, rook_attacks,
    rook_pseudo,
};
use super::side::Side;
use super::state::Board;
use super::types::Bitboard;

impl Board {
    /// Enemy pieces currently giving check to our king
    pub(crate) fn checkers<S: Side>(&self) -> Bitboard {
        let ksq = S::king(self);
        let occ = self.occupied();

        ((bishop_attacks(ksq, occ) & self.bishops_queens)
            | (rook_attacks(ksq, occ) & self.rooks_queens)
            | (knight_attacks(ksq) & self.knights)
            | (S::pawn_attacks(Bitboard::from_square(ksq)) & self.pawns))
            & S::their_pieces(self)
    }

    /// Squares attacked by any enemy piece, with our king removed from the
    /// occupancy so that slider rays continue through the king's square.
    pub(crate) fn unsafe_squares<S: Side>(&self) -> Bitboard {
        let ksq = S::king(self);
        let their = S::their_pieces(self);
        let occ = self.occupied() ^ Bitboard::from_square(ksq);

        kogge::bishop_rays_occ(self.bishops_queens & their, occ)
            | kogge::rook_rays_occ(self.rooks_queens & their, occ)
            | kogge::knight_set(self.knights & their)
            | king_attacks(S::their_king(self))
            | <S::Them as Side>::pawn_attacks(self.pawns & their)
    }

    /// Friendly pieces that cannot leave their king's ray.
    ///
    /// A candidate pinner is an enemy slider that reaches the king on an
    /// empty board; the piece between them is pinned when it stands alone.
    pub(crate) fn pinned<S: Side>(&self) -> Bitboard {
        let ksq = S::king(self);
        let friendly = S::pieces(self);
        let enemy = S::their_pieces(self);
        let occ = friendly | enemy;

        let candidates = ((bishop_pseudo(ksq) & self.bishops_queens)
            | (rook_pseudo(ksq) & self.rooks_queens))
            & enemy;

        let mut pinned = Bitboard::EMPTY;
        for candidate in candidates.iter() {
            let maybe_pinned = line_between(ksq, candidate) & occ;
            if maybe_pinned.is_single() {
                pinned |= maybe_pinned & friendly;
            }
        }
        pinned
    }
}

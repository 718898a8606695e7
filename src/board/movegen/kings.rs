//! King moves and castling.

use super::super::attack_tables::king_attacks;
use super::super::side::Side;
use super::super::state::Board;
use super::super::types::Bitboard;
use super::RootMove;

impl Board {
    /// King steps; `targets` excludes friendly pieces and unsafe squares
    pub(super) fn perft_king<S: Side, const DIVIDE: bool, const BULK: bool>(
        &self,
        targets: Bitboard,
        depth: u32,
        sink: &mut Vec<RootMove>,
    ) -> u64 {
        let ksq = S::king(self);
        let mut nodes = 0;

        for to in (king_attacks(ksq) & targets).iter() {
            let mut child = *self;
            child.apply_king::<S>(ksq, to);
            let cnt = child.perft_side::<S::Them, false, BULK>(depth - 1, sink);
            nodes += cnt;
            if DIVIDE {
                sink.push(RootMove::new(ksq, to, None, cnt));
            }
        }

        nodes
    }

    pub(super) fn count_king<S: Side>(&self, targets: Bitboard) -> u64 {
        u64::from((king_attacks(S::king(self)) & targets).popcount())
    }

    /// Castling, only reached when not in check. The rook path must be free
    /// of pieces of either colour and every square the king crosses must be
    /// safe.
    pub(super) fn perft_castling<S: Side, const DIVIDE: bool, const BULK: bool>(
        &self,
        unsafe_sq: Bitboard,
        depth: u32,
        sink: &mut Vec<RootMove>,
    ) -> u64 {
        let ksq = S::king(self);
        let occ = self.occupied();
        let mut nodes = 0;

        if self.castling_rights.has(S::US, true)
            && !occ.intersects(S::SHORT_ROOK_PATH)
            && !unsafe_sq.intersects(S::SHORT_KING_PATH)
        {
            let mut child = *self;
            child.apply_king::<S>(ksq, S::SHORT_KING_DEST);
            let cnt = child.perft_side::<S::Them, false, BULK>(depth - 1, sink);
            nodes += cnt;
            if DIVIDE {
                sink.push(RootMove::new(ksq, S::SHORT_KING_DEST, None, cnt));
            }
        }

        if self.castling_rights.has(S::US, false)
            && !occ.intersects(S::LONG_ROOK_PATH)
            && !unsafe_sq.intersects(S::LONG_KING_PATH)
        {
            let mut child = *self;
            child.apply_king::<S>(ksq, S::LONG_KING_DEST);
            let cnt = child.perft_side::<S::Them, false, BULK>(depth - 1, sink);
            nodes += cnt;
            if DIVIDE {
                sink.push(RootMove::new(ksq, S::LONG_KING_DEST, None, cnt));
            }
        }

        nodes
    }

    pub(super) fn count_castling<S: Side>(&self, unsafe_sq: Bitboard) -> u64 {
        let occ = self.occupied();
        let mut nodes = 0;

        if self.castling_rights.has(S::US, true)
            && !occ.intersects(S::SHORT_ROOK_PATH)
            && !unsafe_sq.intersects(S::SHORT_KING_PATH)
        {
            nodes += 1;
        }
        if self.castling_rights.has(S::US, false)
            && !occ.intersects(S::LONG_ROOK_PATH)
            && !unsafe_sq.intersects(S::LONG_KING_PATH)
        {
            nodes += 1;
        }

        nodes
    }
}

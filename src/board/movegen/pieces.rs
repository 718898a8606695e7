//! Knight and slider walkers.
//!
//! One generic walker serves knights, diagonal movers and orthogonal
//! movers; the `Mover` tag supplies the attack lookup and the matching
//! board mutator. Queens are walked twice, once per sliding board.

use super::super::attack_tables::{aligned, bishop_attacks, knight_attacks, rook_attacks};
use super::super::side::Side;
use super::super::state::Board;
use super::super::types::{Bitboard, Square};
use super::RootMove;

pub(super) trait Mover {
    fn attacks(from: Square, occ: Bitboard) -> Bitboard;
    fn apply<S: Side>(board: &mut Board, from: Square, to: Square);
}

pub(super) enum Knights {}
pub(super) enum Bishops {}
pub(super) enum Rooks {}

impl Mover for Knights {
    #[inline]
    fn attacks(from: Square, _occ: Bitboard) -> Bitboard {
        knight_attacks(from)
    }

    #[inline]
    fn apply<S: Side>(board: &mut Board, from: Square, to: Square) {
        board.apply_knight::<S>(from, to);
    }
}

impl Mover for Bishops {
    #[inline]
    fn attacks(from: Square, occ: Bitboard) -> Bitboard {
        bishop_attacks(from, occ)
    }

    #[inline]
    fn apply<S: Side>(board: &mut Board, from: Square, to: Square) {
        board.apply_bishop::<S>(from, to);
    }
}

impl Mover for Rooks {
    #[inline]
    fn attacks(from: Square, occ: Bitboard) -> Bitboard {
        rook_attacks(from, occ)
    }

    #[inline]
    fn apply<S: Side>(board: &mut Board, from: Square, to: Square) {
        board.apply_rook::<S>(from, to);
    }
}

impl Board {
    pub(super) fn perft_movers<
        S: Side,
        M: Mover,
        const PINNED: bool,
        const DIVIDE: bool,
        const BULK: bool,
    >(
        &self,
        pieces: Bitboard,
        targets: Bitboard,
        depth: u32,
        sink: &mut Vec<RootMove>,
    ) -> u64 {
        let ksq = S::king(self);
        let occ = self.occupied();
        let mut nodes = 0;

        for from in pieces.iter() {
            for to in (M::attacks(from, occ) & targets).iter() {
                if PINNED && !aligned(ksq, from, to) {
                    continue;
                }

                let mut child = *self;
                M::apply::<S>(&mut child, from, to);
                let cnt = child.perft_side::<S::Them, false, BULK>(depth - 1, sink);
                nodes += cnt;
                if DIVIDE {
                    sink.push(RootMove::new(from, to, None, cnt));
                }
            }
        }

        nodes
    }

    pub(super) fn count_movers<S: Side, M: Mover, const PINNED: bool>(
        &self,
        pieces: Bitboard,
        targets: Bitboard,
    ) -> u64 {
        let ksq = S::king(self);
        let occ = self.occupied();
        let mut nodes = 0;

        for from in pieces.iter() {
            let attacks = M::attacks(from, occ) & targets;
            if PINNED {
                for to in attacks.iter() {
                    if aligned(ksq, from, to) {
                        nodes += 1;
                    }
                }
            } else {
                nodes += u64::from(attacks.popcount());
            }
        }

        nodes
    }
}

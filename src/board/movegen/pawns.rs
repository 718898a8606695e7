//! Pawn walkers.
//!
//! Pawn generation is written out arm by arm because pawn moves are
//! asymmetric: pushes, double pushes, captures toward either side, the
//! promotion variants of each, and en passant. Every arm shifts the whole
//! pawn set at once and recovers the origin square from the destination.

use super::super::attack_tables::{aligned, bishop_attacks, rook_attacks};
use super::super::side::Side;
use super::super::state::Board;
use super::super::types::{Bitboard, Square, PROMOTIONS};
use super::RootMove;

impl Board {
    /// True if capturing en passant with the pawn on `from` would uncover a
    /// slider on our king. Removing two pawns from the board at once is the
    /// one case the pre-move pin mask cannot decide, so the rays are probed
    /// on the post-capture occupancy.
    fn ep_exposes_check<S: Side>(&self, from: Square, ep: Square) -> bool {
        let ksq = S::king(self);
        let their = S::their_pieces(self);
        let captured = S::behind(ep);
        let occ = (self.occupied()
            ^ Bitboard::from_square(from)
            ^ Bitboard::from_square(captured))
            | Bitboard::from_square(ep);

        !(bishop_attacks(ksq, occ) & self.bishops_queens & their).is_empty()
            || !(rook_attacks(ksq, occ) & self.rooks_queens & their).is_empty()
    }

    pub(super) fn perft_pawns<S: Side, const PINNED: bool, const DIVIDE: bool, const BULK: bool>(
        &self,
        pawns: Bitboard,
        targets: Bitboard,
        depth: u32,
        sink: &mut Vec<RootMove>,
    ) -> u64 {
        let ksq = S::king(self);
        let enemy = S::their_pieces(self);
        let occ = self.occupied();
        let empty = !occ;
        let mut nodes = 0;

        // En passant; the captured pawn's square has to be a target so that
        // capturing a checking pawn stays available in check
        if let Some(ep) = self.en_passant {
            if targets.contains(S::behind(ep)) {
                let candidates =
                    <S::Them as Side>::pawn_attacks(Bitboard::from_square(ep)) & pawns;
                for from in candidates.iter() {
                    if self.ep_exposes_check::<S>(from, ep) {
                        continue;
                    }
                    let mut child = *self;
                    child.apply_pawn::<S>(from, ep);
                    let cnt = child.perft_side::<S::Them, false, BULK>(depth - 1, sink);
                    nodes += cnt;
                    if DIVIDE {
                        sink.push(RootMove::new(from, ep, None, cnt));
                    }
                }
            }
        }

        let on_seventh = pawns & S::RANK_7;
        let below_seventh = pawns & !S::RANK_7;

        // Single pushes; kept before the target mask so double pushes can
        // pass through a square that is not itself a legal destination
        let single_push = S::up(below_seventh) & empty;

        for to in (single_push & targets).iter() {
            let from = S::behind(to);
            if PINNED && !aligned(ksq, from, to) {
                continue;
            }
            let mut child = *self;
            child.apply_pawn::<S>(from, to);
            let cnt = child.perft_side::<S::Them, false, BULK>(depth - 1, sink);
            nodes += cnt;
            if DIVIDE {
                sink.push(RootMove::new(from, to, None, cnt));
            }
        }

        // Double pushes
        for to in (S::up(single_push & S::RANK_3) & empty & targets).iter() {
            let from = S::behind(S::behind(to));
            if PINNED && !aligned(ksq, from, to) {
                continue;
            }
            let mut child = *self;
            child.apply_pawn::<S>(from, to);
            let cnt = child.perft_side::<S::Them, false, BULK>(depth - 1, sink);
            nodes += cnt;
            if DIVIDE {
                sink.push(RootMove::new(from, to, None, cnt));
            }
        }

        // Promotion pushes. A pinned pawn can never promote by pushing: the
        // push leaves its file-or-diagonal pin ray
        if !PINNED {
            for to in (S::up(on_seventh) & empty & targets).iter() {
                let from = S::behind(to);
                nodes += self.perft_promotions::<S, DIVIDE, BULK>(from, to, depth, sink);
            }
        }

        // Captures without promotion
        for to in (S::up_west(below_seventh) & enemy & targets).iter() {
            let from = S::west_origin(to);
            if PINNED && !aligned(ksq, from, to) {
                continue;
            }
            let mut child = *self;
            child.apply_pawn::<S>(from, to);
            let cnt = child.perft_side::<S::Them, false, BULK>(depth - 1, sink);
            nodes += cnt;
            if DIVIDE {
                sink.push(RootMove::new(from, to, None, cnt));
            }
        }

        for to in (S::up_east(below_seventh) & enemy & targets).iter() {
            let from = S::east_origin(to);
            if PINNED && !aligned(ksq, from, to) {
                continue;
            }
            let mut child = *self;
            child.apply_pawn::<S>(from, to);
            let cnt = child.perft_side::<S::Them, false, BULK>(depth - 1, sink);
            nodes += cnt;
            if DIVIDE {
                sink.push(RootMove::new(from, to, None, cnt));
            }
        }

        // Promotion captures
        for to in (S::up_west(on_seventh) & enemy & targets).iter() {
            let from = S::west_origin(to);
            if PINNED && !aligned(ksq, from, to) {
                continue;
            }
            nodes += self.perft_promotions::<S, DIVIDE, BULK>(from, to, depth, sink);
        }

        for to in (S::up_east(on_seventh) & enemy & targets).iter() {
            let from = S::east_origin(to);
            if PINNED && !aligned(ksq, from, to) {
                continue;
            }
            nodes += self.perft_promotions::<S, DIVIDE, BULK>(from, to, depth, sink);
        }

        nodes
    }

    /// One push or capture onto the last rank: four moves
    fn perft_promotions<S: Side, const DIVIDE: bool, const BULK: bool>(
        &self,
        from: Square,
        to: Square,
        depth: u32,
        sink: &mut Vec<RootMove>,
    ) -> u64 {
        let mut nodes = 0;
        for promo in PROMOTIONS {
            let mut child = *self;
            child.apply_promotion::<S>(from, to, promo);
            let cnt = child.perft_side::<S::Them, false, BULK>(depth - 1, sink);
            nodes += cnt;
            if DIVIDE {
                sink.push(RootMove::new(from, to, Some(promo), cnt));
            }
        }
        nodes
    }

    pub(super) fn count_pawns<S: Side, const PINNED: bool>(
        &self,
        pawns: Bitboard,
        targets: Bitboard,
    ) -> u64 {
        let ksq = S::king(self);
        let enemy = S::their_pieces(self);
        let occ = self.occupied();
        let empty = !occ;
        let mut nodes = 0;

        if let Some(ep) = self.en_passant {
            if targets.contains(S::behind(ep)) {
                let candidates =
                    <S::Them as Side>::pawn_attacks(Bitboard::from_square(ep)) & pawns;
                for from in candidates.iter() {
                    if !self.ep_exposes_check::<S>(from, ep) {
                        nodes += 1;
                    }
                }
            }
        }

        let on_seventh = pawns & S::RANK_7;
        let below_seventh = pawns & !S::RANK_7;

        let single_push = S::up(below_seventh) & empty;

        let pushes = single_push & targets;
        if PINNED {
            for to in pushes.iter() {
                if aligned(ksq, S::behind(to), to) {
                    nodes += 1;
                }
            }
        } else {
            nodes += u64::from(pushes.popcount());
        }

        let doubles = S::up(single_push & S::RANK_3) & empty & targets;
        if PINNED {
            for to in doubles.iter() {
                if aligned(ksq, S::behind(S::behind(to)), to) {
                    nodes += 1;
                }
            }
        } else {
            nodes += u64::from(doubles.popcount());
        }

        if !PINNED {
            nodes += u64::from((S::up(on_seventh) & empty & targets).popcount()) * 4;
        }

        let west_captures = S::up_west(below_seventh) & enemy & targets;
        if PINNED {
            for to in west_captures.iter() {
                if aligned(ksq, S::west_origin(to), to) {
                    nodes += 1;
                }
            }
        } else {
            nodes += u64::from(west_captures.popcount());
        }

        let east_captures = S::up_east(below_seventh) & enemy & targets;
        if PINNED {
            for to in east_captures.iter() {
                if aligned(ksq, S::east_origin(to), to) {
                    nodes += 1;
                }
            }
        } else {
            nodes += u64::from(east_captures.popcount());
        }

        let west_promos = S::up_west(on_seventh) & enemy & targets;
        if PINNED {
            for to in west_promos.iter() {
                if aligned(ksq, S::west_origin(to), to) {
                    nodes += 4;
                }
            }
        } else {
            nodes += u64::from(west_promos.popcount()) * 4;
        }

        let east_promos = S::up_east(on_seventh) & enemy & targets;
        if PINNED {
            for to in east_promos.iter() {
                if aligned(ksq, S::east_origin(to), to) {
                    nodes += 4;
                }
            }
        } else {
            nodes += u64::from(east_promos.popcount()) * 4;
        }

        nodes
    }
}

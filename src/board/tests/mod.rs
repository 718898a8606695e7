//! Board module tests.
//!
//! - `perft.rs` - reference node counts for the walker, bulk and unbulked
//! - `edge_cases.rs` - checks, pins, en passant and castling corner cases
//! - `proptest.rs` - property-based random-walk tests

mod edge_cases;

use super::side::{Black, White};
use super::state::Board;
use super::types::{Bitboard, Color};

/// Structural invariants that must hold for every reachable board
pub(super) fn assert_consistent(board: &Board) {
    assert!(
        (board.white_pieces & board.black_pieces).is_empty(),
        "colour occupancies overlap"
    );

    let kinds = board.pawns | board.knights | board.bishops_queens | board.rooks_queens;
    let kings = Bitboard::from_square(board.white_king) | Bitboard::from_square(board.black_king);
    assert_eq!(
        kinds | kings,
        board.occupied(),
        "piece-kind boards and kings disagree with the occupancy"
    );
    assert!(
        (kinds & kings).is_empty(),
        "a king square appears in a piece-kind board"
    );
    assert!(
        (board.pawns & board.knights).is_empty(),
        "pawn and knight boards overlap"
    );

    assert!(board.white_pieces.popcount() <= 16);
    assert!(board.black_pieces.popcount() <= 16);

    // Kings on distinct, non-adjacent squares
    let wk = board.white_king;
    let bk = board.black_king;
    let rank_gap = wk.rank().abs_diff(bk.rank());
    let file_gap = wk.file().abs_diff(bk.file());
    assert!(rank_gap.max(file_gap) >= 2, "kings adjacent: {wk} vs {bk}");

    if let Some(ep) = board.en_passant {
        assert!(
            ep.rank() == 2 || ep.rank() == 5,
            "en passant square {ep} off the third/sixth rank"
        );
    }
}

pub(super) fn in_check(board: &Board, color: Color) -> bool {
    match color {
        Color::White => !board.checkers::<White>().is_empty(),
        Color::Black => !board.checkers::<Black>().is_empty(),
    }
}

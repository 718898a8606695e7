//! Compile-time specialization by side to move.
//!
//! Every hot-path routine is generic over a `Side`, so the compiler emits
//! one monomorphic copy per colour with the pawn direction, relative ranks
//! and castling geometry folded to constants. `White` and `Black` are
//! uninhabited tag types; `Them` flips the side for the recursion.

use super::state::Board;
use super::types::{Bitboard, Color, Square};

pub(crate) trait Side {
    const US: Color;
    type Them: Side;

    /// Relative third rank (double pushes pass through it)
    const RANK_3: Bitboard;
    /// Relative seventh rank (pawns here promote)
    const RANK_7: Bitboard;

    const SHORT_KING_DEST: Square;
    const LONG_KING_DEST: Square;
    /// Rook source|destination pair for each castle
    const SHORT_ROOK_MASK: Bitboard;
    const LONG_ROOK_MASK: Bitboard;
    /// Squares the king crosses, destination included; must all be safe
    const SHORT_KING_PATH: Bitboard;
    const LONG_KING_PATH: Bitboard;
    /// Squares between rook and king, rook destination included; must be empty
    const SHORT_ROOK_PATH: Bitboard;
    const LONG_ROOK_PATH: Bitboard;

    fn king(board: &Board) -> Square;
    fn their_king(board: &Board) -> Square;
    fn set_king(board: &mut Board, sq: Square);
    fn pieces(board: &Board) -> Bitboard;
    fn their_pieces(board: &Board) -> Bitboard;
    fn pieces_mut(board: &mut Board) -> &mut Bitboard;
    fn their_pieces_mut(board: &mut Board) -> &mut Bitboard;

    /// Shift toward the promotion rank
    fn up(bb: Bitboard) -> Bitboard;
    fn up_west(bb: Bitboard) -> Bitboard;
    fn up_east(bb: Bitboard) -> Bitboard;

    /// One square toward the home rank
    fn behind(sq: Square) -> Square;
    /// Origin of an up-west capture landing on `to`
    fn west_origin(to: Square) -> Square;
    /// Origin of an up-east capture landing on `to`
    fn east_origin(to: Square) -> Square;

    /// Squares attacked by every pawn on `pawns`
    #[inline]
    fn pawn_attacks(pawns: Bitboard) -> Bitboard {
        Self::up_west(pawns) | Self::up_east(pawns)
    }
}

pub(crate) enum White {}
pub(crate) enum Black {}

impl Side for White {
    const US: Color = Color::White;
    type Them = Black;

    const RANK_3: Bitboard = Bitboard::RANK_3;
    const RANK_7: Bitboard = Bitboard::RANK_7;

    const SHORT_KING_DEST: Square = Square::new(0, 6); // g1
    const LONG_KING_DEST: Square = Square::new(0, 2); // c1
    const SHORT_ROOK_MASK: Bitboard = Bitboard(0xA0); // h1, f1
    const LONG_ROOK_MASK: Bitboard = Bitboard(0x09); // a1, d1
    const SHORT_KING_PATH: Bitboard = Bitboard(0x60); // f1, g1
    const LONG_KING_PATH: Bitboard = Bitboard(0x0C); // c1, d1
    const SHORT_ROOK_PATH: Bitboard = Bitboard(0x60); // f1, g1
    const LONG_ROOK_PATH: Bitboard = Bitboard(0x0E); // b1, c1, d1

    #[inline]
    fn king(board: &Board) -> Square {
        board.white_king
    }

    #[inline]
    fn their_king(board: &Board) -> Square {
        board.black_king
    }

    #[inline]
    fn set_king(board: &mut Board, sq: Square) {
        board.white_king = sq;
    }

    #[inline]
    fn pieces(board: &Board) -> Bitboard {
        board.white_pieces
    }

    #[inline]
    fn their_pieces(board: &Board) -> Bitboard {
        board.black_pieces
    }

    #[inline]
    fn pieces_mut(board: &mut Board) -> &mut Bitboard {
        &mut board.white_pieces
    }

    #[inline]
    fn their_pieces_mut(board: &mut Board) -> &mut Bitboard {
        &mut board.black_pieces
    }

    #[inline]
    fn up(bb: Bitboard) -> Bitboard {
        bb.shift_north()
    }

    #[inline]
    fn up_west(bb: Bitboard) -> Bitboard {
        bb.shift_north_west()
    }

    #[inline]
    fn up_east(bb: Bitboard) -> Bitboard {
        bb.shift_north_east()
    }

    #[inline]
    fn behind(sq: Square) -> Square {
        Square::from_index(sq.index() - 8)
    }

    #[inline]
    fn west_origin(to: Square) -> Square {
        Square::from_index(to.index() - 7)
    }

    #[inline]
    fn east_origin(to: Square) -> Square {
        Square::from_index(to.index() - 9)
    }
}

impl Side for Black {
    const US: Color = Color::Black;
    type Them = White;

    const RANK_3: Bitboard = Bitboard::RANK_6;
    const RANK_7: Bitboard = Bitboard::RANK_2;

    const SHORT_KING_DEST: Square = Square::new(7, 6); // g8
    const LONG_KING_DEST: Square = Square::new(7, 2); // c8
    const SHORT_ROOK_MASK: Bitboard = Bitboard(0xA0 << 56); // h8, f8
    const LONG_ROOK_MASK: Bitboard = Bitboard(0x09 << 56); // a8, d8
    const SHORT_KING_PATH: Bitboard = Bitboard(0x60 << 56); // f8, g8
    const LONG_KING_PATH: Bitboard = Bitboard(0x0C << 56); // c8, d8
    const SHORT_ROOK_PATH: Bitboard = Bitboard(0x60 << 56); // f8, g8
    const LONG_ROOK_PATH: Bitboard = Bitboard(0x0E << 56); // b8, c8, d8

    #[inline]
    fn king(board: &Board) -> Square {
        board.black_king
    }

    #[inline]
    fn their_king(board: &Board) -> Square {
        board.white_king
    }

    #[inline]
    fn set_king(board: &mut Board, sq: Square) {
        board.black_king = sq;
    }

    #[inline]
    fn pieces(board: &Board) -> Bitboard {
        board.black_pieces
    }

    #[inline]
    fn their_pieces(board: &Board) -> Bitboard {
        board.white_pieces
    }

    #[inline]
    fn pieces_mut(board: &mut Board) -> &mut Bitboard {
        &mut board.black_pieces
    }

    #[inline]
    fn their_pieces_mut(board: &mut Board) -> &mut Bitboard {
        &mut board.white_pieces
    }

    #[inline]
    fn up(bb: Bitboard) -> Bitboard {
        bb.shift_south()
    }

    #[inline]
    fn up_west(bb: Bitboard) -> Bitboard {
        bb.shift_south_west()
    }

    #[inline]
    fn up_east(bb: Bitboard) -> Bitboard {
        bb.shift_south_east()
    }

    #[inline]
    fn behind(sq: Square) -> Square {
        Square::from_index(sq.index() + 8)
    }

    #[inline]
    fn west_origin(to: Square) -> Square {
        Square::from_index(to.index() + 9)
    }

    #[inline]
    fn east_origin(to: Square) -> Square {
        Square::from_index(to.index() + 7)
    }
}

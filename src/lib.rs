//! Perft calculator built on a strictly-legal bitboard move generator.
//!
//! The generator never produces an illegal move: pins, check evasions and
//! king safety are resolved with bitboard masks before a move is made, so
//! there is no make/unmake-and-test step. At the lowest level of the tree
//! the walker counts leaves with popcounts instead of applying moves.
//!
//! # Quick start
//!
//! ```
//! use perft::board::{perft, Board};
//!
//! let board = Board::new();
//! assert_eq!(perft(&board, 1), 20);
//! assert_eq!(perft(&board, 2), 400);
//! ```
//!
//! # Positions and moves
//!
//! ```
//! use perft::board::{perft, Board};
//!
//! let mut board =
//!     Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").unwrap();
//! board.make_move_uci("e2e4").unwrap();
//! board.make_move_uci("e7e5").unwrap();
//! assert_eq!(perft(&board, 1), 29);
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Color`, `Piece`, `Square` and
//!   `CastlingRights`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Index casts are ubiquitous and safe here (square and table indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;

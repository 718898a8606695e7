//! FEN parsing/emitting and UCI move application.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::side::{Black, White};
use super::state::Board;
use super::types::{Color, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The four positional fields are required; halfmove and fullmove
    /// counters are accepted and ignored. Fields may be separated by any
    /// amount of whitespace.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let fields: Vec<&str> = fen.split_whitespace().collect();

        if fields.len() < 4 {
            return Err(FenError::TooFewFields {
                found: fields.len(),
            });
        }

        // Piece placement, rank 8 first
        let mut kings_seen = (false, false);
        for (rank_idx, rank_str) in fields[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::TooManyRanks);
            }
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    let run = run as usize;
                    if run == 0 || file + run > 8 {
                        return Err(FenError::BadRunLength { char: c });
                    }
                    file += run;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::UnknownPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::BadRunLength { char: c });
                    }
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if piece == Piece::King {
                        match color {
                            Color::White => kings_seen.0 = true,
                            Color::Black => kings_seen.1 = true,
                        }
                    }
                    board.set_piece(Square::new(rank, file), color, piece);
                    file += 1;
                }
            }
        }
        if !kings_seen.0 {
            return Err(FenError::MissingKing {
                color: Color::White,
            });
        }
        if !kings_seen.1 {
            return Err(FenError::MissingKing {
                color: Color::Black,
            });
        }

        // Side to move
        board.side = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Castling rights
        for c in fields[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, true),
                'Q' => board.castling_rights.set(Color::White, false),
                'k' => board.castling_rights.set(Color::Black, true),
                'q' => board.castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        // En passant target
        board.en_passant = if fields[3] == "-" {
            None
        } else {
            match fields[3].parse::<Square>() {
                Ok(sq) => Some(sq),
                Err(_) => {
                    return Err(FenError::InvalidEnPassant {
                        found: fields[3].to_string(),
                    })
                }
            }
        };

        Ok(board)
    }

    /// Convert the board position to FEN notation.
    ///
    /// Move counters are not tracked and emit as "0 1".
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        placement.push_str(&empty.to_string());
                        empty = 0;
                    }
                    placement.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = if self.side == Color::White { "w" } else { "b" };

        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling_rights.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{placement} {side} {castling} {ep} 0 1")
    }

    /// Parse a move in UCI long algebraic notation (e.g. "e2e4", "e7e8q")
    /// and apply it to the board.
    ///
    /// The mover is picked from the piece sitting on the source square; only
    /// well-formed legal moves are handled. This path sets up root positions
    /// and is not used by the perft walker.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<(), MoveParseError> {
        if uci.len() != 4 && uci.len() != 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }
        if !uci.is_ascii() {
            return Err(MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            });
        }

        let from = uci[0..2]
            .parse::<Square>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            })?;
        let to = uci[2..4]
            .parse::<Square>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            })?;

        if uci.len() == 5 {
            let c = uci.as_bytes()[4] as char;
            let promo = match Piece::from_char(c) {
                Some(p @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => p,
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            };
            if !self.pawns.contains(from) {
                return Err(MoveParseError::NoPieceOnSquare {
                    square: from.to_string(),
                });
            }
            match self.side {
                Color::White => self.apply_promotion::<White>(from, to, promo),
                Color::Black => self.apply_promotion::<Black>(from, to, promo),
            }
            return Ok(());
        }

        if self.pawns.contains(from) {
            match self.side {
                Color::White => self.apply_pawn::<White>(from, to),
                Color::Black => self.apply_pawn::<Black>(from, to),
            }
        } else if self.knights.contains(from) {
            match self.side {
                Color::White => self.apply_knight::<White>(from, to),
                Color::Black => self.apply_knight::<Black>(from, to),
            }
        } else if self.bishops_queens.contains(from) {
            match self.side {
                Color::White => self.apply_bishop::<White>(from, to),
                Color::Black => self.apply_bishop::<Black>(from, to),
            }
        } else if self.rooks_queens.contains(from) {
            match self.side {
                Color::White => self.apply_rook::<White>(from, to),
                Color::Black => self.apply_rook::<Black>(from, to),
            }
        } else if self.white_king == from && self.side == Color::White {
            self.apply_king::<White>(from, to);
        } else if self.black_king == from && self.side == Color::Black {
            self.apply_king::<Black>(from, to);
        } else {
            return Err(MoveParseError::NoPieceOnSquare {
                square: from.to_string(),
            });
        }

        Ok(())
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

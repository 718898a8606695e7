//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as a compact 0-63 index.
///
/// Index layout: rank * 8 + file, where a1=0, b1=1, ..., h8=63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a new square from rank and file (both 0-7).
    /// Does not perform bounds checking.
    #[inline]
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Self {
        Square((rank * 8 + file) as u8)
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 % 8) as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.file() as u8 + b'a') as char,
            self.rank() + 1
        )
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_c), Some(rank_c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        };

        if !('a'..='h').contains(&file_c) || !('1'..='8').contains(&rank_c) {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = file_c as usize - 'a' as usize;
        let rank = rank_c as usize - '1' as usize;
        Ok(Square::new(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_index_layout() {
        assert_eq!(Square::new(0, 0).index(), 0); // a1
        assert_eq!(Square::new(0, 7).index(), 7); // h1
        assert_eq!(Square::new(7, 0).index(), 56); // a8
        assert_eq!(Square::new(7, 7).index(), 63); // h8
    }

    #[test]
    fn test_square_rank_file() {
        let e4 = Square::new(3, 4);
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.index(), 28);
    }

    #[test]
    fn test_square_display() {
        assert_eq!(Square::new(0, 0).to_string(), "a1");
        assert_eq!(Square::new(3, 4).to_string(), "e4");
        assert_eq!(Square::new(7, 7).to_string(), "h8");
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("a1".parse::<Square>().unwrap(), Square::new(0, 0));
        assert_eq!("e4".parse::<Square>().unwrap(), Square::new(3, 4));
        assert_eq!("h8".parse::<Square>().unwrap(), Square::new(7, 7));
    }

    #[test]
    fn test_square_from_str_invalid() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a1x".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_round_trip() {
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
        }
    }
}

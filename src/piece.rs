//! Piece color and kind tags plus their metadata queries
//!
//! A piece is the pairing of a color and a kind; a board square holds
//! `Option<Piece>`. The metadata here (display names, material values,
//! pawn geometry) is read by the display layer for captions and score
//! text - it carries no rules authority. Movement legality lives in
//! [`crate::rules`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of a piece or player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The opposing side
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row offset a pawn of this color advances by
    ///
    /// White pawns march toward row 0, Black pawns toward row 7.
    pub fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Row this color's pawns start on (and may double-step from)
    pub fn pawn_start_row(self) -> u8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Row on which a pawn of this color promotes
    pub fn promotion_row(self) -> u8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "White"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}

/// Kind of a chess piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    #[default]
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    /// Standard material value in pawn units
    ///
    /// Pawn 1, Knight/Bishop 3, Rook 5, Queen 9. The king has value 0 -
    /// it is never captured, the game ends in checkmate instead.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Rook => "Rook",
            PieceKind::Pawn => "Pawn",
        };
        write!(f, "{name}")
    }
}

/// A piece on the board: a color and a kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: PieceColor, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// Human-readable name for captions and logs, e.g. "White Pawn"
    pub fn name(&self) -> String {
        format!("{} {}", self.color, self.kind)
    }

    /// Material value of this piece's kind
    pub fn value(&self) -> u32 {
        self.kind.value()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_values() {
        //! Verifies standard chess piece values
        assert_eq!(PieceKind::Pawn.value(), 1);
        assert_eq!(PieceKind::Knight.value(), 3);
        assert_eq!(PieceKind::Bishop.value(), 3);
        assert_eq!(PieceKind::Rook.value(), 5);
        assert_eq!(PieceKind::Queen.value(), 9);
        assert_eq!(PieceKind::King.value(), 0);
    }

    #[test]
    fn test_piece_names() {
        //! Tests the caption text read by the display layer
        assert_eq!(Piece::new(PieceColor::White, PieceKind::Pawn).name(), "White Pawn");
        assert_eq!(Piece::new(PieceColor::Black, PieceKind::Queen).name(), "Black Queen");
        assert_eq!(Piece::new(PieceColor::White, PieceKind::Knight).name(), "White Knight");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PieceColor::White.opponent(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opponent(), PieceColor::White);
    }

    #[test]
    fn test_pawn_geometry() {
        //! White pawns advance toward row 0 from row 6; Black mirrors
        assert_eq!(PieceColor::White.pawn_direction(), -1);
        assert_eq!(PieceColor::Black.pawn_direction(), 1);
        assert_eq!(PieceColor::White.pawn_start_row(), 6);
        assert_eq!(PieceColor::Black.pawn_start_row(), 1);
        assert_eq!(PieceColor::White.promotion_row(), 0);
        assert_eq!(PieceColor::Black.promotion_row(), 7);
    }
}

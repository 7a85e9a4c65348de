//! Board model - the 8x8 grid and its query/mutate primitives
//!
//! The board is the sole source of truth for piece positions. All other
//! components are pure functions over it; mutation happens only through
//! [`Board::set`] or through a scoped [`TrialMove`], which restores the
//! prior state when dropped.
//!
//! # Orientation
//!
//! Row 0 is Black's back rank, row 7 White's. White pawns therefore
//! advance toward row 0. Columns run a-h left to right, so
//! `Square::new(7, 4)` is e1 and `Square::new(0, 4)` is e8.

use std::fmt;

use crate::piece::{Piece, PieceColor, PieceKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A board coordinate: row and column, each in `0..8`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    /// Check if both coordinates are on the board
    pub fn in_bounds(&self) -> bool {
        self.row < 8 && self.col < 8
    }
}

impl fmt::Display for Square {
    /// Algebraic notation: file letter then rank number, e.g. `e4`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}

/// The 8x8 grid of square contents
///
/// `Clone + PartialEq` so that simulate/undo round trips can be asserted
/// directly in tests. Accessors take [`Square`]s that must be in bounds.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create a board with no pieces on it
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Create a board set up in the standard opening position
    ///
    /// Black's back rank on row 0 with its pawns on row 1, mirrored for
    /// White on rows 7 and 6, everything else empty.
    pub fn starting_position() -> Self {
        const BACK_ROW: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for col in 0..8 {
            let kind = BACK_ROW[col as usize];
            board.set(Square::new(0, col), Some(Piece::new(PieceColor::Black, kind)));
            board.set(
                Square::new(1, col),
                Some(Piece::new(PieceColor::Black, PieceKind::Pawn)),
            );
            board.set(
                Square::new(6, col),
                Some(Piece::new(PieceColor::White, PieceKind::Pawn)),
            );
            board.set(Square::new(7, col), Some(Piece::new(PieceColor::White, kind)));
        }
        board
    }

    /// Get the piece on a square, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    /// Put a piece (or nothing) on a square
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Check if a square holds no piece
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Iterate over every occupied square
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(col, piece)| {
                piece.map(|piece| (Square::new(row as u8, col as u8), piece))
            })
        })
    }

    /// Locate the given color's king
    ///
    /// Exactly one king per color must be on the board during play;
    /// `None` means the position was set up outside that contract, not a
    /// state reachable through the session.
    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    /// Render the grid one rank per line, uppercase for White pieces
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in &self.squares {
            for square in rank {
                write!(f, "{}", square.map_or('.', glyph))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn glyph(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        PieceColor::White => ch.to_ascii_uppercase(),
        PieceColor::Black => ch,
    }
}

/// Scoped application of a move, used for king-safety look-ahead
///
/// Constructing the guard moves the piece and remembers what both squares
/// held; dropping it puts them back. [`TrialMove::commit`] consumes the
/// guard without restoring, which is how the session makes a move
/// permanent. Because restoration runs in `Drop`, every exit path out of
/// a simulation - early returns included - leaves the board exactly as it
/// was found.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    moved: Option<Piece>,
    captured: Option<Piece>,
    committed: bool,
}

impl<'a> TrialMove<'a> {
    /// Apply `from -> to`, recording the prior contents of both squares
    pub fn apply(board: &'a mut Board, from: Square, to: Square) -> Self {
        let moved = board.get(from);
        let captured = board.get(to);
        board.set(to, moved);
        board.set(from, None);
        TrialMove {
            board,
            from,
            to,
            moved,
            captured,
            committed: false,
        }
    }

    /// The board with the trial move applied
    pub fn board(&self) -> &Board {
        self.board
    }

    /// The piece the destination held before the move, if any
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Keep the move: the guard no longer restores on drop
    ///
    /// Returns the captured piece so the caller can award its value.
    pub fn commit(mut self) -> Option<Piece> {
        self.committed = true;
        self.captured
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.board.set(self.from, self.moved);
            self.board.set(self.to, self.captured);
        }
    }
}

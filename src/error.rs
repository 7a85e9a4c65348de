//! Error types for the rules engine
//!
//! The rules predicates themselves are total boolean classifications - an
//! illegal move is a `false`, never an error. These variants exist only
//! at the session commit surface, where a rejected move reports why it
//! was rejected so the caller can tell the player.

use thiserror::Error;

use crate::board::Square;
use crate::piece::PieceKind;

/// Errors that can occur when submitting a move to a game session
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Move failed the shape/ownership/friendly-fire gate
    #[error("Invalid move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// Legal-shape move that would leave the mover's own king attacked
    #[error("Invalid move: {from} to {to} leaves the king in check")]
    ExposesKing { from: Square, to: Square },

    /// The game has already ended; no further moves are accepted
    #[error("The game is over")]
    GameOver,

    /// A pawn is waiting on its promotion choice
    #[error("Promotion pending on {square}: choose a replacement piece first")]
    PromotionPending { square: Square },

    /// No pawn is waiting to be promoted
    #[error("No promotion is pending")]
    NoPendingPromotion,

    /// Pawns promote only to queen, rook, bishop or knight
    #[error("Cannot promote a pawn to {kind}")]
    InvalidPromotion { kind: PieceKind },
}

/// Result type alias for session operations
pub type MoveResult<T> = Result<T, MoveError>;

//! Two-player chess rules engine - pure game logic without rendering
//! coupling
//!
//! Given a board position and a proposed move, this crate decides
//! legality, updates state and detects check, checkmate and stalemate.
//! Rendering, input mapping and the promotion-choice dialog are external
//! collaborators: they call into [`session::GameSession`] and read result
//! values back, holding no rules logic of their own.
//!
//! # Module Organization
//!
//! - [`piece`] - Piece color/kind tags and their metadata (names,
//!   material values, pawn geometry)
//! - [`board`] - The 8x8 grid, its accessors and the scoped trial-move
//!   guard used for king-safety look-ahead
//! - [`rules`] - Pure movement predicates, the legality gate, the
//!   king-safety oracle and terminal-state detection
//! - [`session`] - Per-game state (turn, scores, status) and the move
//!   commit flow
//! - [`error`] - Rejection reasons surfaced at the session boundary
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), chess_rules::MoveError> {
//! use chess_rules::{GameSession, Square};
//!
//! let mut session = GameSession::new();
//!
//! // 1. e4 - white pawn two squares up the e-file
//! let outcome = session.try_move(Square::new(6, 4), Square::new(4, 4))?;
//! assert!(outcome.capture.is_none());
//! assert!(!outcome.check);
//! # Ok(())
//! # }
//! ```
//!
//! # Not implemented
//!
//! Castling, en passant, draw-by-repetition and the fifty-move rule are
//! outside this engine's rule set, as are notation parsing, clocks and
//! any search/AI.

pub mod board;
pub mod error;
pub mod piece;
pub mod rules;
pub mod session;

pub use board::{Board, Square, TrialMove};
pub use error::{MoveError, MoveResult};
pub use piece::{Piece, PieceColor, PieceKind};
pub use rules::{is_check, is_checkmate, is_stalemate, is_valid_move, possible_moves};
pub use session::{GameSession, GameStatus, MoveOutcome};

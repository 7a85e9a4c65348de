//! Game session state and the move commit flow
//!
//! A [`GameSession`] owns the board plus the per-game bookkeeping: whose
//! turn it is, the running capture scores, the check flag for the side to
//! move and the terminal status. The session is a plain value owned by
//! the caller - there is no global state - and every rules query runs
//! through it synchronously on the calling thread.
//!
//! # Commit flow
//!
//! [`GameSession::try_move`] runs the legality gate, then simulates the
//! move and consults the king-safety oracle before committing: a move
//! that would leave the mover's own king attacked is rejected with the
//! board untouched. On success the capture score is awarded, the turn
//! flips and the new position is classified as ongoing, check, checkmate
//! or stalemate. A pawn reaching its promotion row pauses the flow until
//! the caller supplies a replacement kind via [`GameSession::promote`] -
//! the promoted piece takes part in the classification, so a promotion
//! can deliver immediate checkmate.

use tracing::info;

use crate::board::{Board, Square, TrialMove};
use crate::error::{MoveError, MoveResult};
use crate::piece::{Piece, PieceColor, PieceKind};
use crate::rules::check::{is_check, is_checkmate, is_stalemate};
use crate::rules::piece_moves;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Terminal classification of a game
///
/// Starts as `Playing` and transitions to a terminal state when the game
/// ends. Once terminal, the session accepts no further moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Game is still in progress
    #[default]
    Playing,

    /// White won: Black is in check with no legal moves
    WhiteWon,

    /// Black won: White is in check with no legal moves
    BlackWon,

    /// Draw: the side to move has no legal moves but is not in check
    Stalemate,
}

impl GameStatus {
    /// Check if the game has ended
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// Get the winner of the game, if there is one
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameStatus::WhiteWon => Some(PieceColor::White),
            GameStatus::BlackWon => Some(PieceColor::Black),
            _ => None,
        }
    }

    /// Check if the game ended in a draw
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Stalemate)
    }

    /// Human-readable description of the game state
    pub fn message(&self) -> &str {
        match self {
            GameStatus::Playing => "Game in progress",
            GameStatus::WhiteWon => "White wins by checkmate!",
            GameStatus::BlackWon => "Black wins by checkmate!",
            GameStatus::Stalemate => "Draw by stalemate",
        }
    }
}

/// What a committed move (or completed promotion) did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    /// Kind of the piece taken from the destination square, if any
    pub capture: Option<PieceKind>,
    /// Square awaiting (or just resolved by) a promotion choice
    pub promotion: Option<Square>,
    /// Game status after the move
    pub status: GameStatus,
    /// Whether the side now to move is in check
    pub check: bool,
}

/// One game of chess: the board plus turn, scores and status
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSession {
    board: Board,
    turn: PieceColor,
    white_score: u32,
    black_score: u32,
    status: GameStatus,
    king_in_check: bool,
    pending_promotion: Option<Square>,
}

impl GameSession {
    /// Start a new game: standard position, White to move, scores zero
    pub fn new() -> Self {
        GameSession {
            board: Board::starting_position(),
            turn: PieceColor::White,
            white_score: 0,
            black_score: 0,
            status: GameStatus::Playing,
            king_in_check: false,
            pending_promotion: None,
        }
    }

    /// Start a session from an arbitrary position
    ///
    /// The position is classified immediately, so a session constructed
    /// on a mated or stalemated board starts in the matching terminal
    /// state. The board must honor the one-king-per-color contract.
    pub fn from_position(board: Board, turn: PieceColor) -> Self {
        let mut session = GameSession {
            board,
            turn,
            white_score: 0,
            black_score: 0,
            status: GameStatus::Playing,
            king_in_check: false,
            pending_promotion: None,
        };
        session.classify_position();
        session
    }

    /// Reset to a fresh game
    pub fn reset(&mut self) {
        *self = GameSession::new();
    }

    /// The current board position
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose move is next
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// Current game status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Material White has captured so far, in pawn units
    pub fn white_score(&self) -> u32 {
        self.white_score
    }

    /// Material Black has captured so far, in pawn units
    pub fn black_score(&self) -> u32 {
        self.black_score
    }

    /// Whether the side to move is currently in check
    pub fn king_in_check(&self) -> bool {
        self.king_in_check
    }

    /// Square of a pawn awaiting its promotion choice, if any
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Check a candidate move against the legality gate for the side to
    /// move
    ///
    /// This is the cheap query the input layer uses to decide what is
    /// draggable and where it may drop. It does not look at king safety;
    /// [`GameSession::try_move`] remains the authority at drop time.
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        piece_moves::is_valid_move(&self.board, self.turn, from, to)
    }

    /// All gate-legal destinations for the piece on `from`, for hints
    pub fn possible_moves(&self, from: Square) -> Vec<Square> {
        piece_moves::possible_moves(&self.board, self.turn, from)
    }

    /// Submit a move for the side to move
    ///
    /// Runs the legality gate, then simulates the move and rejects it if
    /// the mover's own king would be left in check; otherwise the move is
    /// committed, any capture is scored, and the turn flips. If the moved
    /// pawn reached its promotion row the turn does not flip yet - the
    /// session waits for [`GameSession::promote`].
    ///
    /// On rejection the board, turn and scores are untouched.
    pub fn try_move(&mut self, from: Square, to: Square) -> MoveResult<MoveOutcome> {
        if self.status.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if let Some(square) = self.pending_promotion {
            return Err(MoveError::PromotionPending { square });
        }
        if !piece_moves::is_valid_move(&self.board, self.turn, from, to) {
            return Err(MoveError::IllegalMove { from, to });
        }

        let trial = TrialMove::apply(&mut self.board, from, to);
        if is_check(trial.board(), self.turn) {
            // dropping the guard restores both squares
            return Err(MoveError::ExposesKing { from, to });
        }
        let captured = trial.commit();

        info!("[SESSION] {} moved {} to {}", self.turn, from, to);
        if let Some(piece) = captured {
            self.award_capture(piece);
        }
        let capture = captured.map(|piece| piece.kind);

        if let Some(pawn) = self.board.get(to) {
            if pawn.kind == PieceKind::Pawn && to.row == pawn.color.promotion_row() {
                self.pending_promotion = Some(to);
                info!(
                    "[SESSION] {} pawn reached {} - awaiting promotion choice",
                    self.turn, to
                );
                return Ok(MoveOutcome {
                    capture,
                    promotion: Some(to),
                    status: self.status,
                    check: self.king_in_check,
                });
            }
        }

        Ok(self.finish_turn(capture, None))
    }

    /// Resolve a pending pawn promotion with the caller's chosen kind
    ///
    /// The replacement keeps the pawn's color. Only queen, rook, bishop
    /// and knight are accepted. Completes the turn the promoting move
    /// started: the turn flips and the new position is classified with
    /// the promoted piece on the board.
    pub fn promote(&mut self, kind: PieceKind) -> MoveResult<MoveOutcome> {
        let square = match self.pending_promotion {
            Some(square) => square,
            None => return Err(MoveError::NoPendingPromotion),
        };
        if matches!(kind, PieceKind::King | PieceKind::Pawn) {
            return Err(MoveError::InvalidPromotion { kind });
        }

        if let Some(pawn) = self.board.get(square) {
            let promoted = Piece::new(pawn.color, kind);
            self.board.set(square, Some(promoted));
            info!("[SESSION] Promoted to {}", promoted.name());
        }
        self.pending_promotion = None;

        Ok(self.finish_turn(None, Some(square)))
    }

    /// Status banner for the display collaborator
    ///
    /// Empty while the game is in progress; on game over, the winner and
    /// their final capture score (or the draw notice).
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::Playing => String::new(),
            GameStatus::WhiteWon => format!("White Wins!\nWhite Score: {}", self.white_score),
            GameStatus::BlackWon => format!("Black Wins!\nBlack Score: {}", self.black_score),
            GameStatus::Stalemate => format!("Draw!\nBlack Score: {}", self.black_score),
        }
    }

    fn award_capture(&mut self, piece: Piece) {
        let value = piece.value();
        match self.turn {
            PieceColor::White => self.white_score += value,
            PieceColor::Black => self.black_score += value,
        }
        info!("[SESSION] {} captured {} (+{})", self.turn, piece.name(), value);
        info!(
            "[SESSION] Score -> White: {} | Black: {}",
            self.white_score, self.black_score
        );
    }

    /// Flip the turn and classify the new position for the side to move
    fn finish_turn(&mut self, capture: Option<PieceKind>, promotion: Option<Square>) -> MoveOutcome {
        self.turn = self.turn.opponent();
        self.classify_position();

        MoveOutcome {
            capture,
            promotion,
            status: self.status,
            check: self.king_in_check,
        }
    }

    fn classify_position(&mut self) {
        if is_checkmate(&mut self.board, self.turn) {
            self.status = match self.turn {
                PieceColor::White => GameStatus::BlackWon,
                PieceColor::Black => GameStatus::WhiteWon,
            };
            self.king_in_check = true;
            info!("[SESSION] {}", self.status.message());
        } else if is_stalemate(&mut self.board, self.turn) {
            self.status = GameStatus::Stalemate;
            self.king_in_check = false;
            info!("[SESSION] {}", self.status.message());
        } else {
            self.king_in_check = is_check(&self.board, self.turn);
            if self.king_in_check {
                info!("[SESSION] {} is in check", self.turn);
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}

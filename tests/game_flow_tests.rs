//! Game Flow Integration Tests
//!
//! Tests for full game flows through the session API:
//! - Turn alternation and opening move counts
//! - King-safety enforcement at commit time
//! - Capture scoring
//! - Promotion flow
//! - Win and draw conditions

use chess_rules::{
    possible_moves, Board, GameSession, GameStatus, MoveError, Piece, PieceColor, PieceKind, Square,
};

/// Helper to build a board fixture from piece definitions
fn board_with(pieces: &[(PieceKind, PieceColor, Square)]) -> Board {
    let mut board = Board::empty();
    for &(kind, color, square) in pieces {
        board.set(square, Some(Piece::new(color, kind)));
    }
    board
}

/// Count every gate-legal move available to a side
fn count_moves(board: &Board, color: PieceColor) -> usize {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .map(|(square, _)| possible_moves(board, color, square).len())
        .sum()
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_white_moves_first() {
    let session = GameSession::new();
    assert_eq!(session.turn(), PieceColor::White);
}

#[test]
fn test_both_players_have_twenty_openings() {
    let board = Board::starting_position();

    assert_eq!(
        count_moves(&board, PieceColor::White),
        20,
        "White should have 20 moves from the start"
    );
    assert_eq!(
        count_moves(&board, PieceColor::Black),
        20,
        "Black should have 20 moves from the start"
    );
}

#[test]
fn test_turns_alternate() {
    let mut session = GameSession::new();

    session
        .try_move(Square::new(6, 4), Square::new(4, 4))
        .expect("1. e4");
    assert_eq!(session.turn(), PieceColor::Black);

    session
        .try_move(Square::new(1, 4), Square::new(3, 4))
        .expect("1... e5");
    assert_eq!(session.turn(), PieceColor::White);

    session
        .try_move(Square::new(7, 6), Square::new(5, 5))
        .expect("2. Nf3");
    assert_eq!(session.turn(), PieceColor::Black);
}

// ============================================================================
// King-Safety Enforcement Tests
// ============================================================================

#[test]
fn test_pinned_piece_cannot_leave_the_file() {
    //! The rook shielding its king passes the shape gate but must be
    //! rejected at commit time, leaving the session untouched
    let board = board_with(&[
        (PieceKind::King, PieceColor::White, Square::new(7, 4)),
        (PieceKind::Rook, PieceColor::White, Square::new(5, 4)),
        (PieceKind::Rook, PieceColor::Black, Square::new(0, 4)),
        (PieceKind::King, PieceColor::Black, Square::new(0, 0)),
    ]);
    let mut session = GameSession::from_position(board, PieceColor::White);
    let before = session.board().clone();

    let from = Square::new(5, 4);
    let sideways = Square::new(5, 0);

    assert!(
        session.is_valid_move(from, sideways),
        "the sideways rook move is shape-legal"
    );
    assert_eq!(
        session.try_move(from, sideways),
        Err(MoveError::ExposesKing {
            from,
            to: sideways
        }),
        "but committing it would expose the king"
    );

    assert_eq!(session.board(), &before, "board must be restored");
    assert_eq!(session.turn(), PieceColor::White, "turn must not flip");
    assert_eq!(session.white_score(), 0);

    // Staying on the file is fine
    session
        .try_move(from, Square::new(2, 4))
        .expect("sliding along the pin line is legal");
}

// ============================================================================
// Capture Scoring Tests
// ============================================================================

/// Drive one capture of the given piece kind and return the final scores
fn capture_score_for(kind: PieceKind) -> (u32, u32) {
    let board = board_with(&[
        (PieceKind::King, PieceColor::White, Square::new(7, 0)),
        (PieceKind::King, PieceColor::Black, Square::new(0, 7)),
        (PieceKind::Queen, PieceColor::White, Square::new(4, 0)),
        (kind, PieceColor::Black, Square::new(4, 5)),
    ]);
    let mut session = GameSession::from_position(board, PieceColor::White);

    let outcome = session
        .try_move(Square::new(4, 0), Square::new(4, 5))
        .expect("queen takes along the row");
    assert_eq!(outcome.capture, Some(kind));

    (session.white_score(), session.black_score())
}

#[test]
fn test_capture_scoring_per_kind() {
    //! Material values: pawn 1, knight 3, bishop 3, rook 5, queen 9
    assert_eq!(capture_score_for(PieceKind::Pawn), (1, 0));
    assert_eq!(capture_score_for(PieceKind::Knight), (3, 0));
    assert_eq!(capture_score_for(PieceKind::Bishop), (3, 0));
    assert_eq!(capture_score_for(PieceKind::Rook), (5, 0));
    assert_eq!(capture_score_for(PieceKind::Queen), (9, 0));
}

#[test]
fn test_quiet_move_leaves_scores_unchanged() {
    let mut session = GameSession::new();

    let outcome = session
        .try_move(Square::new(6, 4), Square::new(4, 4))
        .expect("1. e4");

    assert_eq!(outcome.capture, None);
    assert_eq!(session.white_score(), 0);
    assert_eq!(session.black_score(), 0);
}

#[test]
fn test_scores_accumulate_over_a_game() {
    //! 1. e4 d5 2. exd5 Qxd5 trades a pawn each way
    let mut session = GameSession::new();

    session
        .try_move(Square::new(6, 4), Square::new(4, 4))
        .expect("1. e4");
    session
        .try_move(Square::new(1, 3), Square::new(3, 3))
        .expect("1... d5");

    let outcome = session
        .try_move(Square::new(4, 4), Square::new(3, 3))
        .expect("2. exd5");
    assert_eq!(outcome.capture, Some(PieceKind::Pawn));
    assert_eq!(session.white_score(), 1);

    let outcome = session
        .try_move(Square::new(0, 3), Square::new(3, 3))
        .expect("2... Qxd5");
    assert_eq!(outcome.capture, Some(PieceKind::Pawn));
    assert_eq!(session.black_score(), 1);
}

// ============================================================================
// Promotion Tests
// ============================================================================

#[test]
fn test_promotion_pauses_the_turn() {
    let board = board_with(&[
        (PieceKind::King, PieceColor::White, Square::new(7, 7)),
        (PieceKind::King, PieceColor::Black, Square::new(0, 7)),
        (PieceKind::Pawn, PieceColor::White, Square::new(1, 0)),
    ]);
    let mut session = GameSession::from_position(board, PieceColor::White);

    let outcome = session
        .try_move(Square::new(1, 0), Square::new(0, 0))
        .expect("pawn reaches the back rank");
    assert_eq!(outcome.promotion, Some(Square::new(0, 0)));
    assert_eq!(session.pending_promotion(), Some(Square::new(0, 0)));
    assert_eq!(
        session.turn(),
        PieceColor::White,
        "turn must not flip until the promotion is resolved"
    );

    // No other move is accepted while the choice is pending
    assert_eq!(
        session.try_move(Square::new(7, 7), Square::new(7, 6)),
        Err(MoveError::PromotionPending {
            square: Square::new(0, 0)
        })
    );
}

#[test]
fn test_promotion_rejects_king_and_pawn() {
    let board = board_with(&[
        (PieceKind::King, PieceColor::White, Square::new(7, 7)),
        (PieceKind::King, PieceColor::Black, Square::new(0, 7)),
        (PieceKind::Pawn, PieceColor::White, Square::new(1, 0)),
    ]);
    let mut session = GameSession::from_position(board, PieceColor::White);
    session
        .try_move(Square::new(1, 0), Square::new(0, 0))
        .expect("pawn reaches the back rank");

    assert_eq!(
        session.promote(PieceKind::King),
        Err(MoveError::InvalidPromotion {
            kind: PieceKind::King
        })
    );
    assert_eq!(
        session.promote(PieceKind::Pawn),
        Err(MoveError::InvalidPromotion {
            kind: PieceKind::Pawn
        })
    );
}

#[test]
fn test_promotion_completes_the_turn_with_the_new_piece() {
    //! The promoted queen participates in the classification: here it
    //! checks the black king along the back rank
    let board = board_with(&[
        (PieceKind::King, PieceColor::White, Square::new(7, 7)),
        (PieceKind::King, PieceColor::Black, Square::new(0, 7)),
        (PieceKind::Pawn, PieceColor::White, Square::new(1, 0)),
    ]);
    let mut session = GameSession::from_position(board, PieceColor::White);
    session
        .try_move(Square::new(1, 0), Square::new(0, 0))
        .expect("pawn reaches the back rank");

    let outcome = session.promote(PieceKind::Queen).expect("queen is a legal choice");

    assert_eq!(
        session.board().get(Square::new(0, 0)),
        Some(Piece::new(PieceColor::White, PieceKind::Queen)),
        "replacement keeps the pawn's color"
    );
    assert_eq!(session.pending_promotion(), None);
    assert_eq!(session.turn(), PieceColor::Black);
    assert!(outcome.check, "the new queen checks along the back rank");
    assert!(session.king_in_check());
    assert_eq!(outcome.status, GameStatus::Playing, "the king can still run");
}

#[test]
fn test_promote_without_pending_promotion_fails() {
    let mut session = GameSession::new();
    assert_eq!(
        session.promote(PieceKind::Queen),
        Err(MoveError::NoPendingPromotion)
    );
}

// ============================================================================
// Win Condition Tests
// ============================================================================

#[test]
fn test_fools_mate() {
    //! The fastest checkmate: 1. f3 e5 2. g4 Qh4#
    let mut session = GameSession::new();

    session
        .try_move(Square::new(6, 5), Square::new(5, 5))
        .expect("1. f3");
    session
        .try_move(Square::new(1, 4), Square::new(3, 4))
        .expect("1... e5");
    session
        .try_move(Square::new(6, 6), Square::new(4, 6))
        .expect("2. g4");

    let outcome = session
        .try_move(Square::new(0, 3), Square::new(4, 7))
        .expect("2... Qh4#");

    assert_eq!(outcome.status, GameStatus::BlackWon);
    assert!(outcome.check);
    assert_eq!(session.status(), GameStatus::BlackWon);
    assert!(session.status().is_game_over());
    assert_eq!(session.status().winner(), Some(PieceColor::Black));
    assert_eq!(session.status_message(), "Black Wins!\nBlack Score: 0");
}

#[test]
fn test_no_moves_accepted_after_game_over() {
    let mut session = GameSession::new();
    session.try_move(Square::new(6, 5), Square::new(5, 5)).expect("1. f3");
    session.try_move(Square::new(1, 4), Square::new(3, 4)).expect("1... e5");
    session.try_move(Square::new(6, 6), Square::new(4, 6)).expect("2. g4");
    session.try_move(Square::new(0, 3), Square::new(4, 7)).expect("2... Qh4#");

    assert_eq!(
        session.try_move(Square::new(6, 0), Square::new(5, 0)),
        Err(MoveError::GameOver),
        "the session is frozen once the game ends"
    );
}

// ============================================================================
// Draw Condition Tests
// ============================================================================

#[test]
fn test_stalemate_ends_the_game_as_a_draw() {
    //! Queen to b6 leaves the cornered black king unattacked with no
    //! legal move: stalemate
    let board = board_with(&[
        (PieceKind::King, PieceColor::Black, Square::new(0, 0)),
        (PieceKind::Queen, PieceColor::White, Square::new(2, 4)),
        (PieceKind::King, PieceColor::White, Square::new(7, 7)),
    ]);
    let mut session = GameSession::from_position(board, PieceColor::White);
    assert_eq!(session.status(), GameStatus::Playing);

    let outcome = session
        .try_move(Square::new(2, 4), Square::new(2, 1))
        .expect("the queen slide is legal");

    assert_eq!(outcome.status, GameStatus::Stalemate);
    assert!(!outcome.check);
    assert!(session.status().is_draw());
    assert_eq!(session.status().winner(), None);
    assert_eq!(session.status_message(), "Draw!\nBlack Score: 0");
    assert_eq!(
        session.try_move(Square::new(7, 7), Square::new(7, 6)),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_session_from_terminal_position_starts_frozen() {
    //! Constructing a session on a mated board classifies it immediately
    let board = board_with(&[
        (PieceKind::King, PieceColor::Black, Square::new(0, 0)),
        (PieceKind::Queen, PieceColor::White, Square::new(1, 1)),
        (PieceKind::King, PieceColor::White, Square::new(2, 2)),
    ]);
    let session = GameSession::from_position(board, PieceColor::Black);

    assert_eq!(session.status(), GameStatus::WhiteWon);
    assert!(session.king_in_check());
}

// ============================================================================
// Starting Position Tests
// ============================================================================

#[test]
fn test_starting_position_is_not_terminal() {
    let session = GameSession::new();

    assert_eq!(session.status(), GameStatus::Playing);
    assert!(!session.king_in_check());
    assert_eq!(session.status_message(), "");
}

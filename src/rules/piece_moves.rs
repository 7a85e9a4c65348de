//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move, plus the
//! legality gate that composes them with ownership and friendly-fire
//! checks. Pure functions with no side effects - easy to test.

use crate::board::{Board, Square};
use crate::piece::{PieceColor, PieceKind};

/// Check whether a move passes the legality gate for the given side
///
/// Short-circuits on the first failing check:
/// 1. Source and destination are distinct squares on the board
/// 2. The source square holds a piece of `color`
/// 3. The destination does not hold a piece of `color`
/// 4. The relocation is shape-legal for the piece's kind
///
/// The acting color is explicit so the terminal-state search can probe
/// either side; the session passes its own turn flag. King safety is
/// deliberately not checked here - the commit flow simulates the move and
/// tests [`crate::rules::check::is_check`], which lets the checkmate
/// search reject most candidates cheaply before paying for a simulation.
pub fn is_valid_move(board: &Board, color: PieceColor, from: Square, to: Square) -> bool {
    // Can't move to the same square
    if from == to {
        return false;
    }

    // Can't move off the board
    if !from.in_bounds() || !to.in_bounds() {
        return false;
    }

    let piece = match board.get(from) {
        Some(piece) => piece,
        None => return false,
    };
    if piece.color != color {
        return false;
    }

    // Can't capture your own pieces
    if let Some(target) = board.get(to) {
        if target.color == color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(board, from, to, piece.color),
        PieceKind::Knight => is_valid_knight_move(from, to),
        PieceKind::Bishop => is_valid_bishop_move(board, from, to),
        PieceKind::Rook => is_valid_rook_move(board, from, to),
        PieceKind::Queen => is_valid_queen_move(board, from, to),
        PieceKind::King => is_valid_king_move(from, to),
    }
}

/// Get all gate-legal destinations for the piece on `from`
///
/// Used by the input layer to paint move hints when a piece is picked
/// up. No king-safety filtering happens here; the authoritative check
/// runs when the move is actually committed.
pub fn possible_moves(board: &Board, color: PieceColor, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let to = Square::new(row, col);
            if is_valid_move(board, color, from, to) {
                moves.push(to);
            }
        }
    }
    moves
}

fn is_valid_pawn_move(board: &Board, from: Square, to: Square, color: PieceColor) -> bool {
    let direction = color.pawn_direction();
    let dr = to.row as i8 - from.row as i8;
    let dc = to.col as i8 - from.col as i8;

    // Forward move
    if dc == 0 && dr == direction {
        return board.is_empty(to);
    }

    // Double move from the starting row, both squares clear
    if dc == 0 && dr == 2 * direction && from.row == color.pawn_start_row() {
        let intermediate = Square::new((from.row as i8 + direction) as u8, from.col);
        return board.is_empty(intermediate) && board.is_empty(to);
    }

    // Capture diagonally, only onto an enemy piece (no en passant)
    if dc.abs() == 1 && dr == direction {
        return matches!(board.get(to), Some(target) if target.color != color);
    }

    false
}

fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).abs();
    let dc = (to.col as i8 - from.col as i8).abs();
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

fn is_valid_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).abs();
    let dc = (to.col as i8 - from.col as i8).abs();

    // Must move diagonally
    if dr != dc || dr == 0 {
        return false;
    }

    is_path_clear(board, from, to)
}

fn is_valid_rook_move(board: &Board, from: Square, to: Square) -> bool {
    // Must move horizontally or vertically
    if from.row != to.row && from.col != to.col {
        return false;
    }

    is_path_clear(board, from, to)
}

fn is_valid_queen_move(board: &Board, from: Square, to: Square) -> bool {
    // Queen moves like rook or bishop
    is_valid_rook_move(board, from, to) || is_valid_bishop_move(board, from, to)
}

fn is_valid_king_move(from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).abs();
    let dc = (to.col as i8 - from.col as i8).abs();

    // King moves one square in any direction; the zero-length case is
    // already rejected by the gate's same-square check
    dr <= 1 && dc <= 1
}

/// Check that every square strictly between `from` and `to` is empty
///
/// `from` and `to` must share a row, column or diagonal; neither endpoint
/// is examined.
fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).signum();
    let dc = (to.col as i8 - from.col as i8).signum();

    let mut row = from.row as i8 + dr;
    let mut col = from.col as i8 + dc;

    while (row, col) != (to.row as i8, to.col as i8) {
        if !board.is_empty(Square::new(row as u8, col as u8)) {
            return false;
        }
        row += dr;
        col += dc;
    }

    true
}

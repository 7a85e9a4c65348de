//! King safety and terminal-state detection
//!
//! [`is_check`] is the oracle the commit flow consults after simulating a
//! move; [`is_checkmate`] and [`is_stalemate`] classify a position by
//! exhaustively searching for any move that leaves the king safe. The
//! search simulates each candidate with a [`TrialMove`] guard, so the
//! board is always restored no matter how the search exits.

use crate::board::{Board, Square, TrialMove};
use crate::piece::PieceColor;

use super::piece_moves::is_valid_move;

/// Check whether `color`'s king is under attack
///
/// Scans every opposing piece and asks whether it could legally relocate
/// onto the king's square. Pure over any board snapshot, including one
/// mid-simulation. A board holding no king for `color` is a setup
/// contract violation; the scan then finds no attacker and reports no
/// check.
pub fn is_check(board: &Board, color: PieceColor) -> bool {
    let king = match board.find_king(color) {
        Some(square) => square,
        None => return false,
    };

    let attacker = color.opponent();
    board.pieces().any(|(square, piece)| {
        piece.color == attacker && is_valid_move(board, attacker, square, king)
    })
}

/// Check whether `color` is checkmated: in check with no saving move
pub fn is_checkmate(board: &mut Board, color: PieceColor) -> bool {
    if !is_check(board, color) {
        return false;
    }
    !has_safe_move(board, color)
}

/// Check whether `color` is stalemated: not in check, but out of moves
///
/// A draw regardless of material: the side to move has zero legal moves
/// while its king is safe.
pub fn is_stalemate(board: &mut Board, color: PieceColor) -> bool {
    if is_check(board, color) {
        return false;
    }
    !has_safe_move(board, color)
}

/// Exhaustive escape search: does any legal move leave the king safe?
///
/// Tries every source/destination pair that passes the gate for `color`,
/// simulates it, retests [`is_check`] and restores. Short-circuits on the
/// first safe move. O(64 x 64) pairs with a simulation per shape-legal
/// candidate - fine for one 8x8 board, not meant to scale further.
fn has_safe_move(board: &mut Board, color: PieceColor) -> bool {
    for from_row in 0..8 {
        for from_col in 0..8 {
            let from = Square::new(from_row, from_col);
            match board.get(from) {
                Some(piece) if piece.color == color => {}
                _ => continue,
            }

            for to_row in 0..8 {
                for to_col in 0..8 {
                    let to = Square::new(to_row, to_col);
                    if !is_valid_move(board, color, from, to) {
                        continue;
                    }

                    let trial = TrialMove::apply(board, from, to);
                    let safe = !is_check(trial.board(), color);
                    drop(trial);

                    if safe {
                        return true;
                    }
                }
            }
        }
    }

    false
}

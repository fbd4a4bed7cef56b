//! Solve detection for a released piece.
//!
//! A piece locks when it is within the tolerance of its solved position on
//! both axes. Locking snaps it exactly onto the solved position and migrates
//! it from the active sequence into the solved set. The check has to run
//! before the drag machine re-orders the active sequence, because it uses the
//! piece's current index.

#[cfg(test)]
#[path = "solve_test.rs"]
mod solve_test;

use log::debug;

use crate::board::Board;
use crate::piece::Piece;

/// Whether `piece` is close enough to its solved position to lock.
#[must_use]
pub fn within_tolerance(piece: &Piece, tolerance: f64) -> bool {
    (piece.position.x - piece.solved_position.x).abs() <= tolerance
        && (piece.position.y - piece.solved_position.y).abs() <= tolerance
}

/// Try to lock the active piece at `index`. Returns whether it solved.
pub fn try_solve(board: &mut Board, index: usize, tolerance: f64) -> bool {
    let Some(piece) = board.active_piece_mut(index) else {
        return false;
    };
    if !within_tolerance(piece, tolerance) {
        return false;
    }
    piece.position = piece.solved_position;
    match board.lock(index) {
        Some(locked) => {
            let g = locked.grid_index();
            debug!("piece ({}, {}) locked at ({}, {})", g.col, g.row, locked.position.x, locked.position.y);
            true
        }
        None => false,
    }
}

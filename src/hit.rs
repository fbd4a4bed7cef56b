#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::Point;
use crate::piece::Piece;

/// Index of the topmost unsolved piece whose bounding box contains `pt`.
///
/// Scans from the end of the sequence (topmost) towards the start, so
/// overlapping pieces are grabbed in the order they appear on screen.
/// Solved pieces are skipped even if present.
#[must_use]
pub fn hit_test(pieces: &[Piece], pt: Point) -> Option<usize> {
    pieces
        .iter()
        .enumerate()
        .rev()
        .find(|(_, piece)| !piece.solved && piece.contains(pt))
        .map(|(i, _)| i)
}

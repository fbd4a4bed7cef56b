//! Proportional remapping of piece geometry when the surface changes size.

#[cfg(test)]
#[path = "rescale_test.rs"]
mod rescale_test;

use crate::geom::{Point, Size};
use crate::piece::Piece;

/// Independent per-axis scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    /// Factors mapping `old` onto `new`, or `None` when either has no area.
    #[must_use]
    pub fn between(old: Size, new: Size) -> Option<Self> {
        if !old.is_drawable() || !new.is_drawable() {
            return None;
        }
        Some(Self { x: new.w / old.w, y: new.h / old.h })
    }

    #[must_use]
    pub fn apply_point(self, p: Point) -> Point {
        Point::new(p.x * self.x, p.y * self.y)
    }

    #[must_use]
    pub fn apply_size(self, s: Size) -> Size {
        Size::new(s.w * self.x, s.h * self.y)
    }
}

/// Scale a piece's position, size and solved position. Grid index and flags
/// are carried over unchanged.
#[must_use]
pub fn rescale(mut piece: Piece, scale: Scale) -> Piece {
    piece.position = scale.apply_point(piece.position);
    piece.size = scale.apply_size(piece.size);
    piece.solved_position = scale.apply_point(piece.solved_position);
    piece
}

//! One jigsaw tile: its grid coordinate, current and solved positions, and flags.

#[cfg(test)]
#[path = "piece_test.rs"]
mod piece_test;

use crate::geom::{Point, Rect, Size};

/// A piece's `(column, row)` coordinate in the generation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex {
    pub col: u32,
    pub row: u32,
}

impl GridIndex {
    #[must_use]
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Checkerboard parity inputs: `(col is even, row is even)`.
    #[must_use]
    pub fn parity(self) -> (bool, bool) {
        (self.col % 2 == 0, self.row % 2 == 0)
    }
}

/// A single puzzle piece.
///
/// `grid` is fixed for the piece's lifetime and is the only input to its edge
/// shape. `size` and `solved_position` change only when the surface is
/// rescaled; `position` changes while dragging and never again once `solved`.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    /// Current top-left corner on the surface.
    pub position: Point,
    /// Footprint of the piece's grid cell.
    pub size: Size,
    /// Top-left corner of the piece's cell in the solved picture.
    pub solved_position: Point,
    /// Rendered at reduced opacity while another piece is dragged.
    pub dimmed: bool,
    /// Locked into place; never moves or hit-tests again.
    pub solved: bool,
    grid: GridIndex,
}

impl Piece {
    #[must_use]
    pub fn new(position: Point, size: Size, solved_position: Point, grid: GridIndex) -> Self {
        Self { position, size, solved_position, dimmed: false, solved: false, grid }
    }

    #[must_use]
    pub fn grid_index(&self) -> GridIndex {
        self.grid
    }

    /// Current bounding box on the surface.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Whether `pt` lies inside the current bounding box (edges inclusive).
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.bounds().contains(pt)
    }
}

//! Edge shapes: the tab/blank outline of a piece as a list of path operations.
//!
//! The outline starts at the piece's top-left corner and walks clockwise
//! (top, right, bottom, left). Every interior edge carries a semicircle
//! centred on its midpoint with radius `min(w, h) / 4`; edges on the grid
//! boundary stay straight. Whether the semicircle bulges out (tab) or cuts in
//! (blank) comes from the checkerboard parity of the grid index, which makes
//! the shared edge of any two neighbouring pieces complementary.
//!
//! The operations are plain data so the geometry is testable without a
//! drawing surface; [`crate::render`] replays them onto a [`crate::surface::Surface`].

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::f64::consts::PI;

use crate::config::GridSize;
use crate::consts::TAB_RADIUS_DIVISOR;
use crate::geom::Point;
use crate::piece::Piece;

/// One side of a piece, in outline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All four edges in the order the outline visits them.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// A semicircular arc on an edge midpoint, in canvas `arc()` terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabArc {
    pub center: Point,
    pub radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    pub anticlockwise: bool,
}

/// A single path-building step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    Arc(TabArc),
    Close,
}

/// Whether `edge` lies on the outer boundary of the grid for this piece.
#[must_use]
pub fn is_boundary(piece: &Piece, grid: GridSize, edge: Edge) -> bool {
    let g = piece.grid_index();
    match edge {
        Edge::Top => g.row == 0,
        Edge::Right => g.col + 1 >= grid.across(),
        Edge::Bottom => g.row + 1 >= grid.down(),
        Edge::Left => g.col == 0,
    }
}

/// The arc for an interior `edge`, or `None` on the grid boundary.
#[must_use]
pub fn tab(piece: &Piece, grid: GridSize, edge: Edge) -> Option<TabArc> {
    if is_boundary(piece, grid, edge) {
        return None;
    }

    let Point { x, y } = piece.position;
    let (w, h) = (piece.size.w, piece.size.h);
    let (col_even, row_even) = piece.grid_index().parity();

    let (center, start_angle, end_angle, anticlockwise) = match edge {
        Edge::Top => (Point::new(x + w / 2.0, y), PI, 0.0, row_even == col_even),
        Edge::Right => (Point::new(x + w, y + h / 2.0), 1.5 * PI, 0.5 * PI, row_even != col_even),
        Edge::Bottom => (Point::new(x + w / 2.0, y + h), 0.0, PI, row_even == col_even),
        Edge::Left => (Point::new(x, y + h / 2.0), 0.5 * PI, 1.5 * PI, row_even != col_even),
    };

    Some(TabArc {
        center,
        radius: (h / TAB_RADIUS_DIVISOR).min(w / TAB_RADIUS_DIVISOR),
        start_angle,
        end_angle,
        anticlockwise,
    })
}

/// The closed outline of `piece` at its current position.
#[must_use]
pub fn outline(piece: &Piece, grid: GridSize) -> Vec<PathOp> {
    let Point { x, y } = piece.position;
    let (w, h) = (piece.size.w, piece.size.h);
    // Corner reached after each edge, clockwise from the top-left origin.
    let corners = [Point::new(x + w, y), Point::new(x + w, y + h), Point::new(x, y + h), Point::new(x, y)];

    let mut ops = Vec::with_capacity(10);
    ops.push(PathOp::MoveTo(piece.position));
    for (edge, corner) in Edge::ALL.into_iter().zip(corners) {
        if let Some(arc) = tab(piece, grid, edge) {
            ops.push(PathOp::Arc(arc));
        }
        ops.push(PathOp::LineTo(corner));
    }
    ops.push(PathOp::Close);
    ops
}

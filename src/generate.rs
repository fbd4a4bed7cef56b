//! Piece generation: partitions the surface into a grid and scatters the cells.
//!
//! Each grid cell becomes one piece whose solved position is the cell's
//! top-left corner. Start positions are drawn uniformly from an inset band of
//! the surface, `[0.1 * W, 0.9 * W - w]` horizontally and the analogous range
//! vertically, so no piece starts off-surface.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use rand::Rng;

use crate::config::GridSize;
use crate::consts::{SCATTER_MAX_FRAC, SCATTER_MIN_FRAC};
use crate::geom::{Point, Size};
use crate::piece::{GridIndex, Piece};

/// Where freshly generated pieces start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartLayout {
    /// Random positions inside the scatter band.
    #[default]
    Scattered,
    /// Every piece starts on its solved position (still unsolved).
    Solved,
}

/// Size of one grid cell on a surface of the given size.
#[must_use]
pub fn cell_size(surface: Size, grid: GridSize) -> Size {
    Size::new(surface.w / f64::from(grid.across()), surface.h / f64::from(grid.down()))
}

/// The `[min, max]` band along one axis for a piece of extent `piece` on a
/// surface of extent `surface`. `max` may fall below `min` when the piece
/// spans most of the axis.
#[must_use]
pub fn scatter_band(surface: f64, piece: f64) -> (f64, f64) {
    (surface * SCATTER_MIN_FRAC, surface * SCATTER_MAX_FRAC - piece)
}

/// Generate `across * down` pieces in row-major order.
pub fn generate<R: Rng>(surface: Size, grid: GridSize, layout: StartLayout, rng: &mut R) -> Vec<Piece> {
    let cell = cell_size(surface, grid);
    let (min_x, max_x) = scatter_band(surface.w, cell.w);
    let (min_y, max_y) = scatter_band(surface.h, cell.h);

    let mut pieces = Vec::with_capacity(grid.piece_count());
    for row in 0..grid.down() {
        for col in 0..grid.across() {
            let solved = Point::new(cell.w * f64::from(col), cell.h * f64::from(row));
            let start = match layout {
                StartLayout::Scattered => Point::new(lerp(rng, min_x, max_x), lerp(rng, min_y, max_y)),
                StartLayout::Solved => solved,
            };
            pieces.push(Piece::new(start, cell, solved, GridIndex::new(col, row)));
        }
    }
    pieces
}

/// Uniform draw between `min` and `max`, tolerating an inverted band.
fn lerp<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.random::<f64>() * (max - min)
}

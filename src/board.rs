//! Board model: the two piece collections and the geometry they live on.
//!
//! The board owns every piece of the current puzzle. Unsolved pieces live in
//! an ordered sequence whose order IS the z-order: render and hit-test order
//! follow sequence order, and the last element is the topmost piece. Solved
//! pieces live in a separate collection that never takes part in dragging or
//! hit-testing; their order carries no meaning.
//!
//! A piece is always in exactly one of the two collections, and
//! `solved == true` holds exactly for members of the solved collection.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use log::warn;
use rand::Rng;

use crate::config::GridSize;
use crate::generate::{StartLayout, generate};
use crate::geom::{Point, Size};
use crate::piece::Piece;
use crate::rescale::{Scale, rescale};

/// In-memory store of the puzzle's pieces.
#[derive(Debug, Clone)]
pub struct Board {
    grid: GridSize,
    surface: Size,
    active: Vec<Piece>,
    solved: Vec<Piece>,
}

impl Board {
    /// Generate a fresh, fully unsolved board.
    pub fn generate<R: Rng>(surface: Size, grid: GridSize, layout: StartLayout, rng: &mut R) -> Self {
        Self { grid, surface, active: generate(surface, grid, layout, rng), solved: Vec::new() }
    }

    /// A board with no pieces yet, on a surface with no area.
    #[must_use]
    pub fn empty(grid: GridSize) -> Self {
        Self { grid, surface: Size::default(), active: Vec::new(), solved: Vec::new() }
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Current surface size the piece geometry is expressed in.
    #[must_use]
    pub fn surface(&self) -> Size {
        self.surface
    }

    /// Unsolved pieces, bottom first.
    #[must_use]
    pub fn active(&self) -> &[Piece] {
        &self.active
    }

    /// Solved pieces, in the order they were placed.
    #[must_use]
    pub fn solved(&self) -> &[Piece] {
        &self.solved
    }

    /// Total number of pieces across both collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len() + self.solved.len()
    }

    /// Returns `true` if the board holds no pieces at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The puzzle is solved once no unsolved piece remains.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn active_piece(&self, index: usize) -> Option<&Piece> {
        self.active.get(index)
    }

    /// Move an active piece so its origin lands at `target`, clamped so the
    /// whole piece stays on the surface. Returns the applied position.
    pub fn move_piece(&mut self, index: usize, target: Point) -> Option<Point> {
        let surface = self.surface;
        let piece = self.active.get_mut(index)?;
        if piece.solved {
            return None;
        }
        // Not f64::clamp: the range is inverted when the piece outgrows the surface.
        piece.position = Point::new(
            target.x.max(0.0).min(surface.w - piece.size.w),
            target.y.max(0.0).min(surface.h - piece.size.h),
        );
        Some(piece.position)
    }

    /// Fade every active piece except `index`.
    pub fn highlight(&mut self, index: usize) {
        for (i, piece) in self.active.iter_mut().enumerate() {
            piece.dimmed = i != index;
        }
    }

    /// Return every active piece to full opacity.
    pub fn clear_highlight(&mut self) {
        for piece in &mut self.active {
            piece.dimmed = false;
        }
    }

    /// Move an active piece to the top of the z-order. Returns its new index.
    pub fn bring_to_front(&mut self, index: usize) -> Option<usize> {
        if index >= self.active.len() {
            return None;
        }
        let piece = self.active.remove(index);
        self.active.push(piece);
        Some(self.active.len() - 1)
    }

    /// Take an active piece out of the sequence and lock it into the solved set.
    pub(crate) fn lock(&mut self, index: usize) -> Option<&Piece> {
        if index >= self.active.len() {
            return None;
        }
        let mut piece = self.active.remove(index);
        piece.solved = true;
        piece.dimmed = false;
        self.solved.push(piece);
        self.solved.last()
    }

    pub(crate) fn active_piece_mut(&mut self, index: usize) -> Option<&mut Piece> {
        self.active.get_mut(index)
    }

    /// Remap every piece in both collections onto a new surface size.
    ///
    /// Returns `false` when no scale factor exists. A target with no area is
    /// ignored and the board keeps its old surface and geometry. From an old
    /// surface with no area only the new size is recorded.
    pub fn rescale(&mut self, new_surface: Size) -> bool {
        if !new_surface.is_drawable() {
            warn!("ignoring resize to a {}x{} surface", new_surface.w, new_surface.h);
            return false;
        }
        let Some(scale) = Scale::between(self.surface, new_surface) else {
            warn!("cannot rescale from a {}x{} surface; keeping piece geometry", self.surface.w, self.surface.h);
            self.surface = new_surface;
            return false;
        };
        self.active = self.active.drain(..).map(|p| rescale(p, scale)).collect();
        self.solved = self.solved.drain(..).map(|p| rescale(p, scale)).collect();
        self.surface = new_surface;
        true
    }
}

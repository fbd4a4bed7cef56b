//! Rendering: paints one frame of the puzzle onto a [`Surface`].
//!
//! This module receives a read-only view of the board and produces pixels. It
//! never mutates puzzle state, so it can run once per animation frame
//! independently of input handling.
//!
//! Paint order is solved pieces, then active pieces in sequence order (last =
//! topmost), then the faint guide picture over the whole surface. Every
//! fallible surface call propagates via `Result<(), S::Error>`; the caller
//! decides what a failed frame means.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::board::Board;
use crate::config::{GridSize, RenderStyle};
use crate::geom::{Point, Rect};
use crate::piece::Piece;
use crate::shape::{PathOp, outline};
use crate::surface::Surface;

/// Draw the full scene: clear, pieces, guide overlay.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_scene<S: Surface>(
    surface: &mut S,
    image: &S::Image,
    board: &Board,
    style: &RenderStyle,
) -> Result<(), S::Error> {
    surface.clear();

    let grid = board.grid();
    let full = Rect::new(Point::default(), board.surface());
    for piece in board.solved().iter().chain(board.active()) {
        draw_piece(surface, image, piece, grid, full, style)?;
    }

    if style.guide_alpha > 0.0 {
        surface.save();
        surface.set_alpha(style.guide_alpha);
        let result = surface.draw_image(image, full);
        surface.restore();
        result?;
    }
    Ok(())
}

/// Draw one piece: clip to its outline and blit the image so the piece's cell
/// of the picture lands at its current position.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_piece<S: Surface>(
    surface: &mut S,
    image: &S::Image,
    piece: &Piece,
    grid: GridSize,
    full: Rect,
    style: &RenderStyle,
) -> Result<(), S::Error> {
    surface.save();
    let result = paint_clipped(surface, image, piece, grid, full, style);
    surface.restore();
    result
}

fn paint_clipped<S: Surface>(
    surface: &mut S,
    image: &S::Image,
    piece: &Piece,
    grid: GridSize,
    full: Rect,
    style: &RenderStyle,
) -> Result<(), S::Error> {
    if piece.dimmed {
        surface.set_alpha(style.dimmed_alpha);
    }

    trace_path(surface, &outline(piece, grid))?;
    surface.clip();

    let origin = Point::new(
        full.origin.x + piece.position.x - piece.solved_position.x,
        full.origin.y + piece.position.y - piece.solved_position.y,
    );
    surface.draw_image(image, Rect::new(origin, full.size))?;

    if !piece.solved && style.border_width > 0.0 {
        surface.set_stroke(style.border_width, &style.border_color);
        surface.stroke();
    }
    Ok(())
}

/// Replay path operations onto the surface as a fresh path.
///
/// # Errors
///
/// Returns `Err` if the surface rejects an arc.
pub fn trace_path<S: Surface>(surface: &mut S, ops: &[PathOp]) -> Result<(), S::Error> {
    surface.begin_path();
    for op in ops {
        match op {
            PathOp::MoveTo(p) => surface.move_to(p.x, p.y),
            PathOp::LineTo(p) => surface.line_to(p.x, p.y),
            PathOp::Arc(arc) => surface.arc(arc)?,
            PathOp::Close => surface.close_path(),
        }
    }
    Ok(())
}

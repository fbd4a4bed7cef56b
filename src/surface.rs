//! Capability traits for the host collaborators.
//!
//! The puzzle never talks to a concrete canvas, image or DOM element. It draws
//! through [`Surface`], reads the source picture's natural size through
//! [`PuzzleImage`], and asks a [`Container`] how much room it has. The
//! browser implementations live in `web`; tests use recording stand-ins.

use crate::geom::{Rect, Size};
use crate::shape::TabArc;

/// The source picture the pieces are cut from.
pub trait PuzzleImage {
    /// Intrinsic pixel size of the picture.
    fn natural_size(&self) -> Size;
}

/// The element the puzzle surface is laid out inside.
pub trait Container {
    /// Current content size available to the surface.
    fn size(&self) -> Size;
}

/// A 2D drawing target with canvas-style path, clip and image operations.
///
/// Methods mirror the subset of the 2D canvas API the puzzle uses. Calls that
/// can fail on a real canvas return `Result<(), Self::Error>`; state changes
/// (save/restore, alpha, stroke style, path building) cannot.
pub trait Surface {
    /// Picture type this surface can blit.
    type Image: PuzzleImage;
    /// Error produced by a failed draw call.
    type Error;

    /// Resize the backing pixel buffer. The buffer may round `size`;
    /// [`Surface::size`] reports what it actually took.
    fn set_size(&mut self, size: Size);
    /// Current pixel size of the surface.
    fn size(&self) -> Size;
    /// Clear the whole surface to transparent.
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    /// Set global alpha for subsequent drawing.
    fn set_alpha(&mut self, alpha: f64);
    /// Set stroke width and colour for subsequent strokes.
    fn set_stroke(&mut self, width: f64, color: &str);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Append a circular arc to the current path.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface rejects the arc (e.g. a negative radius).
    fn arc(&mut self, arc: &TabArc) -> Result<(), Self::Error>;
    fn close_path(&mut self);
    /// Intersect the clip region with the current path.
    fn clip(&mut self);
    /// Stroke the current path with the current stroke style.
    fn stroke(&mut self);

    /// Draw `image` scaled into `dest`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the image cannot be drawn (e.g. not yet decoded).
    fn draw_image(&mut self, image: &Self::Image, dest: Rect) -> Result<(), Self::Error>;
}

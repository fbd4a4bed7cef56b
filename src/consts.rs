//! Shared numeric constants for the jigsaw crate.

// ── Grid ────────────────────────────────────────────────────────

/// Pieces across (X axis) when the host does not choose a grid.
pub const DEFAULT_PIECES_ACROSS: u32 = 12;

/// Pieces down (Y axis) when the host does not choose a grid.
pub const DEFAULT_PIECES_DOWN: u32 = 9;

// ── Scatter ─────────────────────────────────────────────────────

/// Lower bound of the scatter band as a fraction of the surface dimension.
pub const SCATTER_MIN_FRAC: f64 = 0.1;

/// Upper bound of the scatter band as a fraction of the surface dimension,
/// before the piece's own extent is subtracted.
pub const SCATTER_MAX_FRAC: f64 = 0.9;

// ── Solving ─────────────────────────────────────────────────────

/// Per-axis snap distance in surface pixels. Not rescaled on resize.
pub const SOLVE_TOLERANCE_PX: f64 = 20.0;

// ── Rendering ───────────────────────────────────────────────────

/// Tab radius is the smaller piece dimension divided by this.
pub const TAB_RADIUS_DIVISOR: f64 = 4.0;

/// Border width of unsolved pieces in pixels.
pub const BORDER_WIDTH_PX: f64 = 2.0;

/// Border color of unsolved pieces.
pub const BORDER_COLOR: &str = "rgba(0,0,0,0.5)";

/// Opacity of non-dragged pieces while a drag is active.
pub const DIMMED_ALPHA: f64 = 0.1;

/// Opacity of the full-image guide painted over the pieces.
pub const GUIDE_ALPHA: f64 = 0.1;

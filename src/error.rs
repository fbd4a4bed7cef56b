//! Configuration errors raised at construction, `initialise` and hook registration.
//!
//! Steady-state operations (hit-testing, dragging, solving, rescaling) are
//! total and never produce these.

/// Error returned when the puzzle is configured with invalid input.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A grid dimension is zero, negative, fractional or not a number.
    #[error("piecesAcross and piecesDown must be positive integers (got {across} x {down})")]
    InvalidGrid { across: f64, down: f64 },
    /// Only one of the two grid dimensions was supplied.
    #[error("across and down must both be specified, or must both be missing")]
    MismatchedGrid,
    /// The image reports a zero natural width or height (not loaded, or broken).
    #[error("the supplied image has no pixels ({width} x {height})")]
    EmptyImage { width: f64, height: f64 },
    /// A host handle is not of the expected kind.
    #[error("the supplied {0} is not usable")]
    InvalidHandle(&'static str),
    /// A callback argument is neither a function nor empty.
    #[error("{0} callback must be a function")]
    NotAFunction(&'static str),
    /// A configuration value is out of range.
    #[error("invalid option: {0}")]
    InvalidOption(String),
    /// The options document could not be parsed.
    #[error("failed to parse options: {0}")]
    Json(#[from] serde_json::Error),
}

//! Puzzle configuration: grid dimensions, solve tolerance, scatter and style.
//!
//! `PuzzleConfig` can be built in Rust or parsed from a JSON options document
//! handed over by the host page. Every path into the puzzle goes through
//! [`PuzzleConfig::validate`] or [`GridSize::new`], so a malformed grid never
//! reaches the generator.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BORDER_COLOR, BORDER_WIDTH_PX, DEFAULT_PIECES_ACROSS, DEFAULT_PIECES_DOWN, DIMMED_ALPHA, GUIDE_ALPHA,
    SOLVE_TOLERANCE_PX,
};
use crate::error::ConfigError;

/// Validated piece-grid dimensions. Both axes are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    across: u32,
    down: u32,
}

impl GridSize {
    /// Build a grid from piece counts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGrid`] if either dimension is zero.
    pub fn new(across: u32, down: u32) -> Result<Self, ConfigError> {
        if across == 0 || down == 0 {
            return Err(ConfigError::InvalidGrid { across: f64::from(across), down: f64::from(down) });
        }
        Ok(Self { across, down })
    }

    /// Build a grid from host numbers, which may be missing or fractional.
    ///
    /// Returns `Ok(None)` when both are missing.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MismatchedGrid`] when exactly one is supplied, and
    /// [`ConfigError::InvalidGrid`] when either is not a positive integer.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_host(across: Option<f64>, down: Option<f64>) -> Result<Option<Self>, ConfigError> {
        let (across, down) = match (across, down) {
            (None, None) => return Ok(None),
            (Some(a), Some(d)) => (a, d),
            _ => return Err(ConfigError::MismatchedGrid),
        };
        if !is_positive_count(across) || !is_positive_count(down) {
            return Err(ConfigError::InvalidGrid { across, down });
        }
        Self::new(across as u32, down as u32).map(Some)
    }

    #[must_use]
    pub fn across(self) -> u32 {
        self.across
    }

    #[must_use]
    pub fn down(self) -> u32 {
        self.down
    }

    /// Total number of pieces in the grid.
    #[must_use]
    pub fn piece_count(self) -> usize {
        self.across as usize * self.down as usize
    }
}

fn is_positive_count(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0 && v >= 1.0 && v <= f64::from(u32::MAX)
}

/// Visual parameters for the render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Stroke width of unsolved piece borders, in pixels.
    pub border_width: f64,
    /// CSS color of unsolved piece borders.
    pub border_color: String,
    /// Opacity of non-dragged pieces while a drag is in progress.
    pub dimmed_alpha: f64,
    /// Opacity of the full-image guide; `0.0` disables it.
    pub guide_alpha: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            border_width: BORDER_WIDTH_PX,
            border_color: BORDER_COLOR.to_owned(),
            dimmed_alpha: DIMMED_ALPHA,
            guide_alpha: GUIDE_ALPHA,
        }
    }
}

/// Full puzzle configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub pieces_across: u32,
    pub pieces_down: u32,
    /// Per-axis snap distance in surface pixels.
    pub solve_tolerance: f64,
    /// When false, pieces start on their solved positions (still unsolved).
    pub scatter: bool,
    /// Fixed RNG seed for reproducible layouts.
    pub seed: Option<u64>,
    pub style: RenderStyle,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            pieces_across: DEFAULT_PIECES_ACROSS,
            pieces_down: DEFAULT_PIECES_DOWN,
            solve_tolerance: SOLVE_TOLERANCE_PX,
            scatter: true,
            seed: None,
            style: RenderStyle::default(),
        }
    }
}

impl PuzzleConfig {
    /// Parse and validate a JSON options document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed JSON, otherwise any error from
    /// [`PuzzleConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured grid.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidGrid`] if either piece count is zero.
    pub fn grid(&self) -> Result<GridSize, ConfigError> {
        GridSize::new(self.pieces_across, self.pieces_down)
    }

    /// Check every field for range errors.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidGrid`] or [`ConfigError::InvalidOption`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid()?;
        if !self.solve_tolerance.is_finite() || self.solve_tolerance < 0.0 {
            return Err(ConfigError::InvalidOption(format!(
                "solve_tolerance must be a non-negative number (got {})",
                self.solve_tolerance
            )));
        }
        let style = &self.style;
        if !style.border_width.is_finite() || style.border_width < 0.0 {
            return Err(ConfigError::InvalidOption(format!(
                "border_width must be a non-negative number (got {})",
                style.border_width
            )));
        }
        for (name, alpha) in [("dimmed_alpha", style.dimmed_alpha), ("guide_alpha", style.guide_alpha)] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ConfigError::InvalidOption(format!("{name} must be within [0, 1] (got {alpha})")));
            }
        }
        Ok(())
    }
}

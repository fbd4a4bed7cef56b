//! Input model: the drag gesture state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. While dragging it carries the grabbed piece's index in the
//! active sequence and the offset from the piece origin to the pointer at
//! grab time, so every move keeps the piece under the same spot of the cursor.
//!
//! `PointerLock` records which host pointer owns the drag, so a stray second
//! touch cannot move or release a piece it never grabbed.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::rescale::Scale;

/// Internal state for the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging an unsolved piece.
    Dragging {
        /// Index of the grabbed piece in the active sequence.
        index: usize,
        /// Pointer position minus piece origin at grab time.
        grab_offset: Point,
    },
}

impl InputState {
    /// Start a drag of the piece at `index`, grabbed at `pointer`.
    #[must_use]
    pub fn grab(index: usize, pointer: Point, origin: Point) -> Self {
        Self::Dragging { index, grab_offset: pointer.offset_from(origin) }
    }

    /// Index of the dragged piece, if a drag is in progress.
    #[must_use]
    pub fn dragging_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging { index, .. } => Some(*index),
        }
    }

    /// Where the piece origin belongs for a pointer at `pointer`.
    #[must_use]
    pub fn target_for(&self, pointer: Point) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { grab_offset, .. } => Some(pointer.offset_from(*grab_offset)),
        }
    }

    /// The same gesture with its grab offset remapped onto a resized surface.
    #[must_use]
    pub fn rescaled(self, scale: Scale) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Dragging { index, grab_offset } => {
                Self::Dragging { index, grab_offset: scale.apply_point(grab_offset) }
            }
        }
    }
}

/// Owner of the current drag among the host's pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerLock {
    owner: Option<i32>,
}

impl PointerLock {
    /// Whether events from pointer `id` may drive the puzzle.
    #[must_use]
    pub fn admits(&self, id: i32) -> bool {
        self.owner.is_none_or(|owner| owner == id)
    }

    pub fn acquire(&mut self, id: i32) {
        self.owner = Some(id);
    }

    pub fn release(&mut self) {
        self.owner = None;
    }

    #[must_use]
    pub fn owner(&self) -> Option<i32> {
        self.owner
    }
}

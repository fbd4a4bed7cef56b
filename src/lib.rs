//! Interactive jigsaw puzzle engine.
//!
//! This crate cuts a picture into interlocking pieces, scatters them over a
//! drawing surface, and lets a single pointer drag them until every piece has
//! snapped into place. It is compiled to WebAssembly for the browser (the
//! default `web` feature) and as a plain library for native tests and Rust
//! embedders. Everything except [`web`] is DOM-free: the host supplies its
//! surface, image and container through the traits in [`surface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Puzzle`] and testable [`engine::PuzzleCore`] |
//! | [`board`] | Ordered active pieces plus the solved set |
//! | [`piece`] | Piece record and grid index |
//! | [`generate`] | Grid partition and scattered start positions |
//! | [`input`] | Drag gesture state machine |
//! | [`hit`] | Topmost-first hit-testing |
//! | [`solve`] | Tolerance check and snap-to-solved |
//! | [`shape`] | Tab/blank outline geometry |
//! | [`render`] | Frame pass over a [`surface::Surface`] |
//! | [`surface`] | Capability traits for the host collaborators |
//! | [`rescale`] | Per-axis rescaling on surface resize |
//! | [`layout`] | Aspect-ratio fit of the picture into its container |
//! | [`config`] | Grid size, tolerance, scatter and style options |
//! | [`error`] | Configuration errors |
//! | [`geom`] | Point, size and rectangle value types |
//! | [`consts`] | Shared numeric constants (default grid, tolerance, etc.) |
//! | `web` | web-sys collaborators and the `JigsawPuzzle` JS class |

pub mod board;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod generate;
pub mod geom;
pub mod hit;
pub mod input;
pub mod layout;
pub mod piece;
pub mod render;
pub mod rescale;
pub mod shape;
pub mod solve;
pub mod surface;
#[cfg(feature = "web")]
pub mod web;

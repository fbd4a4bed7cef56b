//! Puzzle engine: the drag state machine and the collaborator wiring.
//!
//! `PuzzleCore` holds every piece of puzzle logic that does not depend on a
//! drawing surface, so it can be tested natively. `Puzzle` wraps it together
//! with the host collaborators (image, container, surface) and adds sizing and
//! rendering on top.
//!
//! Input handlers return `Action` values describing what happened. Rust
//! embedders can also register single-slot hooks that fire on
//! initialisation and on completion.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::config::{GridSize, PuzzleConfig};
use crate::error::ConfigError;
use crate::generate::StartLayout;
use crate::geom::{Point, Size};
use crate::hit::hit_test;
use crate::input::InputState;
use crate::layout::fit_aspect;
use crate::piece::{GridIndex, Piece};
use crate::render::draw_scene;
use crate::rescale::Scale;
use crate::solve::try_solve;
use crate::surface::{Container, PuzzleImage, Surface};

/// A no-argument notification callback.
pub type Hook = Box<dyn FnMut()>;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A fresh set of pieces was generated.
    Initialised { grid: GridSize },
    PieceGrabbed { grid: GridIndex },
    PieceMoved { grid: GridIndex, position: Point },
    /// A piece was released outside tolerance and is now topmost.
    PieceDropped { grid: GridIndex },
    /// A piece snapped into its solved position.
    PieceSolved { grid: GridIndex },
    /// The last unsolved piece was placed. Emitted once per puzzle.
    PuzzleSolved,
    Resized { size: Size },
}

/// Core puzzle state: all logic that doesn't depend on the host surface.
///
/// Separated from `Puzzle` so it can be tested without a browser.
pub struct PuzzleCore {
    config: PuzzleConfig,
    board: Board,
    input: InputState,
    rng: StdRng,
    initialised_hook: Option<Hook>,
    solved_hook: Option<Hook>,
}

impl PuzzleCore {
    /// Create an uninitialised core. Call [`PuzzleCore::initialise`] to
    /// generate pieces.
    ///
    /// # Errors
    ///
    /// Any error from [`PuzzleConfig::validate`].
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigError> {
        Self::with_entropy(config, 0)
    }

    /// Like [`PuzzleCore::new`], seeding the scatter RNG from `entropy`
    /// unless the config pins a seed.
    ///
    /// # Errors
    ///
    /// Any error from [`PuzzleConfig::validate`].
    pub fn with_entropy(config: PuzzleConfig, entropy: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid()?;
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or(entropy));
        Ok(Self {
            config,
            board: Board::empty(grid),
            input: InputState::Idle,
            rng,
            initialised_hook: None,
            solved_hook: None,
        })
    }

    // --- Lifecycle ---

    /// (Re)build the puzzle on a surface of the given size.
    ///
    /// `grid` replaces the current grid when supplied; otherwise the previous
    /// grid is reused. Any drag in progress is abandoned.
    pub fn initialise(&mut self, surface: Size, grid: Option<GridSize>) -> Vec<Action> {
        let grid = grid.unwrap_or_else(|| self.board.grid());
        let layout = if self.config.scatter { StartLayout::Scattered } else { StartLayout::Solved };

        self.input = InputState::Idle;
        self.board = Board::generate(surface, grid, layout, &mut self.rng);
        info!(
            "puzzle initialised: {}x{} pieces on a {}x{} surface",
            grid.across(),
            grid.down(),
            surface.w,
            surface.h
        );

        if let Some(hook) = self.initialised_hook.as_mut() {
            hook();
        }
        vec![Action::Initialised { grid }]
    }

    /// Rescale every piece onto a new surface size. A drag in progress keeps
    /// its grab point at the same relative spot of the piece.
    ///
    /// A surface with no area is ignored; the board keeps its last size.
    pub fn resize(&mut self, surface: Size) -> Vec<Action> {
        let scale = Scale::between(self.board.surface(), surface);
        if self.board.rescale(surface) {
            if let Some(scale) = scale {
                self.input = self.input.rescaled(scale);
            }
            info!("puzzle resized to {}x{}", surface.w, surface.h);
        }
        vec![Action::Resized { size: self.board.surface() }]
    }

    // --- Hooks ---

    /// Register the initialisation hook, replacing any previous one.
    pub fn on_initialised(&mut self, hook: Option<Hook>) {
        self.initialised_hook = hook;
    }

    /// Register the completion hook, replacing any previous one.
    pub fn on_solved(&mut self, hook: Option<Hook>) {
        self.solved_hook = hook;
    }

    // --- Input events ---

    /// Grab the topmost unsolved piece under `pt`.
    ///
    /// While already dragging, a hit switches the drag to the new piece and a
    /// miss keeps the current drag.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let Some(index) = hit_test(self.board.active(), pt) else {
            return Vec::new();
        };
        let Some(piece) = self.board.active_piece(index) else {
            return Vec::new();
        };
        let grid = piece.grid_index();
        self.input = InputState::grab(index, pt, piece.position);
        self.board.highlight(index);
        debug!("grabbed piece ({}, {})", grid.col, grid.row);
        vec![Action::PieceGrabbed { grid }]
    }

    /// Drag the grabbed piece so the grab point follows `pt`.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let (Some(index), Some(target)) = (self.input.dragging_index(), self.input.target_for(pt)) else {
            return Vec::new();
        };
        let Some(grid) = self.board.active_piece(index).map(Piece::grid_index) else {
            return Vec::new();
        };
        let Some(position) = self.board.move_piece(index, target) else {
            return Vec::new();
        };
        vec![Action::PieceMoved { grid, position }]
    }

    /// Release the grabbed piece: snap it if close enough, otherwise raise it
    /// to the top of the z-order.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let Some(index) = self.input.dragging_index() else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        self.board.clear_highlight();

        let Some(grid) = self.board.active_piece(index).map(Piece::grid_index) else {
            return Vec::new();
        };

        if !try_solve(&mut self.board, index, self.config.solve_tolerance) {
            self.board.bring_to_front(index);
            debug!("dropped piece ({}, {})", grid.col, grid.row);
            return vec![Action::PieceDropped { grid }];
        }

        let mut actions = vec![Action::PieceSolved { grid }];
        if self.board.is_solved() {
            info!("puzzle solved: {} pieces placed", self.board.len());
            if let Some(hook) = self.solved_hook.as_mut() {
                hook();
            }
            actions.push(Action::PuzzleSolved);
        }
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    /// The piece currently being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<&Piece> {
        self.input.dragging_index().and_then(|i| self.board.active_piece(i))
    }

    /// Whether every piece of an initialised puzzle has been placed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.board.is_empty() && self.board.is_solved()
    }

    #[must_use]
    pub fn surface(&self) -> Size {
        self.board.surface()
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.board.grid()
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }
}

/// The full puzzle. Wraps `PuzzleCore` and owns the host collaborators.
pub struct Puzzle<S: Surface, C: Container> {
    image: S::Image,
    container: C,
    surface: S,
    pub core: PuzzleCore,
}

impl<S: Surface, C: Container> Puzzle<S, C> {
    /// Bind a configured core to its collaborators. Pieces are generated by
    /// the first call to [`Puzzle::initialise`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyImage`] if the image has no pixels.
    pub fn new(image: S::Image, container: C, surface: S, core: PuzzleCore) -> Result<Self, ConfigError> {
        let natural = image.natural_size();
        if !natural.is_drawable() {
            return Err(ConfigError::EmptyImage { width: natural.w, height: natural.h });
        }
        Ok(Self { image, container, surface, core })
    }

    /// Size the surface to the container and (re)build the puzzle.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MismatchedGrid`] when only one dimension is supplied,
    /// [`ConfigError::InvalidGrid`] when either is zero.
    pub fn initialise(&mut self, across: Option<u32>, down: Option<u32>) -> Result<Vec<Action>, ConfigError> {
        let grid = match (across, down) {
            (None, None) => None,
            (Some(a), Some(d)) => Some(GridSize::new(a, d)?),
            _ => return Err(ConfigError::MismatchedGrid),
        };
        Ok(self.initialise_grid(grid))
    }

    /// Size the surface to the container and (re)build with an already
    /// validated grid.
    pub fn initialise_grid(&mut self, grid: Option<GridSize>) -> Vec<Action> {
        let size = self.fit_surface();
        self.core.initialise(size, grid)
    }

    /// Re-fit the surface to the container and rescale every piece.
    pub fn resize_canvas(&mut self) -> Vec<Action> {
        let size = self.fit_surface();
        self.core.resize(size)
    }

    /// Size the surface to the container. Returns the size the surface
    /// actually took, which may be rounded to whole pixels.
    fn fit_surface(&mut self) -> Size {
        let size = fit_aspect(self.image.natural_size(), self.container.size());
        self.surface.set_size(size);
        self.surface.size()
    }

    // --- Render ---

    /// Draw the current state to the surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any surface call fails.
    pub fn render(&mut self) -> Result<(), S::Error> {
        draw_scene(&mut self.surface, &self.image, self.core.board(), &self.core.config().style)
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(pt)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    // --- Delegated hooks and queries ---

    pub fn on_initialised(&mut self, hook: Option<Hook>) {
        self.core.on_initialised(hook);
    }

    pub fn on_solved(&mut self, hook: Option<Hook>) {
        self.core.on_solved(hook);
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.core.is_solved()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

//! Browser binding: web-sys collaborators and the `JigsawPuzzle` JS class.
//!
//! This module is the only place that touches the DOM. It implements the
//! capability traits for `<canvas>`, `<img>` and a container element, wires
//! Pointer Events to the engine, and repaints from a `requestAnimationFrame`
//! loop.
//!
//! JS callbacks fire after the puzzle's `RefCell` borrow is released, so a
//! callback may call straight back into the puzzle (e.g. `initialise()` from
//! `onSolved`).

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Once;

use js_sys::Function;
use log::{Level, debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, HtmlImageElement, PointerEvent};

use crate::config::{GridSize, PuzzleConfig};
use crate::consts::{DEFAULT_PIECES_ACROSS, DEFAULT_PIECES_DOWN};
use crate::engine::{Action, Puzzle, PuzzleCore};
use crate::error::ConfigError;
use crate::geom::{Point, Rect, Size};
use crate::input::PointerLock;
use crate::shape::TabArc;
use crate::surface::{Container, PuzzleImage, Surface};

// =============================================================
// Collaborators
// =============================================================

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Bind to a canvas element.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidHandle`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, ConfigError> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx,
            Ok(None) | Err(_) => return Err(ConfigError::InvalidHandle("canvas 2D context")),
        };
        let ctx = ctx
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ConfigError::InvalidHandle("canvas 2D context"))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;
    type Error = JsValue;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn set_size(&mut self, size: Size) {
        self.canvas.set_width(size.w as u32);
        self.canvas.set_height(size.h as u32);
    }

    fn size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.w, size.h);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_stroke(&mut self, width: f64, color: &str) {
        self.ctx.set_line_width(width);
        self.ctx.set_stroke_style_str(color);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, arc: &TabArc) -> Result<(), JsValue> {
        self.ctx.arc_with_anticlockwise(
            arc.center.x,
            arc.center.y,
            arc.radius,
            arc.start_angle,
            arc.end_angle,
            arc.anticlockwise,
        )
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn clip(&mut self) {
        self.ctx.clip();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn draw_image(&mut self, image: &HtmlImageElement, dest: Rect) -> Result<(), JsValue> {
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            dest.origin.x,
            dest.origin.y,
            dest.size.w,
            dest.size.h,
        )
    }
}

impl PuzzleImage for HtmlImageElement {
    fn natural_size(&self) -> Size {
        Size::new(f64::from(self.natural_width()), f64::from(self.natural_height()))
    }
}

impl Container for HtmlElement {
    fn size(&self) -> Size {
        Size::new(f64::from(self.offset_width()), f64::from(self.offset_height()))
    }
}

// =============================================================
// JS class
// =============================================================

type BrowserPuzzle = Puzzle<CanvasSurface, HtmlElement>;
type FrameCallback = Closure<dyn FnMut(f64)>;
type PointerCallback = Closure<dyn FnMut(PointerEvent)>;

struct Inner {
    puzzle: BrowserPuzzle,
    pointer: PointerLock,
    on_initialised: Option<Function>,
    on_solved: Option<Function>,
}

impl Inner {
    /// Route one pointer event to the puzzle. Events from a pointer other
    /// than the one holding the drag are dropped.
    fn pointer_event(&mut self, kind: PointerKind, id: i32, pt: Point) -> Option<Vec<Action>> {
        if self.puzzle.core.dragged().is_none() {
            self.pointer.release();
        }
        if !self.pointer.admits(id) {
            return None;
        }
        let actions = match kind {
            PointerKind::Down => self.puzzle.on_pointer_down(pt),
            PointerKind::Move => self.puzzle.on_pointer_move(pt),
            PointerKind::Up => self.puzzle.on_pointer_up(),
        };
        match kind {
            PointerKind::Down if self.puzzle.core.dragged().is_some() => self.pointer.acquire(id),
            PointerKind::Up => self.pointer.release(),
            PointerKind::Down | PointerKind::Move => {}
        }
        Some(actions)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerKind {
    Down,
    Move,
    Up,
}

const POINTER_EVENTS: [(&str, PointerKind); 4] = [
    ("pointerdown", PointerKind::Down),
    ("pointermove", PointerKind::Move),
    ("pointerup", PointerKind::Up),
    ("pointercancel", PointerKind::Up),
];

/// An interactive jigsaw puzzle bound to an image, a container and a canvas.
#[wasm_bindgen]
pub struct JigsawPuzzle {
    inner: Rc<RefCell<Inner>>,
    canvas: HtmlCanvasElement,
    listeners: Vec<(&'static str, PointerCallback)>,
}

#[wasm_bindgen]
impl JigsawPuzzle {
    /// `new JigsawPuzzle(image, container, canvas, onInitialised?, onSolved?, across?, down?)`
    ///
    /// # Errors
    ///
    /// Throws if a handle has the wrong type, a callback is not a function,
    /// the grid is not positive integers or the image has not loaded.
    #[wasm_bindgen(constructor)]
    pub fn new(
        image: JsValue,
        container: JsValue,
        canvas: JsValue,
        on_initialised: JsValue,
        on_solved: JsValue,
        across: Option<f64>,
        down: Option<f64>,
    ) -> Result<JigsawPuzzle, JsValue> {
        let across = across.unwrap_or(f64::from(DEFAULT_PIECES_ACROSS));
        let down = down.unwrap_or(f64::from(DEFAULT_PIECES_DOWN));
        let grid = GridSize::from_host(Some(across), Some(down)).map_err(to_js)?;
        let mut config = PuzzleConfig::default();
        if let Some(grid) = grid {
            config.pieces_across = grid.across();
            config.pieces_down = grid.down();
        }
        let callbacks = (
            callback_arg(on_initialised, "initialised").map_err(to_js)?,
            callback_arg(on_solved, "solved").map_err(to_js)?,
        );
        Self::build(image, container, canvas, config, callbacks)
    }

    /// `JigsawPuzzle.withOptions(image, container, canvas, optionsJson)`
    ///
    /// # Errors
    ///
    /// Throws on a bad handle, malformed JSON or out-of-range options.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(
        image: JsValue,
        container: JsValue,
        canvas: JsValue,
        options: &str,
    ) -> Result<JigsawPuzzle, JsValue> {
        let config = PuzzleConfig::from_json(options).map_err(to_js)?;
        Self::build(image, container, canvas, config, (None, None))
    }

    /// Rebuild the puzzle, optionally with a new grid.
    ///
    /// # Errors
    ///
    /// Throws if only one dimension is given or either is not a positive integer.
    pub fn initialise(&self, across: Option<f64>, down: Option<f64>) -> Result<(), JsValue> {
        let grid = GridSize::from_host(across, down).map_err(to_js)?;
        let actions = self.inner.borrow_mut().puzzle.initialise_grid(grid);
        notify(&self.inner, &actions);
        Ok(())
    }

    /// Re-fit the canvas to its container and rescale every piece.
    #[wasm_bindgen(js_name = resizeCanvas)]
    pub fn resize_canvas(&self) {
        let actions = self.inner.borrow_mut().puzzle.resize_canvas();
        notify(&self.inner, &actions);
    }

    /// Register the initialisation callback. `null` clears it.
    ///
    /// # Errors
    ///
    /// Throws if `callback` is neither a function nor empty.
    #[wasm_bindgen(js_name = onInitialised)]
    pub fn on_initialised(&self, callback: JsValue) -> Result<(), JsValue> {
        self.inner.borrow_mut().on_initialised = callback_arg(callback, "initialised").map_err(to_js)?;
        Ok(())
    }

    /// Register the solved callback. `null` clears it.
    ///
    /// # Errors
    ///
    /// Throws if `callback` is neither a function nor empty.
    #[wasm_bindgen(js_name = onSolved)]
    pub fn on_solved(&self, callback: JsValue) -> Result<(), JsValue> {
        self.inner.borrow_mut().on_solved = callback_arg(callback, "solved").map_err(to_js)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = isSolved)]
    pub fn is_solved(&self) -> bool {
        self.inner.borrow().puzzle.is_solved()
    }

    #[wasm_bindgen(js_name = pieceCount)]
    pub fn piece_count(&self) -> usize {
        self.inner.borrow().puzzle.core.board().len()
    }

    #[wasm_bindgen(js_name = solvedCount)]
    pub fn solved_count(&self) -> usize {
        self.inner.borrow().puzzle.core.board().solved().len()
    }
}

impl JigsawPuzzle {
    fn build(
        image: JsValue,
        container: JsValue,
        canvas: JsValue,
        config: PuzzleConfig,
        (on_initialised, on_solved): (Option<Function>, Option<Function>),
    ) -> Result<JigsawPuzzle, JsValue> {
        init_logging();

        let image = image.dyn_into::<HtmlImageElement>().map_err(|_| to_js(ConfigError::InvalidHandle("image")))?;
        let container = container
            .dyn_into::<HtmlElement>()
            .map_err(|_| to_js(ConfigError::InvalidHandle("container element")))?;
        let canvas = canvas
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| to_js(ConfigError::InvalidHandle("canvas element")))?;

        let surface = CanvasSurface::new(canvas.clone()).map_err(to_js)?;
        let core = PuzzleCore::with_entropy(config, entropy()).map_err(to_js)?;
        let puzzle = Puzzle::new(image, container, surface, core).map_err(to_js)?;
        let pointer = PointerLock::default();
        let inner = Rc::new(RefCell::new(Inner { puzzle, pointer, on_initialised, on_solved }));

        canvas.style().set_property("touch-action", "none")?;
        let mut this = JigsawPuzzle { inner, canvas, listeners: Vec::new() };
        this.attach_pointer_listeners()?;
        start_frame_loop(Rc::downgrade(&this.inner))?;

        let actions = this.inner.borrow_mut().puzzle.initialise_grid(None);
        notify(&this.inner, &actions);
        Ok(this)
    }

    fn attach_pointer_listeners(&mut self) -> Result<(), JsValue> {
        for (name, kind) in POINTER_EVENTS {
            let inner = Rc::downgrade(&self.inner);
            let canvas = self.canvas.clone();
            let callback = PointerCallback::wrap(Box::new(move |event: PointerEvent| {
                let Some(inner) = inner.upgrade() else {
                    return;
                };
                let pt = event_point(&canvas, &event);
                let routed = inner.borrow_mut().pointer_event(kind, event.pointer_id(), pt);
                let Some(actions) = routed else {
                    return;
                };
                if kind == PointerKind::Down && !actions.is_empty() {
                    event.prevent_default();
                    if let Err(err) = canvas.set_pointer_capture(event.pointer_id()) {
                        debug!("pointer capture refused: {err:?}");
                    }
                }
                notify(&inner, &actions);
            }));
            self.canvas.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())?;
            self.listeners.push((name, callback));
        }
        Ok(())
    }
}

impl Drop for JigsawPuzzle {
    fn drop(&mut self) {
        for (name, callback) in self.listeners.drain(..) {
            if let Err(err) = self.canvas.remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
            {
                warn!("failed to detach {name} listener: {err:?}");
            }
        }
    }
}

// =============================================================
// Helpers
// =============================================================

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(Level::Info).is_err() {
            debug!("logger already installed");
        }
    });
}

fn to_js(err: ConfigError) -> JsValue {
    JsError::new(&err.to_string()).into()
}

/// `null`/`undefined` clears a callback slot; anything else must be a function.
fn callback_arg(value: JsValue, name: &'static str) -> Result<Option<Function>, ConfigError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    value.dyn_into::<Function>().map(Some).map_err(|_| ConfigError::NotAFunction(name))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn entropy() -> u64 {
    (js_sys::Math::random() * 2f64.powi(53)) as u64
}

/// Client coordinates translated into canvas space.
fn event_point(canvas: &HtmlCanvasElement, event: &PointerEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(f64::from(event.client_x()) - rect.left(), f64::from(event.client_y()) - rect.top())
}

/// Fire the JS callbacks for `actions`. The puzzle must not be borrowed.
fn notify(inner: &Rc<RefCell<Inner>>, actions: &[Action]) {
    for action in actions {
        let callback = match action {
            Action::Initialised { .. } => inner.borrow().on_initialised.clone(),
            Action::PuzzleSolved => inner.borrow().on_solved.clone(),
            _ => None,
        };
        if let Some(callback) = callback {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                warn!("puzzle callback threw: {err:?}");
            }
        }
    }
}

/// Repaint once per animation frame until the puzzle is freed.
fn start_frame_loop(inner: Weak<RefCell<Inner>>) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&slot);
    *slot.borrow_mut() = Some(FrameCallback::wrap(Box::new(move |_ts: f64| {
        let Some(inner) = inner.upgrade() else {
            // Freed: drop the closure to break its self-reference.
            next.borrow_mut().take();
            return;
        };
        if let Err(err) = inner.borrow_mut().puzzle.render() {
            warn!("frame failed: {err:?}");
        }
        if let Err(err) = request_frame(&next) {
            warn!("frame loop stopped: {err:?}");
        }
    })));
    request_frame(&slot)
}

fn request_frame(slot: &Rc<RefCell<Option<FrameCallback>>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    if let Some(callback) = slot.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{AnimationFrame, request_animation_frame};
use rand::Rng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::{Density, FieldCore};
use crate::render;

/// The particle engine. Wraps [`FieldCore`] and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: FieldCore,
}

impl Engine {
    /// Bind to `canvas`, size its drawing buffer to its layout box, and seed
    /// a field for that size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new<R: Rng>(canvas: HtmlCanvasElement, density: Density, rng: &mut R) -> Result<Self, JsValue> {
        let ctx = context_2d(&canvas)?;
        let (width, height) = apply_layout_size(&canvas);
        let core = FieldCore::seed(width, height, density, rng);
        Ok(Self { canvas, ctx, core })
    }

    /// Re-read the canvas layout size after a viewport resize. Only the drawing
    /// surface changes; particles are not redistributed.
    pub fn sync_size(&mut self) {
        let (width, height) = apply_layout_size(&self.canvas);
        self.core.resize(width, height);
    }

    /// Advance the field one step and draw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.core.step();
        render::draw(&self.ctx, &self.core)
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    match canvas.get_context("2d")? {
        Some(ctx) => ctx.dyn_into::<CanvasRenderingContext2d>().map_err(JsValue::from),
        None => Err(JsValue::from_str("canvas has no 2d context")),
    }
}

fn apply_layout_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = u32::try_from(canvas.offset_width()).unwrap_or(0);
    let height = u32::try_from(canvas.offset_height()).unwrap_or(0);
    canvas.set_width(width);
    canvas.set_height(height);
    (f64::from(width), f64::from(height))
}

/// A repeating per-frame task driving an [`Engine`].
///
/// Each display frame advances and redraws the engine, then schedules the
/// next frame. Dropping the loop (or calling [`FrameLoop::stop`]) cancels the
/// pending frame, which ends the animation.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    /// Start animating `engine` from the next display frame.
    #[must_use]
    pub fn start(engine: Rc<RefCell<Engine>>) -> Self {
        let pending = Rc::new(RefCell::new(None));
        schedule(engine, Rc::clone(&pending));
        Self { pending }
    }

    /// Cancel the pending frame. Idempotent.
    pub fn stop(&self) {
        self.pending.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(engine: Rc<RefCell<Engine>>, pending: Rc<RefCell<Option<AnimationFrame>>>) {
    let pending_for_cb = Rc::clone(&pending);
    let handle = request_animation_frame(move |_ts| {
        pending_for_cb.borrow_mut().take();
        // A failed draw leaves the loop stopped rather than retrying every frame.
        if engine.borrow_mut().frame().is_err() {
            return;
        }
        schedule(engine, pending_for_cb);
    });
    *pending.borrow_mut() = Some(handle);
}

//! Rendering: draws a particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the field and produces pixels.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller ([`crate::engine::Engine::frame`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::FILL_STYLE;
use crate::field::FieldCore;

/// Clear the surface and draw every particle as a faint filled circle.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. a negative radius).
pub fn draw(ctx: &CanvasRenderingContext2d, field: &FieldCore) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width, field.height);
    ctx.set_fill_style_str(FILL_STYLE);
    for particle in &field.particles {
        ctx.begin_path();
        ctx.arc(particle.x, particle.y, particle.radius, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

//! Pointer-driven 3D tilt for cards and parallax for the hero illustration.
//!
//! Both effects normalize the pointer against the element's bounding box and
//! return CSS transform strings; leaving the element restores [`NEUTRAL`].

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

/// Transform value that clears any applied effect.
pub const NEUTRAL: &str = "";

/// Element bounds in client coordinates, as from `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Pointer position as a fraction of the box (`0.0..=1.0` inside it).
    /// `None` for an empty box.
    #[must_use]
    pub fn normalize(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(((client_x - self.left) / self.width, (client_y - self.top) / self.height))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltParams {
    /// Rotation at the card edge is half of this, in degrees.
    pub max_deg: f64,
    pub perspective_px: f64,
    /// Depth offset applied to the card body.
    pub depth_px: f64,
}

impl Default for TiltParams {
    fn default() -> Self {
        Self { max_deg: 8.0, perspective_px: 800.0, depth_px: 12.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxParams {
    pub shift_px: f64,
    pub rotate_deg: f64,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self { shift_px: 8.0, rotate_deg: 3.0 }
    }
}

/// Transforms for a card and its inner body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardTransform {
    pub card: String,
    pub body: String,
}

impl CardTransform {
    #[must_use]
    pub fn neutral() -> Self {
        Self { card: NEUTRAL.to_owned(), body: NEUTRAL.to_owned() }
    }
}

#[must_use]
pub fn card_tilt(params: TiltParams, bounds: Bounds, client_x: f64, client_y: f64) -> CardTransform {
    let Some((px, py)) = bounds.normalize(client_x, client_y) else {
        return CardTransform::neutral();
    };
    let rx = css((py - 0.5) * params.max_deg);
    let ry = css((px - 0.5) * -params.max_deg);
    CardTransform {
        card: format!("perspective({}px) rotateX({rx}deg) rotateY({ry}deg)", params.perspective_px),
        body: format!("translateZ({}px)", params.depth_px),
    }
}

#[must_use]
pub fn hero_parallax(params: ParallaxParams, bounds: Bounds, client_x: f64, client_y: f64) -> String {
    let Some((px, py)) = bounds.normalize(client_x, client_y) else {
        return NEUTRAL.to_owned();
    };
    let (nx, ny) = (px - 0.5, py - 0.5);
    let dx = css(nx * params.shift_px);
    let dy = css(ny * params.shift_px);
    let rot = css(nx * params.rotate_deg);
    format!("translate3d({dx}px,{dy}px,0) rotate({rot}deg)")
}

// -0.0 + 0.0 is +0.0, which keeps "-0" out of the CSS text.
fn css(value: f64) -> f64 {
    value + 0.0
}

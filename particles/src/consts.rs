//! Shared numeric constants for the particles crate.

// ── Density ─────────────────────────────────────────────────────

/// Canvas area, in square CSS pixels, that earns one particle.
pub const AREA_PER_PARTICLE: f64 = 90_000.0;

/// Floor on the particle count regardless of canvas size.
pub const MIN_PARTICLES: usize = 12;

/// Ceiling on the particle count, whatever the density asks for.
pub const MAX_PARTICLES: usize = 1_000;

// ── Particle shape and motion ───────────────────────────────────

/// Radius range in CSS pixels (lower inclusive, upper exclusive).
pub const RADIUS_MIN: f64 = 0.8;
pub const RADIUS_MAX: f64 = 2.5;

/// Horizontal velocity range in pixels per frame.
pub const VELOCITY_X_MAX: f64 = 0.2;

/// Vertical velocity range in pixels per frame.
pub const VELOCITY_Y_MAX: f64 = 0.15;

/// Distance past each canvas edge a particle may drift before it wraps.
pub const WRAP_MARGIN_PX: f64 = 10.0;

// ── Paint ───────────────────────────────────────────────────────

/// Fill used for every particle.
pub const FILL_STYLE: &str = "rgba(255,255,255,0.06)";

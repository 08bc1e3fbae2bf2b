//! Browser-free particle simulation.
//!
//! [`FieldCore`] holds everything the animation needs except the canvas, so
//! seeding, stepping and wrapping are testable without WASM.

use rand::Rng;

use crate::consts::{
    AREA_PER_PARTICLE, MAX_PARTICLES, MIN_PARTICLES, RADIUS_MAX, RADIUS_MIN, VELOCITY_X_MAX, VELOCITY_Y_MAX, WRAP_MARGIN_PX,
};

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// A single drifting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    /// Advance by one frame of velocity, wrapping around a `width` x `height`
    /// surface extended by [`WRAP_MARGIN_PX`] on every side.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        self.x = wrap_axis(self.x, width);
        self.y = wrap_axis(self.y, height);
    }
}

fn wrap_axis(value: f64, extent: f64) -> f64 {
    if value < -WRAP_MARGIN_PX {
        extent + WRAP_MARGIN_PX
    } else if value > extent + WRAP_MARGIN_PX {
        -WRAP_MARGIN_PX
    } else {
        value
    }
}

/// How many particles a canvas of the given area receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    pub area_per_particle: f64,
    pub min_count: usize,
}

impl Default for Density {
    fn default() -> Self {
        Self { area_per_particle: AREA_PER_PARTICLE, min_count: MIN_PARTICLES }
    }
}

impl Density {
    /// Particle count for a `width` x `height` surface, never below
    /// `min_count` and never above [`MAX_PARTICLES`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn count_for(&self, width: f64, height: f64) -> usize {
        let floor = self.min_count.min(MAX_PARTICLES);
        if self.area_per_particle <= 0.0 {
            return floor;
        }
        let area = (width * height).max(0.0);
        let scaled = (area / self.area_per_particle).floor().min(MAX_PARTICLES as f64);
        (scaled as usize).max(floor)
    }
}

/// Simulation state for one canvas.
#[derive(Debug, Clone, Default)]
pub struct FieldCore {
    pub particles: Vec<Particle>,
    pub width: f64,
    pub height: f64,
}

impl FieldCore {
    /// Seed a field for a `width` x `height` surface.
    pub fn seed<R: Rng>(width: f64, height: f64, density: Density, rng: &mut R) -> Self {
        let count = density.count_for(width, height);
        let particles = (0..count)
            .map(|_| Particle {
                x: sample(rng, 0.0, width),
                y: sample(rng, 0.0, height),
                radius: sample(rng, RADIUS_MIN, RADIUS_MAX),
                vx: sample(rng, -VELOCITY_X_MAX, VELOCITY_X_MAX),
                vy: sample(rng, -VELOCITY_Y_MAX, VELOCITY_Y_MAX),
            })
            .collect();
        Self { particles, width, height }
    }

    /// Update the drawing surface size. Particles keep their positions and
    /// velocities; they drift into the new bounds on their own.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }
}

// `random_range` panics on an empty range, which a zero-sized canvas produces.
fn sample<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low { rng.random_range(low..high) } else { low }
}

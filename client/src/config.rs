//! Site configuration.
//!
//! Defaults reproduce the portfolio as shipped. A page may override any
//! subset by embedding JSON in `<script type="application/json" id="site-config">`;
//! absent keys keep their defaults.

use serde::Deserialize;

use crate::error::UiError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_EMAIL: &str = "jadkhalil266@gmail.com";
pub const DEFAULT_SIGNATURE: &str = "\n\n--\nSent from portfolio";
pub const DEFAULT_COPY_LABEL: &str = "Copy Email";
pub const DEFAULT_COPIED_LABEL: &str = "Copied!";
pub const DEFAULT_COPY_CONFIRM_MS: u32 = 1500;

/// Element id of the embedded JSON override.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Phrases cycled by the hero typing animation.
pub const DEFAULT_PHRASES: &[&str] =
    &["mobile apps.", "efficient algorithms.", "beautiful UIs.", "flutter solutions.", "clean code."];

/// Timing of the typing animation, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypingCadence {
    /// Delay after revealing one character.
    pub type_ms: u32,
    /// Delay after removing one character.
    pub delete_ms: u32,
    /// Pause once a phrase is fully shown.
    pub hold_ms: u32,
}

impl Default for TypingCadence {
    fn default() -> Self {
        Self { type_ms: 80, delete_ms: 40, hold_ms: 1200 }
    }
}

/// Timing of the mascot animation, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MascotTiming {
    pub duration_ms: u32,
    pub load_duration_ms: u32,
    pub load_delay_ms: u32,
    pub brand_delay_ms: u32,
}

impl Default for MascotTiming {
    fn default() -> Self {
        Self { duration_ms: 800, load_duration_ms: 1000, load_delay_ms: 500, brand_delay_ms: 350 }
    }
}

/// Smallest accepted `particles.area_per_particle`, in square CSS pixels.
pub const MIN_AREA_PER_PARTICLE: f64 = 1.0;
/// Largest accepted `particles.min_count`.
pub const MAX_PARTICLE_FLOOR: usize = 1_000;

/// Particle density for the background canvas.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleDensity {
    pub area_per_particle: f64,
    pub min_count: usize,
}

impl Default for ParticleDensity {
    fn default() -> Self {
        Self { area_per_particle: 90_000.0, min_count: 12 }
    }
}

impl ParticleDensity {
    fn check(&self) -> Result<(), UiError> {
        if self.area_per_particle < MIN_AREA_PER_PARTICLE {
            return Err(UiError::OutOfRange("particles.area_per_particle"));
        }
        if self.min_count > MAX_PARTICLE_FLOOR {
            return Err(UiError::OutOfRange("particles.min_count"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub phrases: Vec<String>,
    pub typing: TypingCadence,
    /// Contact address. The page's `#emailAddr` text wins when present.
    pub email: String,
    pub mail_signature: String,
    pub copy_label: String,
    pub copied_label: String,
    pub copy_confirm_ms: u32,
    pub mascot: MascotTiming,
    pub particles: ParticleDensity,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            typing: TypingCadence::default(),
            email: DEFAULT_EMAIL.to_owned(),
            mail_signature: DEFAULT_SIGNATURE.to_owned(),
            copy_label: DEFAULT_COPY_LABEL.to_owned(),
            copied_label: DEFAULT_COPIED_LABEL.to_owned(),
            copy_confirm_ms: DEFAULT_COPY_CONFIRM_MS,
            mascot: MascotTiming::default(),
            particles: ParticleDensity::default(),
        }
    }
}

impl SiteConfig {
    /// Parse an override document. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when `raw` is not valid JSON for this shape,
    /// and [`UiError::OutOfRange`] when the particle density would flood the canvas.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.particles.check()?;
        Ok(config)
    }

    /// Replace the contact address with the text shown on the page, if any.
    #[must_use]
    pub fn with_page_email(mut self, shown: Option<&str>) -> Self {
        if let Some(address) = shown.map(str::trim).filter(|a| !a.is_empty()) {
            self.email = address.to_owned();
        }
        self
    }
}

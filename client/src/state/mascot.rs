//! Mascot animation trigger.
//!
//! DESIGN
//! ======
//! Two states, `Idle` and `Active { until_ms }`. A request while active is
//! ignored, which is the debounce contract: overlapping requests yield one
//! active/inactive cycle. The binding schedules [`Mascot::finish`] for the
//! accepted duration.
//!
//! The automatic play on load happens at most once. Scrolling the hero back
//! into view only counts after that play has fired, so the hero's initial
//! intersection when the page opens does not pre-empt it.

#[cfg(test)]
#[path = "mascot_test.rs"]
mod mascot_test;

pub const MASCOT_SELECTOR: &str = ".character";
pub const MESSAGE_SELECTOR: &str = ".character-msg";
pub const ACTIVE_CLASS: &str = "active";
/// Visible fraction of the hero that counts as "back at the top".
pub const HERO_THRESHOLD: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MascotState {
    #[default]
    Idle,
    Active {
        until_ms: f64,
    },
}

/// Why a trigger was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerSource {
    Load,
    HashChange,
    PopState,
    BrandClick,
    HeroVisible,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Mascot {
    state: MascotState,
    played_on_load: bool,
}

impl Mascot {
    #[must_use]
    pub fn state(&self) -> MascotState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, MascotState::Active { .. })
    }

    #[must_use]
    pub fn has_played_on_load(&self) -> bool {
        self.played_on_load
    }

    /// Whether a request from `source` should be considered at all.
    #[must_use]
    pub fn accepts(&self, source: TriggerSource) -> bool {
        source != TriggerSource::HeroVisible || self.played_on_load
    }

    /// Start a cycle at `now_ms` lasting `duration_ms`. Returns `false`
    /// while a cycle is already running or when `source` is not accepted.
    ///
    /// A [`TriggerSource::Load`] request marks the load play as done even
    /// when the debounce swallows it; a second one is always refused.
    pub fn request(&mut self, source: TriggerSource, now_ms: f64, duration_ms: u32) -> bool {
        if source == TriggerSource::Load {
            if std::mem::replace(&mut self.played_on_load, true) {
                return false;
            }
        } else if !self.accepts(source) {
            return false;
        }
        if self.is_active() {
            return false;
        }
        self.state = MascotState::Active { until_ms: now_ms + f64::from(duration_ms) };
        true
    }

    /// End the running cycle. Returns `false` if already idle.
    pub fn finish(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = MascotState::Idle;
        was_active
    }
}

/// `true` when `hash` (as from `location.hash`) points at the top section.
#[must_use]
pub fn is_top_hash(hash: &str) -> bool {
    hash.is_empty() || hash == "#hero"
}

//! One-shot viewport animations: section reveal and skill-bar fill.
//!
//! Each tracked element moves Unobserved → Triggered exactly once. The
//! tracker records the transition so a second intersection is recognized as a
//! repeat instead of relying on the observer having been disconnected.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Elements that fade in when scrolled into view.
pub const REVEAL_SELECTOR: &str = ".section, .card";
/// Visible fraction that triggers a reveal.
pub const REVEAL_THRESHOLD: f64 = 0.12;
/// Permanent marker class enabling the CSS entrance animation.
pub const REVEALED_CLASS: &str = "revealed";

pub const SKILL_SELECTOR: &str = ".skill-bar";
pub const SKILL_FILL_SELECTOR: &str = ".skill-fill";
/// Visible fraction that triggers a skill-bar fill.
pub const SKILL_THRESHOLD: f64 = 0.3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visit {
    #[default]
    Unobserved,
    Triggered,
}

/// Per-element one-shot tracker, indexed by the element's position in the
/// observed set.
#[derive(Clone, Debug, Default)]
pub struct OneShot {
    visits: Vec<Visit>,
}

impl OneShot {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { visits: vec![Visit::Unobserved; len] }
    }

    /// Record that element `index` became visible. Returns `true` only on its
    /// first visit; repeats and unknown indices return `false`.
    pub fn visit(&mut self, index: usize) -> bool {
        let Some(visit) = self.visits.get_mut(index) else {
            return false;
        };
        if *visit == Visit::Triggered {
            return false;
        }
        *visit = Visit::Triggered;
        true
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<Visit> {
        self.visits.get(index).copied()
    }

    #[must_use]
    pub fn triggered_count(&self) -> usize {
        self.visits.iter().filter(|v| **v == Visit::Triggered).count()
    }
}

/// Target fill from a `data-skill` value, read like `parseInt`: leading
/// whitespace, optional sign, then digits up to the first non-digit. Absent
/// or non-numeric values give 0; the result is clamped to `0..=100`.
#[must_use]
pub fn skill_percent(raw: Option<&str>) -> u8 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(u32::from(d - b'0')));
    if negative {
        return 0;
    }
    u8::try_from(value.min(100)).unwrap_or(100)
}

/// CSS width for a fill percentage.
#[must_use]
pub fn fill_width(percent: u8) -> String {
    format!("{percent}%")
}

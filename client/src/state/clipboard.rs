//! Copy-address button label.
//!
//! A successful copy swaps the label to a confirmation for a short while.
//! Every swap bumps a generation counter and hands it to the revert timer, so
//! a timer left over from an earlier click cannot cut a later confirmation
//! short.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Alert text used when the clipboard is unavailable or refuses the write.
#[must_use]
pub fn failure_message(address: &str) -> String {
    format!("Copy failed — email: {address}")
}

/// Ticket for one pending revert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevertToken(u64);

#[derive(Clone, Debug)]
pub struct CopyLabel {
    idle: String,
    confirmed: String,
    generation: u64,
    showing_confirmation: bool,
}

impl CopyLabel {
    #[must_use]
    pub fn new(idle: &str, confirmed: &str) -> Self {
        Self { idle: idle.to_owned(), confirmed: confirmed.to_owned(), generation: 0, showing_confirmation: false }
    }

    /// Text the button should show right now.
    #[must_use]
    pub fn current(&self) -> &str {
        if self.showing_confirmation { &self.confirmed } else { &self.idle }
    }

    /// Switch to the confirmation text. Schedule a revert with the returned token.
    pub fn confirm(&mut self) -> RevertToken {
        self.generation += 1;
        self.showing_confirmation = true;
        RevertToken(self.generation)
    }

    /// Restore the idle text if `token` belongs to the latest confirmation.
    /// Returns the text to show, or `None` when the token is stale.
    pub fn revert(&mut self, token: RevertToken) -> Option<&str> {
        if token.0 != self.generation || !self.showing_confirmation {
            return None;
        }
        self.showing_confirmation = false;
        Some(&self.idle)
    }
}

//! Mobile navigation drawer state machine.
//!
//! Two states, Closed (initial) and Open. The menu button and the `m`
//! shortcut toggle; every other input only ever closes.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Value for the drawer's `aria-hidden` attribute.
    #[must_use]
    pub fn aria_hidden(self) -> &'static str {
        if self.is_open() { "false" } else { "true" }
    }

    /// Value for the menu button's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

/// Everything that can move the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerInput {
    MenuButton,
    Shortcut,
    Overlay,
    CloseButton,
    Escape,
    AnchorNavigation,
}

impl DrawerInput {
    fn toggles(self) -> bool {
        matches!(self, Self::MenuButton | Self::Shortcut)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Drawer {
    state: DrawerState,
}

impl Drawer {
    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Apply `input`. Returns the new state when it changed, `None` for a
    /// no-op (closing an already-closed drawer).
    pub fn handle(&mut self, input: DrawerInput) -> Option<DrawerState> {
        let next = match (input.toggles(), self.state) {
            (true, DrawerState::Closed) => DrawerState::Open,
            _ => DrawerState::Closed,
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

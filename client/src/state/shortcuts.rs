//! Global keyboard shortcuts.
//!
//! Shortcuts only route to transitions other components already own; this
//! module adds no state. They are suppressed while the visitor is typing.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ToggleTheme,
    OpenFirstProject,
    ToggleVideo,
    ToggleDrawer,
}

#[derive(Clone, Copy)]
pub struct ShortcutRow {
    pub key: &'static str,
    pub shortcut: Shortcut,
}

pub const SHORTCUTS: &[ShortcutRow] = &[
    ShortcutRow { key: "t", shortcut: Shortcut::ToggleTheme },
    ShortcutRow { key: "1", shortcut: Shortcut::OpenFirstProject },
    ShortcutRow { key: "v", shortcut: Shortcut::ToggleVideo },
    ShortcutRow { key: "m", shortcut: Shortcut::ToggleDrawer },
];

/// `KeyboardEvent.key` value that closes overlays.
pub const ESCAPE: &str = "Escape";

/// `true` when key presses belong to a text field rather than the page.
#[must_use]
pub fn is_text_entry(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("INPUT") || tag_name.eq_ignore_ascii_case("TEXTAREA")
}

/// Resolve a key press. `target_tag` is the event target's tag name, if any.
/// Keys are matched exactly, so `T` (shifted) is not a shortcut.
#[must_use]
pub fn resolve(key: &str, target_tag: Option<&str>) -> Option<Shortcut> {
    if target_tag.is_some_and(is_text_entry) {
        return None;
    }
    SHORTCUTS.iter().find(|row| row.key == key).map(|row| row.shortcut)
}

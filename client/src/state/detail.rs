//! Project detail overlay.
//!
//! Cards carry their display data in `data-*` attributes; opening the overlay
//! copies that data into the overlay's fields. Any close trigger hides it,
//! and closing an already-hidden overlay is harmless.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

/// Shown after `Stack: ` when a card lists no stack.
pub const STACK_PLACEHOLDER: &str = "—";

/// Display record read from a `.project` card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub stack: Option<String>,
    pub category: Option<String>,
}

/// Text written into the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailFields {
    pub title: String,
    pub description: String,
    pub stack: String,
}

impl DetailFields {
    #[must_use]
    pub fn from_card(card: &ProjectCard) -> Self {
        let stack = card
            .stack
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(STACK_PLACEHOLDER);
        Self {
            title: card.title.clone().unwrap_or_default(),
            description: card.description.clone().unwrap_or_default(),
            stack: format!("Stack: {stack}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenTrigger {
    /// `.open-project` button inside a card.
    OpenButton,
    /// Enter pressed on a focused card.
    EnterKey,
    /// The `1` shortcut, which targets the first card.
    Shortcut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

#[derive(Clone, Debug, Default)]
pub struct DetailOverlay {
    visible: bool,
    last_opened_by: Option<OpenTrigger>,
}

impl DetailOverlay {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn last_opened_by(&self) -> Option<OpenTrigger> {
        self.last_opened_by
    }

    /// Show the overlay for `card` and return the text to populate.
    pub fn open(&mut self, card: &ProjectCard, trigger: OpenTrigger) -> DetailFields {
        self.visible = true;
        self.last_opened_by = Some(trigger);
        DetailFields::from_card(card)
    }

    /// Hide the overlay. Returns whether it was visible.
    pub fn close(&mut self, _trigger: CloseTrigger) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Value for the overlay's `aria-hidden` attribute.
    #[must_use]
    pub fn aria_hidden(&self) -> &'static str {
        if self.visible { "false" } else { "true" }
    }
}

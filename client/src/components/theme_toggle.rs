//! Light/dark theme toggle button.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use crate::error::UiError;
use crate::state::theme::{LIGHT_CLASS, Theme, ThemeStore};
use crate::util::dom;
use crate::util::theme_store::BrowserStorage;
use crate::util::wiring::Wiring;

/// Shared theme controller, also driven by the `t` shortcut.
#[derive(Clone)]
pub struct ThemeHandle {
    themes: Rc<RefCell<ThemeStore<BrowserStorage>>>,
    body: HtmlElement,
    button: Option<Element>,
}

impl ThemeHandle {
    pub fn toggle(&self) {
        let theme = self.themes.borrow_mut().toggle();
        self.apply(theme);
    }

    fn apply(&self, theme: Theme) {
        dom::set_class(&self.body, LIGHT_CLASS, theme.is_light());
        if let Some(button) = &self.button {
            button.set_text_content(Some(theme.icon()));
            dom::set_attr(button, "aria-pressed", theme.aria_pressed());
        }
    }
}

/// Apply the stored theme and wire `#themeToggle` if present.
pub fn wire(doc: &Document) -> Result<(ThemeHandle, Wiring), UiError> {
    let body = dom::body(doc)?;
    let button = dom::by_id::<Element>(doc, "themeToggle").ok();
    let themes = ThemeStore::load(BrowserStorage);
    let initial = themes.current();
    let handle = ThemeHandle { themes: Rc::new(RefCell::new(themes)), body, button };
    handle.apply(initial);

    let mut wiring = Wiring::new("theme");
    if let Some(button) = &handle.button {
        let toggle = handle.clone();
        wiring.on(button, "click", move |_| toggle.toggle());
    }
    Ok((handle, wiring))
}

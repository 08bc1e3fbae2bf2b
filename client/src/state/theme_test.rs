use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Clone, Default)]
struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    fn with(value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(STORAGE_KEY.to_owned(), value.to_owned());
        store
    }

    fn stored(&self) -> Option<String> {
        self.items.borrow().get(STORAGE_KEY).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn missing_or_unknown_value_means_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
}

#[test]
fn light_value_means_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn icon_and_pressed_state_follow_theme() {
    assert_eq!(Theme::Light.icon(), "☀");
    assert_eq!(Theme::Dark.icon(), "☾");
    assert_eq!(Theme::Light.aria_pressed(), "true");
    assert_eq!(Theme::Dark.aria_pressed(), "false");
}

// =============================================================
// ThemeStore
// =============================================================

#[test]
fn load_reads_persisted_value() {
    let themes = ThemeStore::load(MemoryStore::with("light"));
    assert_eq!(themes.current(), Theme::Light);
}

#[test]
fn load_does_not_write() {
    let store = MemoryStore::default();
    let themes = ThemeStore::load(store.clone());
    assert_eq!(themes.current(), Theme::Dark);
    assert_eq!(store.stored(), None);
}

#[test]
fn persisted_value_agrees_with_theme_after_every_toggle() {
    let store = MemoryStore::default();
    let mut themes = ThemeStore::load(store.clone());
    for _ in 0..5 {
        let now = themes.toggle();
        assert_eq!(now, themes.current());
        assert_eq!(store.stored().as_deref(), Some(now.as_str()));
    }
}

#[test]
fn reload_restores_last_persisted_theme() {
    let store = MemoryStore::default();
    let mut themes = ThemeStore::load(store.clone());
    themes.toggle();
    themes.toggle();
    let last = themes.toggle();
    let reloaded = ThemeStore::load(store);
    assert_eq!(reloaded.current(), last);
    assert_eq!(last, Theme::Light);
}

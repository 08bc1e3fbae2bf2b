#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{Theme, ThemeStore};

#[test]
fn load_is_empty_in_non_hydrate_tests() {
    assert_eq!(BrowserStorage.load("theme"), None);
}

#[test]
fn save_is_noop_but_callable() {
    BrowserStorage.save("theme", "light");
    assert_eq!(BrowserStorage.load("theme"), None);
}

#[test]
fn store_without_storage_defaults_to_dark_and_still_toggles() {
    let mut themes = ThemeStore::load(BrowserStorage);
    assert_eq!(themes.current(), Theme::Dark);
    assert_eq!(themes.toggle(), Theme::Light);
}

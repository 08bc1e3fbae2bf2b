//! `localStorage` backend for the theme preference.
//!
//! Reads and writes are best-effort: a browser with storage disabled (or a
//! non-hydrate build) behaves as if nothing was ever stored, which means dark.

use crate::state::theme::PreferenceStore;

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

/// [`PreferenceStore`] over the window's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::debug!("theme: localStorage unavailable, preference not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::debug!("theme: localStorage rejected write");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

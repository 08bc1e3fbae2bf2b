//! WASM entry points.
//!
//! `start` runs when the module is instantiated and only installs logging.
//! The page then calls `mount()`, which wires every component whose markup is
//! present and hands back a [`Portfolio`] that owns them all.

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::{
    contact_form, copy_email, mascot, nav_drawer, observers, particle_background, project_filter, project_modal, shortcuts,
    smooth_scroll, theme_toggle, tilt, typed_text, video_overlay,
};
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::UiError;
use crate::util::dom;
use crate::util::wiring::Wiring;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::debug!("console logger installed");
    }
}

/// Every wired component. Dropping it, or calling [`Portfolio::stop`],
/// removes all listeners, cancels the particle loop and disconnects observers.
#[wasm_bindgen]
pub struct Portfolio {
    wirings: Vec<Wiring>,
}

#[wasm_bindgen]
impl Portfolio {
    /// Names of the components that were wired, in wiring order.
    #[must_use]
    pub fn wired(&self) -> Vec<String> {
        self.wirings.iter().map(|w| w.name().to_owned()).collect()
    }

    pub fn stop(&mut self) {
        let count = self.wirings.len();
        self.wirings.clear();
        log::info!("portfolio: stopped {count} components");
    }
}

impl Portfolio {
    fn keep(&mut self, name: &str, result: Result<Wiring, UiError>) {
        match result {
            Ok(wiring) => self.wirings.push(wiring),
            Err(err) => report(name, &err),
        }
    }

    fn keep_handle<H>(&mut self, name: &str, result: Result<(H, Wiring), UiError>) -> Option<H> {
        match result {
            Ok((handle, wiring)) => {
                self.wirings.push(wiring);
                Some(handle)
            }
            Err(err) => {
                report(name, &err);
                None
            }
        }
    }
}

fn report(name: &str, err: &UiError) {
    if err.is_missing() {
        log::debug!("{name}: skipped ({err})");
    } else {
        log::warn!("{name}: {err}");
    }
}

/// Defaults, overridden by the embedded `#site-config` JSON, then by the
/// address shown in `#emailAddr`.
fn load_config(doc: &Document) -> SiteConfig {
    let raw = doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()).unwrap_or_default();
    let config = SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("{err}; using defaults");
        SiteConfig::default()
    });
    let shown = doc.get_element_by_id("emailAddr").and_then(|el| el.text_content());
    config.with_page_email(shown.as_deref())
}

/// Wire every component found on the current page.
///
/// The returned [`Portfolio`] must be kept alive by the caller (for example
/// stored on `window`); once it is freed every listener is removed and every
/// loop stops.
///
/// # Errors
///
/// Fails only when there is no `window` or `document`. Individual
/// components that cannot be wired are logged and skipped.
#[wasm_bindgen]
pub fn mount() -> Result<Portfolio, JsValue> {
    let doc = dom::document()?;
    let config = load_config(&doc);
    let mut page = Portfolio { wirings: Vec::new() };

    let theme = page.keep_handle("theme", theme_toggle::wire(&doc));
    let drawer = page.keep_handle("nav-drawer", nav_drawer::wire(&doc));
    let modal = page.keep_handle("project-modal", project_modal::wire(&doc));
    let video = page.keep_handle("video", video_overlay::wire(&doc));

    page.keep("smooth-scroll", smooth_scroll::wire(&doc, drawer.clone()));
    page.keep("typed-text", typed_text::wire(&doc, &config));
    page.keep("project-filter", project_filter::wire(&doc));
    page.keep("observers", observers::wire(&doc));
    page.keep("contact-form", contact_form::wire(&doc, &config));
    page.keep("copy-email", copy_email::wire(&doc, &config));
    page.keep("particles", particle_background::wire(&doc, &config));
    page.keep("tilt", tilt::wire(&doc));
    page.keep("mascot", mascot::wire(&doc, &config));
    page.wirings.push(shortcuts::wire(&doc, shortcuts::Targets { theme, drawer, modal, video }));

    log::info!("portfolio: {} components wired", page.wirings.len());
    Ok(page)
}

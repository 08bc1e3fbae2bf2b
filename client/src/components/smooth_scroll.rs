//! In-page anchor links scroll smoothly and close the drawer.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::nav_drawer::DrawerHandle;
use crate::error::UiError;
use crate::state::drawer::DrawerInput;
use crate::state::scroll::{ANCHOR_SELECTOR, fragment_selector};
use crate::util::dom;
use crate::util::wiring::Wiring;

pub fn wire(doc: &Document, drawer: Option<DrawerHandle>) -> Result<Wiring, UiError> {
    let anchors = dom::query_all(doc, ANCHOR_SELECTOR);
    if anchors.is_empty() {
        return Err(UiError::Missing(ANCHOR_SELECTOR));
    }

    let mut wiring = Wiring::new("smooth-scroll");
    for anchor in anchors {
        let link = anchor.clone();
        let doc = doc.clone();
        let drawer = drawer.clone();
        wiring.on_cancelable(&anchor, "click", move |event| {
            let href = link.get_attribute("href");
            let Some(selector) = fragment_selector(href.as_deref()) else {
                return;
            };
            // Unmatched or malformed fragments keep the browser's default jump.
            let Ok(Some(target)) = doc.query_selector(selector) else {
                return;
            };
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            if let Some(drawer) = &drawer {
                drawer.dispatch(DrawerInput::AnchorNavigation);
            }
        });
    }
    Ok(wiring)
}

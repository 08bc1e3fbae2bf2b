//! In-page anchor routing.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Selector for every link the router intercepts.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// The selector to resolve for an anchor's `href`, or `None` when the click
/// should fall through to the browser (missing href or a bare `#`).
#[must_use]
pub fn fragment_selector(href: Option<&str>) -> Option<&str> {
    href.filter(|h| h.len() > 1 && h.starts_with('#'))
}

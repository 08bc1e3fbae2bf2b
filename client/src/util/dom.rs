//! Element lookup and mutation helpers.
//!
//! Lookups return `Result<_, UiError::Missing>` so bindings can `?` their
//! required elements. Mutations on elements that are already wired cannot
//! meaningfully fail on a live page; failures are logged at debug level and
//! otherwise ignored.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement, NodeList, Window};

use crate::error::UiError;
use crate::state::tilt::Bounds;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::Missing("window"))
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::Missing("document"))
}

pub fn body(doc: &Document) -> Result<HtmlElement, UiError> {
    doc.body().ok_or(UiError::Missing("body"))
}

/// Element with `id`, cast to `T`. A present element of the wrong type counts as missing.
pub fn by_id<T: JsCast>(doc: &Document, id: &'static str) -> Result<T, UiError> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(UiError::Missing(id))
}

/// Every element matching `selector` in document order. An invalid selector matches nothing.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    doc.query_selector_all(selector).map(elements).unwrap_or_default()
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `data-<name>` attribute.
pub fn data(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{name}"))
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::debug!("set_attribute({name}) failed: {err:?}");
    }
}

/// Set an inline style property; an empty `value` removes it.
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = el.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(drop)
    } else {
        style.set_property(property, value)
    };
    if let Err(err) = result {
        log::debug!("style {property} failed: {err:?}");
    }
}

/// Add or remove `class`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        log::debug!("classList {class} failed: {err:?}");
    }
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Current value of an `<input>` or `<textarea>`; empty for anything else.
pub fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

pub fn bounds(el: &Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
}

pub fn focus(el: &Element) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        if let Err(err) = el.focus() {
            log::debug!("focus failed: {err:?}");
        }
    }
}

/// The element an event was dispatched to.
pub fn target_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

//! Scroll-triggered one-shot animations: section/card reveal and skill bars.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::UiError;
use crate::state::reveal::{
    OneShot, REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEALED_CLASS, SKILL_FILL_SELECTOR, SKILL_SELECTOR, SKILL_THRESHOLD,
    fill_width, skill_percent,
};
use crate::util::dom;
use crate::util::wiring::Wiring;

/// Observe `elements` at `threshold`. `on_enter` receives the index of each
/// element that is intersecting, the element, and the observer. The observer
/// is disconnected when `wiring` stops.
pub fn observe<F>(wiring: &mut Wiring, elements: Vec<Element>, threshold: f64, mut on_enter: F) -> Result<(), UiError>
where
    F: FnMut(usize, &Element, &IntersectionObserver) + 'static,
{
    let targets = elements.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(index) = targets.iter().position(|el| *el == target) {
                    on_enter(index, &target, &observer);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for el in &elements {
        observer.observe(el);
    }
    wiring.on_stop(move || {
        observer.disconnect();
        drop(callback);
    });
    Ok(())
}

pub fn wire(doc: &Document) -> Result<Wiring, UiError> {
    let reveal = dom::query_all(doc, REVEAL_SELECTOR);
    let skills = dom::query_all(doc, SKILL_SELECTOR);
    if reveal.is_empty() && skills.is_empty() {
        return Err(UiError::Missing(REVEAL_SELECTOR));
    }

    let mut wiring = Wiring::new("observers");
    if !reveal.is_empty() {
        let mut revealed = OneShot::new(reveal.len());
        observe(&mut wiring, reveal, REVEAL_THRESHOLD, move |index, el, _| {
            if revealed.visit(index) {
                dom::set_class(el, REVEALED_CLASS, true);
            }
        })?;
    }
    if !skills.is_empty() {
        let mut filled = OneShot::new(skills.len());
        observe(&mut wiring, skills, SKILL_THRESHOLD, move |index, bar, observer| {
            if !filled.visit(index) {
                return;
            }
            let percent = skill_percent(dom::data(bar, "skill").as_deref());
            if let Some(fill) = dom::query_in(bar, SKILL_FILL_SELECTOR) {
                dom::set_style(&fill, "width", &fill_width(percent));
            }
            observer.unobserve(bar);
        })?;
    }
    Ok(wiring)
}

//! Category filter buttons over the project grid.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use super::project_modal::read_card;
use crate::error::UiError;
use crate::state::filter::{ACTIVE_CLASS, FilterBar};
use crate::util::dom;
use crate::util::wiring::Wiring;

pub fn wire(doc: &Document) -> Result<Wiring, UiError> {
    let buttons = dom::query_all(doc, ".filter-btn");
    if buttons.is_empty() {
        return Err(UiError::Missing(".filter-btn"));
    }
    let cards = dom::query_all(doc, ".project");

    let bar = FilterBar::for_cards(
        buttons.iter().map(|b| dom::data(b, "filter")).collect(),
        &cards.iter().map(read_card).collect::<Vec<_>>(),
    );
    let bar = Rc::new(RefCell::new(bar));
    let buttons = Rc::new(buttons);
    let cards = Rc::new(cards);

    let mut wiring = Wiring::new("project-filter");
    for (index, button) in buttons.iter().enumerate() {
        let bar = Rc::clone(&bar);
        let all_buttons = Rc::clone(&buttons);
        let cards = Rc::clone(&cards);
        wiring.on(button, "click", move |_| {
            let Some(outcome) = bar.borrow_mut().select(index) else {
                return;
            };
            for (button, active) in all_buttons.iter().zip(&outcome.active) {
                dom::set_class(button, ACTIVE_CLASS, *active);
            }
            for (card, visible) in cards.iter().zip(&outcome.visible) {
                dom::set_style(card, "display", if *visible { "" } else { "none" });
            }
        });
    }
    Ok(wiring)
}

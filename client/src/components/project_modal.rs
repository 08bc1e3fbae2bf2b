//! Project detail overlay.
//!
//! Opened from a card's `.open-project` button, by Enter while a card has
//! focus, or by the `1` shortcut. Closed by `.modal-close`, a click on the
//! `.modal-overlay` backdrop, or Escape.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::error::UiError;
use crate::state::detail::{CloseTrigger, DetailOverlay, OpenTrigger, ProjectCard};
use crate::util::dom;
use crate::util::wiring::Wiring;

const CARD_SELECTOR: &str = ".project";

#[derive(Clone)]
pub struct ModalHandle {
    overlay: Rc<RefCell<DetailOverlay>>,
    modal: Element,
    title: Option<Element>,
    description: Option<Element>,
    stack: Option<Element>,
    panel: Option<Element>,
}

impl ModalHandle {
    pub fn open(&self, card: &Element, trigger: OpenTrigger) {
        let fields = self.overlay.borrow_mut().open(&read_card(card), trigger);
        for (slot, text) in [(&self.title, &fields.title), (&self.description, &fields.description), (&self.stack, &fields.stack)] {
            if let Some(slot) = slot {
                slot.set_text_content(Some(text));
            }
        }
        dom::set_attr(&self.modal, "aria-hidden", self.overlay.borrow().aria_hidden());
        if let Some(panel) = &self.panel {
            dom::focus(panel);
        }
    }

    pub fn close(&self, trigger: CloseTrigger) {
        self.overlay.borrow_mut().close(trigger);
        dom::set_attr(&self.modal, "aria-hidden", self.overlay.borrow().aria_hidden());
    }
}

/// The `data-*` fields a project card carries.
pub fn read_card(card: &Element) -> ProjectCard {
    ProjectCard {
        title: dom::data(card, "title"),
        description: dom::data(card, "desc"),
        stack: dom::data(card, "stack"),
        category: dom::data(card, "category"),
    }
}

pub fn wire(doc: &Document) -> Result<(ModalHandle, Wiring), UiError> {
    let modal: Element = dom::by_id(doc, "projectModal")?;
    let handle = ModalHandle {
        overlay: Rc::new(RefCell::new(DetailOverlay::default())),
        title: dom::by_id(doc, "modalTitle").ok(),
        description: dom::by_id(doc, "modalDesc").ok(),
        stack: dom::by_id(doc, "modalStack").ok(),
        panel: dom::query_in(&modal, ".modal-panel"),
        modal,
    };

    let mut wiring = Wiring::new("project-modal");
    for button in dom::query_all(doc, ".open-project") {
        let modal = handle.clone();
        let source = button.clone();
        wiring.on(&button, "click", move |_| {
            if let Ok(Some(card)) = source.closest(CARD_SELECTOR) {
                modal.open(&card, OpenTrigger::OpenButton);
            }
        });
    }
    for card in dom::query_all(doc, CARD_SELECTOR) {
        let modal = handle.clone();
        let source = card.clone();
        wiring.on(&card, "keydown", move |event| {
            let is_enter = event.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Enter");
            if is_enter {
                modal.open(&source, OpenTrigger::EnterKey);
            }
        });
    }
    if let Some(close) = dom::query_in(&handle.modal, ".modal-close") {
        let modal = handle.clone();
        wiring.on(&close, "click", move |_| modal.close(CloseTrigger::CloseButton));
    }
    let backdrop = handle.clone();
    wiring.on(&handle.modal, "click", move |event| {
        let on_backdrop = dom::target_element(event).is_some_and(|el| dom::has_class(&el, "modal-overlay"));
        if on_backdrop {
            backdrop.close(CloseTrigger::Backdrop);
        }
    });
    Ok((handle, wiring))
}

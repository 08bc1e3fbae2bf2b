//! Mobile navigation drawer.
//!
//! `#menuToggle` and `#mainNav` are required; `#navOverlay` and `.nav-close`
//! are wired when present. Escape and anchor navigation reach the drawer
//! through [`DrawerHandle::dispatch`] from their own bindings.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use crate::error::UiError;
use crate::state::drawer::{Drawer, DrawerInput, DrawerState};
use crate::util::dom;
use crate::util::wiring::Wiring;

const OVERLAY_ACTIVE_CLASS: &str = "active";
const BODY_OPEN_CLASS: &str = "menu-open";

#[derive(Clone)]
pub struct DrawerHandle {
    drawer: Rc<RefCell<Drawer>>,
    nav: Element,
    button: Element,
    overlay: Option<Element>,
    body: HtmlElement,
}

impl DrawerHandle {
    /// Feed one input; the page is only touched when the state changes.
    pub fn dispatch(&self, input: DrawerInput) {
        let changed = self.drawer.borrow_mut().handle(input);
        if let Some(state) = changed {
            self.apply(state);
        }
    }

    fn apply(&self, state: DrawerState) {
        let open = state.is_open();
        dom::set_attr(&self.nav, "aria-hidden", state.aria_hidden());
        dom::set_attr(&self.button, "aria-expanded", state.aria_expanded());
        if let Some(overlay) = &self.overlay {
            dom::set_class(overlay, OVERLAY_ACTIVE_CLASS, open);
        }
        dom::set_class(&self.body, BODY_OPEN_CLASS, open);
        dom::set_style(&self.body, "overflow", if open { "hidden" } else { "" });
    }
}

pub fn wire(doc: &Document) -> Result<(DrawerHandle, Wiring), UiError> {
    let button: Element = dom::by_id(doc, "menuToggle")?;
    let nav: Element = dom::by_id(doc, "mainNav")?;
    let overlay = dom::by_id::<Element>(doc, "navOverlay").ok();
    let body = dom::body(doc)?;
    let handle = DrawerHandle { drawer: Rc::new(RefCell::new(Drawer::default())), nav, button, overlay, body };

    let mut wiring = Wiring::new("nav-drawer");
    let menu = handle.clone();
    wiring.on(&handle.button, "click", move |event| {
        event.stop_propagation();
        menu.dispatch(DrawerInput::MenuButton);
    });
    if let Some(overlay) = &handle.overlay {
        let drawer = handle.clone();
        wiring.on(overlay, "click", move |_| drawer.dispatch(DrawerInput::Overlay));
    }
    if let Ok(Some(close)) = doc.query_selector(".nav-close") {
        let drawer = handle.clone();
        wiring.on(&close, "click", move |_| drawer.dispatch(DrawerInput::CloseButton));
    }
    Ok((handle, wiring))
}

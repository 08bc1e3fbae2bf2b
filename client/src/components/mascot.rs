//! Hero mascot wave animation.
//!
//! Plays once shortly after load, then again on navigation back to the top
//! (`hashchange`/`popstate` to an empty hash or `#hero`), on a `.brand` click
//! after a short delay, and whenever the hero scrolls back into view.
//! Requests while a wave is running are dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use super::observers;
use crate::config::{MascotTiming, SiteConfig};
use crate::error::UiError;
use crate::state::mascot::{ACTIVE_CLASS, HERO_THRESHOLD, MASCOT_SELECTOR, MESSAGE_SELECTOR, Mascot, TriggerSource, is_top_hash};
use crate::util::dom;
use crate::util::wiring::Wiring;

fn millis(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}

#[derive(Clone)]
struct Trigger {
    mascot: Rc<RefCell<Mascot>>,
    character: Element,
    message: Option<Element>,
    stopped: Rc<Cell<bool>>,
}

impl Trigger {
    fn show(&self, active: bool) {
        dom::set_class(&self.character, ACTIVE_CLASS, active);
        if let Some(message) = &self.message {
            dom::set_attr(message, "aria-hidden", if active { "false" } else { "true" });
        }
    }

    fn fire(&self, source: TriggerSource, duration_ms: u32) {
        if !self.mascot.borrow_mut().request(source, dom::now_ms(), duration_ms) {
            return;
        }
        self.show(true);
        let this = self.clone();
        spawn_local(async move {
            sleep(millis(duration_ms)).await;
            this.mascot.borrow_mut().finish();
            this.show(false);
        });
    }

    fn fire_after(&self, delay_ms: u32, source: TriggerSource, duration_ms: u32) {
        let this = self.clone();
        spawn_local(async move {
            sleep(millis(delay_ms)).await;
            if !this.stopped.get() {
                this.fire(source, duration_ms);
            }
        });
    }
}

pub fn wire(doc: &Document, config: &SiteConfig) -> Result<Wiring, UiError> {
    let character = doc
        .query_selector(MASCOT_SELECTOR)
        .ok()
        .flatten()
        .ok_or(UiError::Missing(MASCOT_SELECTOR))?;
    let window = dom::window()?;
    let MascotTiming { duration_ms, load_duration_ms, load_delay_ms, brand_delay_ms } = config.mascot;
    let trigger = Trigger {
        mascot: Rc::new(RefCell::new(Mascot::default())),
        message: dom::query_in(&character, MESSAGE_SELECTOR),
        character,
        stopped: Rc::new(Cell::new(false)),
    };

    trigger.fire_after(load_delay_ms, TriggerSource::Load, load_duration_ms);

    let mut wiring = Wiring::new("mascot");
    for (event, source) in [("hashchange", TriggerSource::HashChange), ("popstate", TriggerSource::PopState)] {
        let (navigation, location) = (trigger.clone(), window.location());
        wiring.on(&window, event, move |_| {
            let hash = location.hash().unwrap_or_default();
            if is_top_hash(&hash) {
                navigation.fire(source, duration_ms);
            }
        });
    }
    if let Ok(Some(brand)) = doc.query_selector(".brand") {
        let clicked = trigger.clone();
        wiring.on(&brand, "click", move |_| clicked.fire_after(brand_delay_ms, TriggerSource::BrandClick, duration_ms));
    }
    if let Ok(hero) = dom::by_id::<Element>(doc, "hero") {
        let visible = trigger.clone();
        let observed = observers::observe(&mut wiring, vec![hero], HERO_THRESHOLD, move |_, _, _| {
            visible.fire(TriggerSource::HeroVisible, duration_ms);
        });
        if let Err(err) = observed {
            log::debug!("mascot: hero observer unavailable: {err}");
        }
    }

    let stopped = Rc::clone(&trigger.stopped);
    wiring.on_stop(move || stopped.set(true));
    Ok(wiring)
}

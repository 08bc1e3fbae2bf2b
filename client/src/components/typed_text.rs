//! Hero typing animation in `#typed`.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::error::UiError;
use crate::state::typing::PhraseCycle;
use crate::util::dom;
use crate::util::wiring::Wiring;

pub fn wire(doc: &Document, config: &SiteConfig) -> Result<Wiring, UiError> {
    let target: Element = dom::by_id(doc, "typed")?;
    let mut cycle = PhraseCycle::new(&config.phrases, config.typing).ok_or(UiError::Missing("typed phrases"))?;

    let stopped = Rc::new(Cell::new(false));
    let running = Rc::clone(&stopped);
    spawn_local(async move {
        while !running.get() {
            let frame = cycle.step();
            target.set_text_content(Some(&frame.text));
            sleep(Duration::from_millis(u64::from(frame.delay_ms))).await;
        }
    });

    let mut wiring = Wiring::new("typed-text");
    wiring.on_stop(move || stopped.set(true));
    Ok(wiring)
}

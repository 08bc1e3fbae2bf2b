//! "Copy email" button with a transient confirmation label.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Clipboard, Document, Element};

use crate::config::SiteConfig;
use crate::error::UiError;
use crate::state::clipboard::{CopyLabel, failure_message};
use crate::util::dom;
use crate::util::wiring::Wiring;

pub fn wire(doc: &Document, config: &SiteConfig) -> Result<Wiring, UiError> {
    let button: Element = dom::by_id(doc, "copyEmail")?;
    let label = Rc::new(RefCell::new(CopyLabel::new(&config.copy_label, &config.copied_label)));
    let address: Rc<str> = Rc::from(config.email.as_str());
    let confirm_for = Duration::from_millis(u64::from(config.copy_confirm_ms));

    let mut wiring = Wiring::new("copy-email");
    let target = button.clone();
    wiring.on(&button, "click", move |_| {
        let button = target.clone();
        let label = Rc::clone(&label);
        let address = Rc::clone(&address);
        spawn_local(async move {
            if let Err(err) = write_clipboard(&address).await {
                log::debug!("clipboard write failed: {err}");
                alert(&failure_message(&address));
                return;
            }
            let token = label.borrow_mut().confirm();
            button.set_text_content(Some(label.borrow().current()));
            sleep(confirm_for).await;
            if let Some(idle) = label.borrow_mut().revert(token) {
                button.set_text_content(Some(idle));
            }
        });
    });
    Ok(wiring)
}

async fn write_clipboard(text: &str) -> Result<(), UiError> {
    let navigator = dom::window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?
        .dyn_into::<Clipboard>()
        .map_err(|_| UiError::Missing("navigator.clipboard"))?;
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

fn alert(message: &str) {
    let shown = dom::window().and_then(|w| w.alert_with_message(message).map_err(UiError::from));
    if let Err(err) = shown {
        log::warn!("alert failed: {err}");
    }
}

//! Contact form hands off to the visitor's mail client.

use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::error::UiError;
use crate::state::contact::ContactMessage;
use crate::util::dom;
use crate::util::wiring::Wiring;

pub fn wire(doc: &Document, config: &SiteConfig) -> Result<Wiring, UiError> {
    let form: Element = dom::by_id(doc, "contactForm")?;
    let address = config.email.clone();
    let signature = config.mail_signature.clone();
    let fields = doc.clone();

    let mut wiring = Wiring::new("contact-form");
    wiring.on_cancelable(&form, "submit", move |event| {
        event.prevent_default();
        let read = |id: &str| fields.get_element_by_id(id).map(|el| dom::field_value(&el)).unwrap_or_default();
        let link = ContactMessage::new(&read("name"), &read("message")).mailto(&address, &signature);
        let navigated = dom::window().and_then(|w| w.location().set_href(&link).map_err(UiError::from));
        if let Err(err) = navigated {
            log::warn!("mail handoff failed: {err}");
        }
    });
    Ok(wiring)
}

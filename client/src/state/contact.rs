//! Contact form handoff to the visitor's mail client.
//!
//! No request leaves the page: the form becomes a `mailto:` link and the
//! browser navigates to it.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Characters escaped by `encodeURIComponent`: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one URI component.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Trimmed form contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn new(name: &str, message: &str) -> Self {
        Self { name: name.trim().to_owned(), message: message.trim().to_owned() }
    }

    #[must_use]
    pub fn subject(&self) -> String {
        format!("Contact from {}", self.name)
    }

    /// `mailto:` link addressed to `to`, with `signature` appended to the body.
    #[must_use]
    pub fn mailto(&self, to: &str, signature: &str) -> String {
        let subject = encode_component(&self.subject());
        let body = encode_component(&format!("{}{signature}", self.message));
        format!("mailto:{to}?subject={subject}&body={body}")
    }
}

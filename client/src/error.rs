//! Error type shared by the browser bindings.
//!
//! Missing markup is the common case and is not a fault: a page without a
//! video simply has no video controller. The root entry point logs each
//! variant at a different level and keeps wiring the remaining components.

/// Why a component could not be wired.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A required element is absent from the page.
    #[error("missing element: {0}")]
    Missing(&'static str),

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),

    /// The embedded site configuration is not valid JSON for [`crate::config::SiteConfig`].
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    /// The site configuration parsed but a value is outside its accepted range.
    #[error("site config value out of range: {0}")]
    OutOfRange(&'static str),
}

impl UiError {
    /// `true` for absent markup, which callers treat as "feature unavailable".
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<UiError> for wasm_bindgen::JsValue {
    fn from(err: UiError) -> Self {
        Self::from_str(&err.to_string())
    }
}

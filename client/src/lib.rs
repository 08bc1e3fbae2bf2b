//! # client
//!
//! WASM interactive layer for the single-page portfolio site.
//!
//! Every behavior on the page (theme, navigation drawer, project filter,
//! detail overlay, decorative animations, contact handoff) is split in two:
//! a pure state machine under [`state`] that decides what should happen, and
//! a browser binding under `components` (built with the `hydrate` feature)
//! that reads the markup, feeds DOM events in, and applies the results.
//!
//! The host page loads the module as an ES module, which runs after the
//! document is parsed, and calls `mount()`. The returned `Portfolio` handle
//! owns every listener and animation loop; `Portfolio::stop()` (or dropping
//! it) tears them all down.
//!
//! The host must keep that handle reachable for as long as the page should
//! stay interactive. wasm-bindgen may free an exported object once JS drops
//! its last reference, and freeing a `Portfolio` detaches everything:
//!
//! ```js
//! import init, { mount } from "./client.js";
//! await init();
//! window.portfolio = mount();
//! ```

pub mod config;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod components;

#[cfg(feature = "hydrate")]
pub use app::{Portfolio, mount, start};

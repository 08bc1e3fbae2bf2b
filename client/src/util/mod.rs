//! Browser helpers shared by the component bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate web-sys glue (storage, element lookup, listener
//! lifetime) so each binding in `components` reads as "find elements, wire
//! events, apply state".

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod theme_store;
#[cfg(feature = "hydrate")]
pub mod wiring;

//! Pure per-component state machines.
//!
//! DESIGN
//! ======
//! Nothing here touches the DOM. Each module models one page behavior as plain
//! data plus transitions so the browser bindings in `components` stay thin and
//! every rule (cadence, debounce, one-shot, filter matching) is unit-tested on
//! the host.

pub mod clipboard;
pub mod contact;
pub mod detail;
pub mod drawer;
pub mod filter;
pub mod mascot;
pub mod reveal;
pub mod scroll;
pub mod shortcuts;
pub mod theme;
pub mod tilt;
pub mod typing;
pub mod video;

//! Browser bindings, one module per page behavior.
//!
//! Each `wire` function reads the markup it needs, registers its listeners
//! on a [`crate::util::wiring::Wiring`], and returns it. Bindings other
//! components drive (theme, drawer, detail overlay, video) also return a
//! cloneable handle.

pub mod contact_form;
pub mod copy_email;
pub mod mascot;
pub mod nav_drawer;
pub mod observers;
pub mod particle_background;
pub mod project_filter;
pub mod project_modal;
pub mod shortcuts;
pub mod smooth_scroll;
pub mod theme_toggle;
pub mod tilt;
pub mod typed_text;
pub mod video_overlay;

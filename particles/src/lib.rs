//! Canvas particle background for the portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the drifting-particle backdrop: seeding a field sized to
//! the canvas, advancing it every display frame, and drawing it. The host
//! (`client`) only hands over the canvas element, forwards resize events, and
//! keeps the returned [`engine::FrameLoop`] alive for as long as the animation
//! should run.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-bound [`engine::Engine`] and the cancellable [`engine::FrameLoop`] |
//! | [`field`] | Browser-free simulation: [`field::FieldCore`] and [`field::Particle`] |
//! | [`render`] | Draws a field to a 2D context |
//! | [`consts`] | Shared numeric constants (density, velocity ranges, wrap margin) |

pub mod consts;
pub mod engine;
pub mod field;
pub mod render;

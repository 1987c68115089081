#![forbid(unsafe_code)]

//! Interaction layer for a single-page portfolio site.
//!
//! The page ships as static markup and styles; this crate attaches the
//! behavior on top: navigation scrolling and highlighting, the mobile menu,
//! scroll-driven header/progress/parallax effects, visibility-triggered
//! counters and skill bars, the simulated contact form, the hero typing
//! effect, the theme toggle, and transient notifications.
//!
//! Interaction logic (section selection, counter and typing state machines,
//! theme persistence rules, notification severities) is pure Rust and unit
//! tested on any target; everything that touches the DOM is gated behind
//! `wasm32` and wired up once at startup by [`frontend`].

pub mod counter;
pub mod error;
pub mod notify;
pub mod scrolling;
pub mod theme;
pub mod timer;
pub mod typing;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(target_arch = "wasm32")]
mod observe;

#[cfg(target_arch = "wasm32")]
pub use frontend::Portfolio;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    frontend::run();
}

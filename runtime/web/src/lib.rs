//! hud-console web runtime: a floating DOM overlay for status text.
//!
//! Compiled programs call the `extern "C"` entry points in [`bridge`];
//! JavaScript hosts use the [`ConsoleOverlay`] class from [`api`]; Rust code
//! linked into the same module can drive a [`DomOverlay`] directly.

use wasm_bindgen::prelude::*;

pub mod api;
pub mod bridge;
pub mod logger;
pub mod overlay;

pub use api::ConsoleOverlay;
pub use overlay::{DomOverlay, OVERLAY_ATTRIBUTE};

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

//! Word Quartets: a Connections-style word-grouping puzzle for the browser.
//!
//! The crate splits into two halves. [`engine`] owns the puzzle rules:
//! groups, selection, guess verdicts, and the URL-safe puzzle transcoding.
//! [`ui`] is the WASM front-end that projects that state into the DOM and
//! sequences the card animations. The engine never touches browser APIs,
//! so all of its behavior is covered by native tests.

use wasm_bindgen::prelude::*;

pub mod engine;
pub mod ui;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Entry point called by the host page once the module is instantiated.
/// Reads the puzzle from the `game` query parameter when present.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    ui::boot()
}

//! Client-side enhancements for a static portfolio page.
//!
//! The page itself is plain HTML and CSS. This crate, loaded as WebAssembly,
//! wires browser events to class-list changes:
//! - the navbar gains `scrolled` once the page moves past a fixed offset,
//! - the nav link for the section in view is marked `active`,
//! - elements flagged for animation become `visible` as they enter the viewport,
//! - in-page anchors scroll smoothly to their target below the navbar,
//! - the mobile menu opens, closes, and keeps `aria-expanded` in sync,
//! - a reduced-motion preference reveals everything up front.
//!
//! Decisions live in host-independent code (`app`, `dom`, `timing`, `config`)
//! so they can be tested natively; only the `wasm32` build touches `web_sys`.

pub mod app;
pub mod config;
pub mod dom;
pub mod timing;

#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point, run by the `wasm-bindgen` glue once the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let reload_handle = logging::init_tracing();
    if let Err(err) = app::web::boot(reload_handle) {
        tracing::error!("{err:?}");
    }
}

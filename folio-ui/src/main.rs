//! Folio Browser Client
//!
//! Populates the host page (`index.html`) from `portfolio_data.json`.
//!
//! # Architecture
//!
//! This compiles to WebAssembly and plugs browser implementations into the
//! `folio` pipeline:
//!
//! - [`fetch::GlooSource`]: the document request (gloo-net)
//! - [`dom::BrowserPage`]: the page contract over the live DOM (web-sys)
//! - [`viewport::BrowserViewport`]: visibility via `IntersectionObserver`

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod app;
mod dom;
mod fetch;
mod viewport;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        web_sys::console::error_1(&"No document to render into".into());
        return;
    };

    // Start once the DOM is ready
    if document.ready_state() == "loading" {
        let on_ready = Closure::once(|| {
            wasm_bindgen_futures::spawn_local(app::start());
        });

        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            web_sys::console::error_1(&format!("Failed to wait for DOM: {:?}", e).into());
        }
        on_ready.forget();
    } else {
        wasm_bindgen_futures::spawn_local(app::start());
    }
}

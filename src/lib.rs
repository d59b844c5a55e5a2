#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod catalog;
pub mod contact;
pub mod frame;
pub mod presentation;
pub mod section;
pub mod theme;
pub mod viewport;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // fails only if a logger is already installed, e.g. after hot reload
    console_log::init_with_level(log::Level::Info).ok();
    leptos::mount::hydrate_body(App);
}

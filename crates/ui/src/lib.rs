//! Budget UI: a Leptos component library whose containers (tabs, toolbars,
//! accordions) learn about their children through a parent-owned registry,
//! plus a stories page that exercises every component.

pub mod app;
pub mod shared;
pub mod showcase;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

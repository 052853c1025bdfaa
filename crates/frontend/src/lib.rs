pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title("Бюро Кредитных Решений — кредиты для физических лиц");
    }

    leptos::mount::mount_to_body(app::App);
}

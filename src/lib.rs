pub mod app;
pub mod contact;
pub mod content;

#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // a second init only happens if the host mounts twice; the first logger stays
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(App);
}

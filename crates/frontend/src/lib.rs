pub mod app;
pub mod app_shell;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("CCA admin starting, API at {}", shared::api_utils::api_base());
    leptos::mount::mount_to_body(app::App);
}

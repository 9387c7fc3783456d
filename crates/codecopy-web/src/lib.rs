pub mod app;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod copy_buttons;
pub mod pages;

/// Client-side entry point. cargo-leptos builds the cdylib with the
/// `hydrate` feature and the generated JS shim calls this on page load.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

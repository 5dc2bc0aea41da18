//! Leptos frontend for the storefront page.

pub mod app;
pub mod catalog;
pub mod newsletter;

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::client::StorefrontClient;
use app::App;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    stylehub_observability::init();

    let client = StorefrontClient::from_env();
    tracing::info!(api_url = client.config().api_url(), "starting storefront");

    mount_to_body(move || view! { <App client=client/> });
}

//! SolaceVR Marketing Site
//!
//! A client-side rendered Leptos single-page site. All interactive state
//! lives in `solace-core`; this crate binds it to the DOM.

mod app;
mod browser;
mod components;
mod hooks;
mod pages;
mod sections;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    mount_to_body(|| {
        view! {
            <app::App/>
        }
    });
}

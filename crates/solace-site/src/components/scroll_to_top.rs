//! Floating scroll-to-top button

use crate::browser::scroll_to_top;
use crate::hooks::use_scroll_watcher;
use leptos::*;
use solace_core::SiteConfig;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let visible = use_scroll_watcher(config.scroll_top_threshold);

    view! {
        <Show when=move || visible.get()>
            <button
                class="fixed bottom-8 right-8 z-40 w-12 h-12 rounded-full bg-primary text-white shadow-lg flex items-center justify-center"
                aria-label="Scroll to top"
                on:click=move |_| scroll_to_top()
            >
                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 15l7-7 7 7"/>
                </svg>
            </button>
        </Show>
    }
}

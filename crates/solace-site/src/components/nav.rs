//! Site navigation bar

use crate::hooks::use_scroll_watcher;
use leptos::*;
use solace_core::SiteConfig;

static NAV_ITEMS: [(&str, &str); 5] = [
    ("Products", "#products"),
    ("Case Studies", "#case-studies"),
    ("Research", "#research"),
    ("Press", "#press"),
    ("Contact", "#contact"),
];

#[component]
pub fn SiteNav() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let compact = use_scroll_watcher(config.navbar_compact_threshold);
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class=move || {
            if compact.get() {
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 py-3 bg-white shadow-md"
            } else {
                "fixed top-0 left-0 w-full z-50 transition-all duration-300 py-5 bg-transparent"
            }
        }>
            <div class="container mx-auto flex justify-between items-center">
                <a href="#" class="z-50 flex items-center">
                    <span class=move || if compact.get() { "text-xl font-display font-bold" } else { "text-2xl font-display font-bold" }>
                        "Solace"<span class="text-primary">"VR"</span>
                    </span>
                </a>

                // Desktop Nav
                <div class="hidden md:flex space-x-8 items-center">
                    {NAV_ITEMS.iter().map(|(name, href)| view! {
                        <a href=*href class="text-dark hover:text-primary font-medium transition-colors duration-200">
                            {*name}
                        </a>
                    }).collect::<Vec<_>>()}
                    <a href="#demo" class="btn-primary">"Book a Demo"</a>
                </div>

                // Mobile menu button
                <button
                    class="md:hidden z-50 w-10 h-10 relative focus:outline-none"
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    <Show
                        when=move || mobile_open.get()
                        fallback=|| view! {
                            <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        }
                    >
                        <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                        </svg>
                    </Show>
                </button>
            </div>

            // Mobile menu; picking an entry closes it
            <Show when=move || mobile_open.get()>
                <div class="fixed inset-0 z-40 bg-white md:hidden">
                    <div class="flex flex-col items-center justify-center h-full space-y-8">
                        {NAV_ITEMS.iter().map(|(name, href)| view! {
                            <a
                                href=*href
                                class="text-2xl font-display font-bold text-dark hover:text-primary"
                                on:click=move |_| set_mobile_open.set(false)
                            >
                                {*name}
                            </a>
                        }).collect::<Vec<_>>()}
                        <a href="#demo" class="btn-primary mt-4" on:click=move |_| set_mobile_open.set(false)>
                            "Book a Demo"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

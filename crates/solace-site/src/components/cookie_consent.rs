//! Cookie consent banner

use crate::browser::BrowserScheduler;
use crate::hooks::use_observable;
use leptos::*;
use solace_core::{CookieBanner, CoreResult, SharedStore, SiteConfig};
use tracing::warn;

fn report(result: CoreResult<()>) {
    if let Err(err) = result {
        warn!(error = %err, "could not record cookie consent");
    }
}

#[component]
pub fn CookieConsent() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let store = expect_context::<SharedStore>();

    let banner = match CookieBanner::mount(store, &config, &BrowserScheduler) {
        Ok(banner) => banner,
        Err(err) => {
            warn!(error = %err, "cookie banner disabled");
            return ().into_view();
        }
    };
    let visible = use_observable(banner.visible());
    let banner = store_value(banner);

    view! {
        <Show when=move || visible.get()>
            <div class="fixed bottom-0 left-0 w-full z-50 bg-white shadow-lg border-t border-gray-200">
                <div class="container py-4 flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-sm text-gray-600">
                        "We use cookies to enhance your browsing experience, serve personalized content, and analyze our traffic. "
                        "By clicking \"Accept All\", you consent to our use of cookies. "
                        <button
                            class="text-primary underline"
                            on:click=move |_| banner.with_value(|b| b.open_settings())
                        >
                            "Cookie Policy"
                        </button>
                    </p>
                    <div class="flex space-x-3">
                        <button
                            class="px-4 py-2 border border-gray-300 rounded-lg text-sm"
                            on:click=move |_| banner.with_value(|b| report(b.accept_essential()))
                        >
                            "Essential Only"
                        </button>
                        <button
                            class="btn-primary text-sm"
                            on:click=move |_| banner.with_value(|b| report(b.accept_all()))
                        >
                            "Accept All"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
    .into_view()
}

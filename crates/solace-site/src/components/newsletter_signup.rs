//! Newsletter signup popup

use crate::browser::BrowserScheduler;
use crate::hooks::use_observable;
use leptos::*;
use solace_core::{NewsletterPopup, SharedStore, SiteConfig};
use tracing::{debug, warn};

#[component]
pub fn NewsletterSignup() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let store = expect_context::<SharedStore>();

    let popup = match NewsletterPopup::mount(store, &config, &BrowserScheduler) {
        Ok(popup) => popup,
        Err(err) => {
            warn!(error = %err, "newsletter popup disabled");
            return ().into_view();
        }
    };
    let visible = use_observable(popup.visible());
    let submitted = use_observable(popup.submitted());
    let error = use_observable(popup.error());
    let popup = store_value(popup);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        popup.with_value(|p| {
            if let Err(err) = p.submit(&BrowserScheduler) {
                debug!(%err, "newsletter signup rejected");
            }
        });
    };

    view! {
        <Show when=move || visible.get()>
            // Backdrop closes the popup
            <div
                class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-4"
                on:click=move |_| popup.with_value(|p| p.close())
            >
                <div
                    class="bg-white rounded-2xl shadow-xl max-w-md w-full p-8 relative"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        class="absolute top-4 right-4 text-gray-400 hover:text-gray-600"
                        aria-label="Close"
                        on:click=move |_| popup.with_value(|p| p.close())
                    >
                        "✕"
                    </button>
                    <Show
                        when=move || !submitted.get()
                        fallback=|| view! {
                            <div class="text-center py-6">
                                <div class="text-5xl mb-4">"✓"</div>
                                <h3 class="text-2xl font-bold mb-2">"Thank You!"</h3>
                                <p class="text-gray-600">"You've been successfully subscribed to our newsletter."</p>
                            </div>
                        }
                    >
                        <h3 class="text-2xl font-bold mb-2">"Stay Connected"</h3>
                        <p class="text-gray-600 mb-6">
                            "Get the latest updates on SolaceVR and the future of #GodTech and #FaithTech."
                        </p>
                        <form on:submit=on_submit class="space-y-4">
                            <input
                                type="email"
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary"
                                placeholder="Your email address"
                                on:input=move |ev| popup.with_value(|p| p.set_email(&event_target_value(&ev)))
                            />
                            <Show when=move || error.get().is_some()>
                                <p class="text-red-500 text-sm">{move || error.get().unwrap_or_default()}</p>
                            </Show>
                            <button type="submit" class="btn-primary w-full">"Subscribe Now"</button>
                            <p class="text-xs text-gray-500 text-center">
                                "We respect your privacy. Unsubscribe at any time."
                            </p>
                        </form>
                    </Show>
                </div>
            </div>
        </Show>
    }
    .into_view()
}

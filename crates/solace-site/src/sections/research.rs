//! Research hub with the preview download form

use crate::components::{advance_form, StepFields};
use crate::hooks::use_observable;
use leptos::*;
use solace_core::{FormSpec, FormStep, MultiStepForm};
use tracing::warn;

#[component]
pub fn ResearchSection() -> impl IntoView {
    let form = match MultiStepForm::new(FormSpec::research_download()) {
        Ok(form) => form,
        Err(err) => {
            warn!(error = %err, "research download form unavailable");
            return ().into_view();
        }
    };
    let step = use_observable(form.step_observable());
    let errors = use_observable(form.errors());
    let form = store_value(form);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        advance_form(form);
    };

    view! {
        <section class="section bg-white" id="research">
            <div class="container">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <p class="text-primary font-medium tracking-widest uppercase mb-2">"Research Hub"</p>
                        <h2 class="text-4xl font-bold mb-6">"The Future of Spirituality in the Age of AI"</h2>
                        <p class="text-gray-600 mb-6">
                            "Our flagship research report examines how artificial intelligence and virtual reality are reshaping religious practice and spiritual connection in the digital age."
                        </p>
                    </div>

                    <div class="bg-gray-50 rounded-3xl p-8">
                        {move || match step.get() {
                            FormStep::Submitted => view! {
                                <div class="text-center py-8">
                                    <div class="text-5xl mb-4">"✓"</div>
                                    <h3 class="text-2xl font-bold mb-2">"Thank You!"</h3>
                                    <p class="text-gray-600">
                                        "Your download link has been sent to your email. Check your inbox for immediate access to our research preview."
                                    </p>
                                </div>
                            }
                            .into_view(),
                            FormStep::Entry(index) => view! {
                                <form on:submit=on_submit class="space-y-5">
                                    <h3 class="text-2xl font-bold">"Download Research Preview"</h3>
                                    <StepFields form=form index=index errors=errors/>
                                    <button type="submit" class="btn-primary w-full">"Get Instant Access"</button>
                                </form>
                            }
                            .into_view(),
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
    .into_view()
}

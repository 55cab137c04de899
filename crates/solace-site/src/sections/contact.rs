//! Demo request form

use crate::components::{advance_form, rewind_form, StepFields};
use crate::hooks::use_observable;
use leptos::*;
use solace_core::{FormSpec, FormStep, MultiStepForm, StepStatus};
use tracing::warn;

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = match MultiStepForm::new(FormSpec::demo_request()) {
        Ok(form) => form,
        Err(err) => {
            warn!(error = %err, "demo request form unavailable");
            return ().into_view();
        }
    };
    let step = use_observable(form.step_observable());
    let errors = use_observable(form.errors());
    let step_count = form.step_count();
    let titles: Vec<String> = form.spec().steps.iter().map(|s| s.title.clone()).collect();
    let form = store_value(form);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        advance_form(form);
    };

    let indicator = titles
        .into_iter()
        .enumerate()
        .map(|(index, title)| {
            let status = move || step.get().status_of(index);
            view! {
                <div class="flex items-center space-x-2">
                    <div class=move || match status() {
                        StepStatus::Complete => "w-8 h-8 rounded-full bg-green-500 text-white flex items-center justify-center",
                        StepStatus::Current => "w-8 h-8 rounded-full bg-primary text-white flex items-center justify-center",
                        StepStatus::Upcoming => "w-8 h-8 rounded-full bg-gray-200 text-gray-500 flex items-center justify-center",
                    }>
                        {move || match status() {
                            StepStatus::Complete => "✓".to_string(),
                            _ => (index + 1).to_string(),
                        }}
                    </div>
                    <span class="hidden md:inline text-sm text-gray-600">{title}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="section bg-white" id="contact">
            <div class="container" id="demo">
                <div class="text-center max-w-4xl mx-auto mb-16">
                    <p class="text-primary font-medium tracking-widest uppercase mb-2">"Get Started"</p>
                    <h2 class="text-4xl font-bold mb-6">"Book Your Personalized Demo"</h2>
                    <p class="text-gray-600">
                        "Schedule a personalized demo to see how SolaceVR can help your organization create meaningful digital connections and enhance your spiritual ministry."
                    </p>
                </div>

                <div class="max-w-3xl mx-auto bg-white rounded-3xl shadow-xl p-8">
                    <div class="flex justify-between mb-8">{indicator}</div>

                    {move || match step.get() {
                        FormStep::Submitted => view! {
                            <div class="text-center py-12">
                                <div class="text-5xl mb-4">"✓"</div>
                                <h3 class="text-2xl font-bold text-gray-900 mb-2">"Thank You!"</h3>
                                <p class="text-gray-600">
                                    "Your demo request has been submitted successfully. A member of our team will be in touch within 24 hours to schedule your personalized demo."
                                </p>
                            </div>
                        }
                        .into_view(),
                        FormStep::Entry(index) => {
                            let is_last = index + 1 == step_count;
                            view! {
                                <form on:submit=on_submit class="space-y-6">
                                    <p class="text-sm text-gray-500">{format!("Step {} of {}", index + 1, step_count)}</p>
                                    <StepFields form=form index=index errors=errors/>
                                    <div class="flex justify-between pt-4">
                                        <Show when=move || (index > 0) fallback=|| view! { <span></span> }>
                                            <button
                                                type="button"
                                                class="px-6 py-3 border border-gray-300 rounded-lg"
                                                on:click=move |_| rewind_form(form)
                                            >
                                                "Back"
                                            </button>
                                        </Show>
                                        <button type="submit" class="btn-primary">
                                            {if is_last { "Submit Request" } else { "Continue" }}
                                        </button>
                                    </div>
                                </form>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </div>
        </section>
    }
    .into_view()
}

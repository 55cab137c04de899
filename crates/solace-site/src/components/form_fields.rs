//! Rendering of declarative form steps

use leptos::*;
use solace_core::{FieldError, FieldKind, FieldSpec, FieldValue, LogSink, MultiStepForm};
use tracing::{debug, warn};

const INPUT_CLASS: &str =
    "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary focus:border-primary";

/// Store input for a field of the form's current step.
///
/// Runs inside a batch so views reading the form only update after the
/// mutable borrow is released.
pub fn record_input(form: StoredValue<MultiStepForm>, name: &str, value: FieldValue) {
    batch(|| {
        form.update_value(|f| {
            if let Err(err) = f.set_field(name, value) {
                warn!(field = name, error = %err, "input ignored");
            }
        })
    });
}

/// Validate the current step and move on; the last step submits.
pub fn advance_form(form: StoredValue<MultiStepForm>) {
    batch(|| {
        form.update_value(|f| {
            if let Err(errors) = f.continue_step(&LogSink) {
                debug!(form = %f.spec().id, %errors, "step not complete");
            }
        })
    });
}

pub fn rewind_form(form: StoredValue<MultiStepForm>) {
    batch(|| {
        form.update_value(|f| {
            f.back();
        })
    });
}

/// All controls of one step, prefilled from the form's drafts.
#[component]
pub fn StepFields(
    form: StoredValue<MultiStepForm>,
    index: usize,
    errors: ReadSignal<Vec<FieldError>>,
) -> impl IntoView {
    let fields = form.with_value(|f| {
        f.spec()
            .steps
            .get(index)
            .map(|step| step.fields.clone())
            .unwrap_or_default()
    });

    fields
        .into_iter()
        .map(|field| view! { <FormField form=form field=field errors=errors/> })
        .collect::<Vec<_>>()
}

#[component]
fn FormField(
    form: StoredValue<MultiStepForm>,
    field: FieldSpec,
    errors: ReadSignal<Vec<FieldError>>,
) -> impl IntoView {
    let initial = form.with_value(|f| f.value(&field.name).cloned());
    let placeholder = field.placeholder.clone().unwrap_or_default();
    let error_name = field.name.clone();
    let error = move || {
        errors
            .get()
            .into_iter()
            .find(|e| e.field == error_name)
            .map(|e| e.message)
    };

    let control = match field.kind.clone() {
        FieldKind::Checkbox => {
            let name = field.name.clone();
            let checked = initial.and_then(|v| v.as_flag()).unwrap_or(false);
            return view! {
                <label class="flex items-center space-x-3">
                    <input
                        type="checkbox"
                        class="h-5 w-5 rounded text-primary"
                        prop:checked=checked
                        on:change=move |ev| record_input(form, &name, event_target_checked(&ev).into())
                    />
                    <span class="text-gray-700">{field.label.clone()}</span>
                </label>
            }
            .into_view();
        }
        FieldKind::Select(options) => {
            let name = field.name.clone();
            let current = initial
                .as_ref()
                .and_then(|v| v.as_text())
                .unwrap_or_default()
                .to_string();
            view! {
                <select class=INPUT_CLASS on:change=move |ev| record_input(form, &name, event_target_value(&ev).into())>
                    <option value="">{placeholder}</option>
                    {options.into_iter().map(|option| {
                        let selected = option.value == current;
                        view! { <option value=option.value selected=selected>{option.label}</option> }
                    }).collect::<Vec<_>>()}
                </select>
            }
            .into_view()
        }
        FieldKind::TextArea => {
            let name = field.name.clone();
            let text = initial
                .as_ref()
                .and_then(|v| v.as_text())
                .unwrap_or_default()
                .to_string();
            view! {
                <textarea
                    rows="4"
                    class=INPUT_CLASS
                    placeholder=placeholder
                    prop:value=text
                    on:input=move |ev| record_input(form, &name, event_target_value(&ev).into())
                ></textarea>
            }
            .into_view()
        }
        kind => {
            let name = field.name.clone();
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Phone => "tel",
                _ => "text",
            };
            let text = initial
                .as_ref()
                .and_then(|v| v.as_text())
                .unwrap_or_default()
                .to_string();
            view! {
                <input
                    type=input_type
                    class=INPUT_CLASS
                    placeholder=placeholder
                    prop:value=text
                    on:input=move |ev| record_input(form, &name, event_target_value(&ev).into())
                />
            }
            .into_view()
        }
    };

    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            {control}
            {move || error().map(|message| view! { <p class="text-red-500 text-sm mt-1">{message}</p> })}
        </div>
    }
    .into_view()
}

//! Labelled form inputs with inline validation messages.
//!
//! Each field reads its message from a shared `FieldErrors` signal by name,
//! so a page validates once on submit and every input updates together.

use leptos::prelude::*;

use crate::util::validation::FieldErrors;

/// Inline message for `field`, rendered only when the field failed.
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .get()
            .get(field)
            .map(|message| view! { <p class="field__error">{message.to_owned()}</p> })
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    field: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    let invalid = move || errors.get().contains(field);
    view! {
        <div class="field">
            <label class="field__label" for=field>{label}</label>
            <input
                id=field
                name=field
                class="input"
                class:input--invalid=invalid
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError errors=errors field=field />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    field: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label" for=field>{label}</label>
            <textarea
                id=field
                name=field
                class="input input--textarea"
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            <FieldError errors=errors field=field />
        </div>
    }
}

/// Select with a disabled placeholder option. `options` are `(value, label)`.
#[component]
pub fn SelectField(
    label: &'static str,
    field: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(default = "Select an option")] placeholder: &'static str,
) -> impl IntoView {
    let invalid = move || errors.get().contains(field);
    view! {
        <div class="field">
            <label class="field__label" for=field>{label}</label>
            <select
                id=field
                name=field
                class="input"
                class:input--invalid=invalid
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        view! {
                            <option value=option_value selected=move || value.get() == option_value>
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldError errors=errors field=field />
        </div>
    }
}

/// `(value, label)` pairs for a list whose values double as labels.
pub fn same_value_options(values: &[&'static str]) -> Vec<(&'static str, &'static str)> {
    values.iter().map(|v| (*v, *v)).collect()
}

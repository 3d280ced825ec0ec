//! Form field components shared by every wizard.
//!
//! Fields bind directly to an [`RwSignal<String>`] and render their
//! validation error inline. Errors are looked up from the page-level
//! error map via [`field_error`].

use leptos::*;
use std::collections::HashMap;

/// Derive the inline error signal for one field key.
pub fn field_error(
    errors: RwSignal<HashMap<&'static str, String>>,
    key: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|map| map.get(key).cloned()))
}

#[component]
pub fn TextField(
    /// Label rendered above the input
    label: &'static str,
    /// Bound value
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<&'static str>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let has_error = move || error.map(|e| e.get().is_some()).unwrap_or(false);

    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <input
                class="field-input"
                class:invalid=has_error
                type=input_type.unwrap_or("text")
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || {
                error
                    .and_then(|e| e.get())
                    .map(|msg| view! { <div class="field-error">{msg}</div> })
            }}
        </div>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    /// (value, label) pairs
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <select
                class="field-input"
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == option_value
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || {
                error
                    .and_then(|e| e.get())
                    .map(|msg| view! { <div class="field-error">{msg}</div> })
            }}
        </div>
    }
}

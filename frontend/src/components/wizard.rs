//! Wizard chrome: step indicator and navigation.

use leptos::*;
use std::collections::HashMap;

/// Numbered step rail shown above every wizard.
#[component]
pub fn StepIndicator(
    step: RwSignal<usize>,
    /// One label per step, in order
    labels: &'static [&'static str],
) -> impl IntoView {
    view! {
        <ol class="step-indicator">
            {labels
                .iter()
                .enumerate()
                .map(|(idx, label)| {
                    let number = idx + 1;
                    view! {
                        <li
                            class="step"
                            class:active=move || step.get() == number
                            class:done=move || (step.get() > number)
                        >
                            <span class="step-number">{number}</span>
                            <span class="step-label">{*label}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

/// Back/Continue row for the form steps.
///
/// Continue delegates to the page's validation callback; Back clears
/// visible errors and never loses entered state.
#[component]
pub fn WizardNav(
    step: RwSignal<usize>,
    errors: RwSignal<HashMap<&'static str, String>>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    let on_back = move |_| {
        errors.update(|e| e.clear());
        step.update(|s| {
            if *s > 1 {
                *s -= 1;
            }
        });
    };

    view! {
        <div class="wizard-nav">
            <Show when=move || (step.get() > 1) fallback=|| view! { }>
                <button class="btn btn-secondary" on:click=on_back>"Back"</button>
            </Show>
            <button class="btn btn-primary" on:click=move |_| on_next.call(())>
                "Continue"
            </button>
        </div>
    }
}

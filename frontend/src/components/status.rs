//! Submission status UI: error banner, fee table and success state.

use leptos::*;
use leptos_router::A;

use crate::pricing::{format_inr, FeeBreakdown};
use crate::types::SubmissionResponse;

/// Inline banner for submission failures.
///
/// Hidden while the message is `None`; the submit button re-enables
/// alongside, nothing retries automatically.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| view! { }>
            <div class="error-banner">
                "⚠️ " {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Itemized fee table shown on the review step.
#[component]
pub fn FeeTable(#[prop(into)] fees: Signal<FeeBreakdown>) -> impl IntoView {
    view! {
        <table class="fee-table">
            <tbody>
                <tr>
                    <td>"Professional fee"</td>
                    <td class="amount">{move || format_inr(fees.get().professional_fee)}</td>
                </tr>
                <tr>
                    <td>"Government fee"</td>
                    <td class="amount">{move || format_inr(fees.get().government_fee)}</td>
                </tr>
                <tr class="fee-total">
                    <td>"Total payable"</td>
                    <td class="amount">{move || format_inr(fees.get().total)}</td>
                </tr>
            </tbody>
        </table>
    }
}

/// Confirmation state rendered after a successful submission.
#[component]
pub fn SuccessCard(
    service_name: &'static str,
    reference: String,
    response: SubmissionResponse,
) -> impl IntoView {
    view! {
        <div class="success-card">
            <div class="success-icon">"✅"</div>
            <h2>"Application submitted"</h2>
            <p>
                "Your " {service_name} " application has been received. "
                "Our team will reach out within one working day."
            </p>
            <div class="success-meta">
                <div>"Application ID: " <strong>{response.application_id.clone()}</strong></div>
                <div>"Your reference: " <strong>{reference}</strong></div>
            </div>
            {response
                .message
                .clone()
                .map(|msg| view! { <p class="success-message">{msg}</p> })}
            <A href="/" class="btn btn-secondary">"Back to all services"</A>
        </div>
    }
}

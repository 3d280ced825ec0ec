//! Card components for the marketing pages.

use leptos::*;
use leptos_router::A;

use crate::pricing::format_inr;

#[component]
pub fn ServiceCard(
    icon: &'static str,
    name: &'static str,
    blurb: &'static str,
    /// Lowest total fee for this service
    price_from: u32,
    href: &'static str,
) -> impl IntoView {
    view! {
        <A href=href class="service-card">
            <div class="service-icon">{icon}</div>
            <h3 class="service-name">{name}</h3>
            <p class="service-blurb">{blurb}</p>
            <div class="service-price">
                "Starting at " <strong>{format_inr(price_from)}</strong>
            </div>
        </A>
    }
}

#[component]
pub fn StepCard(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="step-card">
            <div class="step-card-number">{number}</div>
            <h3 class="step-card-title">{title}</h3>
            <p class="step-card-text">{description}</p>
        </div>
    }
}

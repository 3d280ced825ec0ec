//! Footer component

use leptos::*;

use crate::config::SUPPORT_EMAIL;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2025 FilingDesk • Filings handled by licensed professionals"</div>
            <div class="footer-links">
                <a href="/#services" class="footer-link">"All services"</a>
                <a href=format!("mailto:{}", SUPPORT_EMAIL) class="footer-link">
                    "Support"
                </a>
                <a href="https://twitter.com/filingdesk" class="footer-link" target="_blank">
                    "Twitter"
                </a>
            </div>
        </footer>
    }
}

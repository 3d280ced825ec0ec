use leptos::*;
use leptos_router::A;

use crate::config::SUPPORT_EMAIL;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">"FILINGDESK"</A>
                <span class="badge">"Compliance made simple"</span>
            </div>
            <nav class="header-right">
                <a href="/#services" class="nav-link">"Services"</a>
                <a href="/#how-it-works" class="nav-link">"How it works"</a>
                <a href="/#faq" class="nav-link">"FAQ"</a>
                <a href=format!("mailto:{}", SUPPORT_EMAIL) class="nav-link nav-cta">
                    "Talk to an expert"
                </a>
            </nav>
        </header>
    }
}

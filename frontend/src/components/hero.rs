//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Register. File. Comply."</h1>
            <p class="subtitle">
                "Company registration, trademarks, patents, licenses and labour filings — "
                "handled end to end by professionals. Upload your documents, pay online, "
                "and track your application to completion."
            </p>
            <a href="#services" class="btn btn-primary hero-cta">"Browse services"</a>
        </div>
    }
}

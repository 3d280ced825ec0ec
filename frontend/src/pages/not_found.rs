use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found — FilingDesk"/>
        <div class="container not-found">
            <h1>"404"</h1>
            <p>"That page does not exist. The services below might be what you were after."</p>
            <A href="/" class="btn btn-primary">"Browse all services"</A>
        </div>
    }
}

//! Expandable FAQ section, one item open at a time.

use leptos::*;

#[component]
pub fn FaqSection(
    /// (question, answer) pairs
    items: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let (open_index, set_open_index) = create_signal(None::<usize>);

    view! {
        <section class="faq-section" id="faq">
            <h2>"Frequently asked questions"</h2>
            {items
                .iter()
                .enumerate()
                .map(|(idx, (question, answer))| {
                    let is_open = move || open_index.get() == Some(idx);

                    let toggle = move |_| {
                        if open_index.get() == Some(idx) {
                            set_open_index.set(None);
                        } else {
                            set_open_index.set(Some(idx));
                        }
                    };

                    view! {
                        <div class="faq-item" class:open=is_open>
                            <div class="faq-question" on:click=toggle style="cursor: pointer;">
                                {move || if is_open() { "▼ " } else { "▶ " }}
                                {*question}
                            </div>
                            <Show when=is_open fallback=|| view! { }>
                                <div class="faq-answer">{*answer}</div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

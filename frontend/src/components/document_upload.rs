//! Document upload slot.
//!
//! One slot per required document category. Selecting a file uploads it
//! immediately to the backend and stores the returned remote reference
//! in the page's slot signal. Failures alert the user and leave the
//! slot empty so they can retry.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::services::api::upload_file;
use crate::types::UploadedFile;

#[component]
pub fn DocumentUploadSlot(
    /// Human-readable document name
    label: &'static str,
    /// Category key sent alongside the file (e.g. "pan-card")
    category: &'static str,
    /// Slot holding the uploaded reference
    file: RwSignal<Option<UploadedFile>>,
    #[prop(optional, into)] hint: Option<&'static str>,
    /// Required-document error from step validation
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let (uploading, set_uploading) = create_signal(false);
    let (upload_error, set_upload_error) = create_signal(None::<String>);

    let input_id = format!("doc-{}", category);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(selected) = files.get(0) {
                set_upload_error.set(None);

                spawn_local(async move {
                    set_uploading.set(true);
                    log::info!("Uploading {} as {}", selected.name(), category);

                    match upload_file(selected, category).await {
                        Ok(remote) => {
                            log::info!("Uploaded {} -> {}", remote.file_name, remote.id);
                            file.set(Some(remote));
                        }
                        Err(e) => {
                            log::error!("Upload failed for {}: {}", category, e);
                            if let Some(window) = web_sys::window() {
                                let _ = window
                                    .alert_with_message(&format!("Upload failed: {}", e));
                            }
                            set_upload_error.set(Some(e));
                        }
                    }

                    set_uploading.set(false);
                });
            }
        }
    };

    view! {
        <div class="doc-slot" class:uploaded=move || file.get().is_some()>
            <div class="doc-slot-info">
                <div class="doc-slot-label">{label}</div>
                {hint.map(|h| view! { <div class="doc-slot-hint">{h}</div> })}
                {move || {
                    file.get()
                        .map(|f| view! { <div class="doc-slot-file">"📎 " {f.file_name}</div> })
                }}
                {move || {
                    upload_error
                        .get()
                        .map(|msg| view! { <div class="field-error">{msg}</div> })
                }}
                {move || {
                    error
                        .and_then(|e| e.get())
                        .map(|msg| view! { <div class="field-error">{msg}</div> })
                }}
            </div>
            <div class="doc-slot-action">
                <label for=input_id.clone() class="btn btn-secondary">
                    {move || {
                        if uploading.get() {
                            "Uploading…"
                        } else if file.get().is_some() {
                            "Replace"
                        } else {
                            "Upload"
                        }
                    }}
                </label>
                <input
                    type="file"
                    id=input_id
                    accept=".pdf,.jpg,.jpeg,.png"
                    style="display:none"
                    on:change=on_file_change
                />
            </div>
        </div>
    }
}

//! Patent filing wizard.

use leptos::*;
use leptos_meta::Title;
use std::collections::HashMap;

use crate::components::{
    field_error, DocumentUploadSlot, ErrorBanner, FeeTable, SelectField, StepIndicator,
    SuccessCard, TextField, WizardNav,
};
use crate::ids;
use crate::pricing::{self, format_inr};
use crate::services::{
    collect_documents, load_profile, save_profile, simulate_payment, submit_patent,
    ApplicantInfo, PatentDetails, PatentPayload,
};
use crate::types::{PatentKind, SubmissionResponse, UploadedFile, UserProfile};
use crate::validation;

const STEPS: &[&str] = &["Applicant", "Invention", "Documents", "Review & Pay"];

const KIND_OPTIONS: &[(&str, &str)] = &[
    ("provisional", "Provisional specification"),
    ("complete", "Complete specification"),
];

#[component]
pub fn PatentPage() -> impl IntoView {
    let reference = store_value(ids::new_reference());
    let step = create_rw_signal(1usize);

    let full_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());

    if let Some(profile) = load_profile() {
        full_name.set(profile.full_name);
        email.set(profile.email);
        phone.set(profile.phone);
    }

    let invention_title = create_rw_signal(String::new());
    let kind = create_rw_signal("provisional".to_string());
    let field_of_invention = create_rw_signal(String::new());

    let specification_doc = create_rw_signal(None::<UploadedFile>);
    let drawings_doc = create_rw_signal(None::<UploadedFile>);

    let errors = create_rw_signal(HashMap::<&'static str, String>::new());
    let submit_error = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);
    let submitted = create_rw_signal(None::<SubmissionResponse>);

    let fees =
        Signal::derive(move || pricing::patent(PatentKind::from_value(&kind.get())));

    let validate_step = move |current: usize| -> HashMap<&'static str, String> {
        let mut errs = HashMap::new();
        match current {
            1 => {
                if let Some(e) = validation::required(&full_name.get(), "Full name") {
                    errs.insert("full_name", e);
                }
                if let Some(e) = validation::email(&email.get()) {
                    errs.insert("email", e);
                }
                if let Some(e) = validation::mobile(&phone.get()) {
                    errs.insert("phone", e);
                }
            }
            2 => {
                if let Some(e) = validation::required(&invention_title.get(), "Invention title") {
                    errs.insert("invention_title", e);
                }
                if let Some(e) =
                    validation::required(&field_of_invention.get(), "Field of invention")
                {
                    errs.insert("field_of_invention", e);
                }
            }
            3 => {
                if specification_doc.get().is_none() {
                    errs.insert(
                        "specification",
                        "Specification draft or invention disclosure is required".to_string(),
                    );
                }
            }
            _ => {}
        }
        errs
    };

    let on_next = move |_: ()| {
        let errs = validate_step(step.get());
        if errs.is_empty() {
            errors.update(|e| e.clear());
            step.update(|s| *s += 1);
        } else {
            errors.set(errs);
        }
    };

    let on_pay = move |_| {
        if submitting.get() {
            return;
        }
        submit_error.set(None);
        submitting.set(true);

        let current_fees = fees.get();
        let applicant = ApplicantInfo {
            full_name: full_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            phone: phone.get().trim().to_string(),
            pan: None,
        };
        let patent = PatentDetails {
            invention_title: invention_title.get().trim().to_string(),
            kind: PatentKind::from_value(&kind.get()),
            field_of_invention: field_of_invention.get().trim().to_string(),
        };
        let documents = collect_documents(&[&specification_doc.get(), &drawings_doc.get()]);
        let reference_value = reference.get_value();

        spawn_local(async move {
            let payment = simulate_payment(current_fees.total).await;

            let payload = PatentPayload {
                reference: reference_value,
                applicant: applicant.clone(),
                patent,
                documents,
                fees: current_fees,
                payment,
                submitted_at: chrono::Utc::now().to_rfc3339(),
            };

            log::info!("Submitting patent filing {}", payload.reference);
            match submit_patent(&payload).await {
                Ok(response) => {
                    save_profile(&UserProfile {
                        full_name: applicant.full_name.clone(),
                        email: applicant.email.clone(),
                        phone: applicant.phone.clone(),
                    });
                    submitted.set(Some(response));
                }
                Err(e) => {
                    log::error!("Submission failed: {}", e);
                    submit_error.set(Some(e));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Title text="Patent Filing — FilingDesk"/>

        <div class="container wizard-page">
            <div class="wizard-header">
                <h1>"Patent Filing"</h1>
                <p class="subtitle">
                    "Provisional or complete specification prepared and filed by "
                    "registered patent agents. Provisional filings secure your priority "
                    "date for 12 months."
                </p>
                <div class="wizard-reference">"Reference: " {reference.get_value()}</div>
            </div>

            {move || {
                submitted.get().map(|response| {
                    view! {
                        <SuccessCard
                            service_name="patent"
                            reference=reference.get_value()
                            response=response
                        />
                    }
                })
            }}

            <Show when=move || submitted.get().is_none() fallback=|| view! { }>
                <StepIndicator step=step labels=STEPS/>

                <Show when=move || step.get() == 1 fallback=|| view! { }>
                    <div class="wizard-step">
                        <TextField
                            label="Full name"
                            value=full_name
                            error=field_error(errors, "full_name")
                        />
                        <TextField
                            label="Email"
                            value=email
                            input_type="email"
                            error=field_error(errors, "email")
                        />
                        <TextField
                            label="Mobile number"
                            value=phone
                            input_type="tel"
                            error=field_error(errors, "phone")
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 2 fallback=|| view! { }>
                    <div class="wizard-step">
                        <TextField
                            label="Invention title"
                            value=invention_title
                            error=field_error(errors, "invention_title")
                        />
                        <SelectField
                            label="Filing type"
                            value=kind
                            options=KIND_OPTIONS.to_vec()
                        />
                        <TextField
                            label="Field of invention"
                            value=field_of_invention
                            placeholder="e.g. Agricultural machinery"
                            error=field_error(errors, "field_of_invention")
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 3 fallback=|| view! { }>
                    <div class="wizard-step">
                        <DocumentUploadSlot
                            label="Specification draft / invention disclosure"
                            category="specification"
                            file=specification_doc
                            hint="Any format; our agents redraft it for filing"
                            error=field_error(errors, "specification")
                        />
                        <DocumentUploadSlot
                            label="Drawings"
                            category="drawings"
                            file=drawings_doc
                            hint="Optional"
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 4 fallback=|| view! { }>
                    <div class="wizard-step">
                        <div class="review-summary">
                            <div class="review-row">
                                <span>"Invention"</span>
                                <strong>{move || invention_title.get()}</strong>
                            </div>
                            <div class="review-row">
                                <span>"Filing type"</span>
                                <strong>
                                    {move || {
                                        match PatentKind::from_value(&kind.get()) {
                                            PatentKind::Provisional => "Provisional",
                                            PatentKind::Complete => "Complete",
                                        }
                                    }}
                                </strong>
                            </div>
                            <div class="review-row">
                                <span>"Field"</span>
                                <strong>{move || field_of_invention.get()}</strong>
                            </div>
                        </div>

                        <FeeTable fees=fees/>
                        <ErrorBanner message=submit_error/>

                        <div class="wizard-nav">
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| step.set(3)
                                disabled=move || submitting.get()
                            >
                                "Back"
                            </button>
                            <button
                                class="btn btn-primary"
                                on:click=on_pay
                                disabled=move || submitting.get()
                            >
                                {move || {
                                    if submitting.get() {
                                        "Processing payment…".to_string()
                                    } else {
                                        format!("Pay {} & submit", format_inr(fees.get().total))
                                    }
                                }}
                            </button>
                        </div>
                    </div>
                </Show>

                <Show when=move || step.get() < 4 fallback=|| view! { }>
                    <WizardNav step=step errors=errors on_next=on_next/>
                </Show>
            </Show>
        </div>
    }
}

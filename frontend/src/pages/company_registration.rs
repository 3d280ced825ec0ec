//! Private limited company registration wizard.
//!
//! Four steps: applicant, company details, documents, review & pay.
//! Stamp duty in the fee table tracks the authorized capital band as
//! the applicant types.

use leptos::*;
use leptos_meta::Title;
use std::collections::HashMap;

use crate::components::{
    field_error, DocumentUploadSlot, ErrorBanner, FeeTable, SelectField, StepIndicator,
    SuccessCard, TextField, WizardNav,
};
use crate::ids;
use crate::pages::STATE_OPTIONS;
use crate::pricing::{self, format_inr};
use crate::services::{
    collect_documents, load_profile, save_profile, simulate_payment,
    submit_company_registration, ApplicantInfo, CompanyDetails, CompanyRegistrationPayload,
};
use crate::types::{SubmissionResponse, UploadedFile, UserProfile};
use crate::validation;

const STEPS: &[&str] = &["Applicant", "Company", "Documents", "Review & Pay"];

#[component]
pub fn CompanyRegistrationPage() -> impl IntoView {
    let reference = store_value(ids::new_reference());
    let step = create_rw_signal(1usize);

    // Applicant
    let full_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let pan = create_rw_signal(String::new());

    if let Some(profile) = load_profile() {
        full_name.set(profile.full_name);
        email.set(profile.email);
        phone.set(profile.phone);
    }

    // Company details
    let company_name = create_rw_signal(String::new());
    let state = create_rw_signal("Karnataka".to_string());
    let capital = create_rw_signal("100000".to_string());
    let directors = create_rw_signal("2".to_string());

    // Documents
    let pan_doc = create_rw_signal(None::<UploadedFile>);
    let address_doc = create_rw_signal(None::<UploadedFile>);
    let photo_doc = create_rw_signal(None::<UploadedFile>);

    // Transient UI state
    let errors = create_rw_signal(HashMap::<&'static str, String>::new());
    let submit_error = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);
    let submitted = create_rw_signal(None::<SubmissionResponse>);

    let fees = Signal::derive(move || {
        pricing::company_registration(validation::parse_count(&capital.get(), 100_000))
    });

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
                if let Some(e) = validation::pan(&pan.get().to_uppercase()) {
                    errs.insert("pan", e);
                }
            }
            2 => {
                if let Some(e) = validation::required(&company_name.get(), "Proposed company name")
                {
                    errs.insert("company_name", e);
                }
                if let Some(e) = validation::count_in_range(
                    &capital.get(),
                    "Authorized capital",
                    100_000,
                    100_000_000,
                ) {
                    errs.insert("capital", e);
                }
                if let Some(e) =
                    validation::count_in_range(&directors.get(), "Number of directors", 2, 15)
                {
                    errs.insert("directors", e);
                }
            }
            3 => {
                if pan_doc.get().is_none() {
                    errs.insert("pan-card", "PAN card is required".to_string());
                }
                if address_doc.get().is_none() {
                    errs.insert("address-proof", "Address proof is required".to_string());
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
            pan: Some(pan.get().trim().to_uppercase()),
        };
        let company = CompanyDetails {
            proposed_name: company_name.get().trim().to_string(),
            state: state.get(),
            authorized_capital: validation::parse_count(&capital.get(), 100_000),
            director_count: validation::parse_count(&directors.get(), 2),
        };
        let documents = collect_documents(&[&pan_doc.get(), &address_doc.get(), &photo_doc.get()]);
        let reference_value = reference.get_value();

        spawn_local(async move {
            let payment = simulate_payment(current_fees.total).await;

            let payload = CompanyRegistrationPayload {
                reference: reference_value,
                applicant: applicant.clone(),
                company,
                documents,
                fees: current_fees,
                payment,
                submitted_at: chrono::Utc::now().to_rfc3339(),
            };

            log::info!("Submitting company registration {}", payload.reference);
            match submit_company_registration(&payload).await {
                Ok(response) => {
                    save_profile(&UserProfile {
                        full_name: applicant.full_name.clone(),
                        email: applicant.email.clone(),
                        phone: applicant.phone.clone(),
                    });
                    log::info!("Application received: {}", response.application_id);
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

    let document_count = move || {
        [pan_doc.get(), address_doc.get(), photo_doc.get()]
            .iter()
            .filter(|d| d.is_some())
            .count()
    };

    view! {
        <Title text="Company Registration — FilingDesk"/>

        <div class="container wizard-page">
            <div class="wizard-header">
                <h1>"Private Limited Company Registration"</h1>
                <p class="subtitle">
                    "Incorporation certificate, DIN for directors and company PAN, "
                    "filed by our professionals."
                </p>
                <div class="wizard-reference">"Reference: " {reference.get_value()}</div>
            </div>

            {move || {
                submitted.get().map(|response| {
                    view! {
                        <SuccessCard
                            service_name="company registration"
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
                            placeholder="10-digit mobile"
                            error=field_error(errors, "phone")
                        />
                        <TextField
                            label="PAN"
                            value=pan
                            placeholder="ABCDE1234F"
                            error=field_error(errors, "pan")
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 2 fallback=|| view! { }>
                    <div class="wizard-step">
                        <TextField
                            label="Proposed company name"
                            value=company_name
                            placeholder="Must end with Private Limited"
                            error=field_error(errors, "company_name")
                        />
                        <SelectField
                            label="State of registration"
                            value=state
                            options=STATE_OPTIONS.to_vec()
                        />
                        <TextField
                            label="Authorized capital (₹)"
                            value=capital
                            input_type="number"
                            error=field_error(errors, "capital")
                        />
                        <TextField
                            label="Number of directors"
                            value=directors
                            input_type="number"
                            error=field_error(errors, "directors")
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 3 fallback=|| view! { }>
                    <div class="wizard-step">
                        <DocumentUploadSlot
                            label="PAN card"
                            category="pan-card"
                            file=pan_doc
                            hint="Of the primary director"
                            error=field_error(errors, "pan-card")
                        />
                        <DocumentUploadSlot
                            label="Registered office address proof"
                            category="address-proof"
                            file=address_doc
                            hint="Utility bill or rent agreement, under 2 months old"
                            error=field_error(errors, "address-proof")
                        />
                        <DocumentUploadSlot
                            label="Passport photo"
                            category="photo"
                            file=photo_doc
                            hint="Optional"
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 4 fallback=|| view! { }>
                    <div class="wizard-step">
                        <div class="review-summary">
                            <div class="review-row">
                                <span>"Applicant"</span>
                                <strong>{move || full_name.get()}</strong>
                            </div>
                            <div class="review-row">
                                <span>"Company"</span>
                                <strong>{move || company_name.get()}</strong>
                            </div>
                            <div class="review-row">
                                <span>"State"</span>
                                <strong>{move || state.get()}</strong>
                            </div>
                            <div class="review-row">
                                <span>"Documents"</span>
                                <strong>{move || document_count()} " uploaded"</strong>
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

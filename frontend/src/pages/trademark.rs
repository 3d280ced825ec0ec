//! Trademark registration wizard.
//!
//! The government fee is per Nice class and concessional for
//! individuals, so the fee table reacts to both the class count and
//! the applicant type.

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
    collect_documents, load_profile, save_profile, simulate_payment, submit_trademark,
    ApplicantInfo, TrademarkDetails, TrademarkPayload,
};
use crate::types::{ApplicantType, SubmissionResponse, UploadedFile, UserProfile};
use crate::validation;

const STEPS: &[&str] = &["Applicant", "Mark", "Documents", "Review & Pay"];

const APPLICANT_OPTIONS: &[(&str, &str)] = &[
    ("individual", "Individual / Proprietor"),
    ("company", "Company / LLP"),
];

#[component]
pub fn TrademarkPage() -> impl IntoView {
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

    let mark_name = create_rw_signal(String::new());
    let applicant_type = create_rw_signal("individual".to_string());
    let class_count = create_rw_signal("1".to_string());
    let goods_description = create_rw_signal(String::new());

    let authorization_doc = create_rw_signal(None::<UploadedFile>);
    let id_proof_doc = create_rw_signal(None::<UploadedFile>);
    let logo_doc = create_rw_signal(None::<UploadedFile>);

    let errors = create_rw_signal(HashMap::<&'static str, String>::new());
    let submit_error = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);
    let submitted = create_rw_signal(None::<SubmissionResponse>);

    let fees = Signal::derive(move || {
        pricing::trademark(
            validation::parse_count(&class_count.get(), 1),
            ApplicantType::from_value(&applicant_type.get()),
        )
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
            }
            2 => {
                if let Some(e) = validation::required(&mark_name.get(), "Mark name") {
                    errs.insert("mark_name", e);
                }
                if let Some(e) =
                    validation::count_in_range(&class_count.get(), "Number of classes", 1, 45)
                {
                    errs.insert("class_count", e);
                }
                if let Some(e) =
                    validation::required(&goods_description.get(), "Goods and services description")
                {
                    errs.insert("goods_description", e);
                }
            }
            3 => {
                // Logo is optional: word marks have none.
                if authorization_doc.get().is_none() {
                    errs.insert(
                        "authorization",
                        "Signed authorization (TM-48) is required".to_string(),
                    );
                }
                if id_proof_doc.get().is_none() {
                    errs.insert("id-proof", "Identity proof is required".to_string());
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
        let trademark = TrademarkDetails {
            mark_name: mark_name.get().trim().to_string(),
            applicant_type: ApplicantType::from_value(&applicant_type.get()),
            class_count: validation::parse_count(&class_count.get(), 1),
            goods_description: goods_description.get().trim().to_string(),
        };
        let documents = collect_documents(&[
            &authorization_doc.get(),
            &id_proof_doc.get(),
            &logo_doc.get(),
        ]);
        let reference_value = reference.get_value();

        spawn_local(async move {
            let payment = simulate_payment(current_fees.total).await;

            let payload = TrademarkPayload {
                reference: reference_value,
                applicant: applicant.clone(),
                trademark,
                documents,
                fees: current_fees,
                payment,
                submitted_at: chrono::Utc::now().to_rfc3339(),
            };

            log::info!("Submitting trademark application {}", payload.reference);
            match submit_trademark(&payload).await {
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
        <Title text="Trademark Registration — FilingDesk"/>

        <div class="container wizard-page">
            <div class="wizard-header">
                <h1>"Trademark Registration"</h1>
                <p class="subtitle">
                    "Protect your brand name and logo. Application drafted and filed by "
                    "registered trademark attorneys."
                </p>
                <div class="wizard-reference">"Reference: " {reference.get_value()}</div>
            </div>

            {move || {
                submitted.get().map(|response| {
                    view! {
                        <SuccessCard
                            service_name="trademark"
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
                            label="Mark name"
                            value=mark_name
                            placeholder="The word or name to protect"
                            error=field_error(errors, "mark_name")
                        />
                        <SelectField
                            label="Applicant type"
                            value=applicant_type
                            options=APPLICANT_OPTIONS.to_vec()
                        />
                        <TextField
                            label="Number of classes"
                            value=class_count
                            input_type="number"
                            error=field_error(errors, "class_count")
                        />
                        <TextField
                            label="Goods and services description"
                            value=goods_description
                            placeholder="e.g. Textiles and textile goods"
                            error=field_error(errors, "goods_description")
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 3 fallback=|| view! { }>
                    <div class="wizard-step">
                        <DocumentUploadSlot
                            label="Signed authorization (TM-48)"
                            category="authorization"
                            file=authorization_doc
                            error=field_error(errors, "authorization")
                        />
                        <DocumentUploadSlot
                            label="Identity proof"
                            category="id-proof"
                            file=id_proof_doc
                            hint="PAN or Aadhaar of the applicant"
                            error=field_error(errors, "id-proof")
                        />
                        <DocumentUploadSlot
                            label="Logo"
                            category="logo"
                            file=logo_doc
                            hint="Optional, for device marks only"
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 4 fallback=|| view! { }>
                    <div class="wizard-step">
                        <div class="review-summary">
                            <div class="review-row">
                                <span>"Mark"</span>
                                <strong>{move || mark_name.get()}</strong>
                            </div>
                            <div class="review-row">
                                <span>"Applicant type"</span>
                                <strong>
                                    {move || {
                                        ApplicantType::from_value(&applicant_type.get()).label()
                                    }}
                                </strong>
                            </div>
                            <div class="review-row">
                                <span>"Classes"</span>
                                <strong>{move || class_count.get()}</strong>
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

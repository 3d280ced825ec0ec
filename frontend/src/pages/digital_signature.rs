//! Class 3 digital signature certificate wizard.

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
    collect_documents, load_profile, save_profile, simulate_payment, submit_digital_signature,
    ApplicantInfo, DigitalSignaturePayload, DscDetails,
};
use crate::types::{ApplicantType, SubmissionResponse, UploadedFile, UserProfile};
use crate::validation;

const STEPS: &[&str] = &["Applicant", "Certificate", "Documents", "Review & Pay"];

const APPLICANT_OPTIONS: &[(&str, &str)] = &[
    ("individual", "Individual"),
    ("company", "Organization"),
];

const VALIDITY_OPTIONS: &[(&str, &str)] =
    &[("1", "1 year"), ("2", "2 years"), ("3", "3 years")];

#[component]
pub fn DigitalSignaturePage() -> impl IntoView {
    let reference = store_value(ids::new_reference());
    let step = create_rw_signal(1usize);

    let full_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let pan = create_rw_signal(String::new());

    if let Some(profile) = load_profile() {
        full_name.set(profile.full_name);
        email.set(profile.email);
        phone.set(profile.phone);
    }

    let applicant_type = create_rw_signal("individual".to_string());
    let validity_years = create_rw_signal("2".to_string());

    let pan_doc = create_rw_signal(None::<UploadedFile>);
    let address_doc = create_rw_signal(None::<UploadedFile>);
    let photo_doc = create_rw_signal(None::<UploadedFile>);

    let errors = create_rw_signal(HashMap::<&'static str, String>::new());
    let submit_error = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);
    let submitted = create_rw_signal(None::<SubmissionResponse>);

    let fees = Signal::derive(move || {
        pricing::digital_signature(validation::parse_count(&validity_years.get(), 1))
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
            3 => {
                if pan_doc.get().is_none() {
                    errs.insert("pan-card", "PAN card is required".to_string());
                }
                if address_doc.get().is_none() {
                    errs.insert("address-proof", "Address proof is required".to_string());
                }
                if photo_doc.get().is_none() {
                    errs.insert("photo", "Passport photo is required".to_string());
                }
            }
            // Certificate step is two selects, nothing to validate.
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
        let certificate = DscDetails {
            applicant_type: ApplicantType::from_value(&applicant_type.get()),
            validity_years: validation::parse_count(&validity_years.get(), 1),
        };
        let documents =
            collect_documents(&[&pan_doc.get(), &address_doc.get(), &photo_doc.get()]);
        let reference_value = reference.get_value();

        spawn_local(async move {
            let payment = simulate_payment(current_fees.total).await;

            let payload = DigitalSignaturePayload {
                reference: reference_value,
                applicant: applicant.clone(),
                certificate,
                documents,
                fees: current_fees,
                payment,
                submitted_at: chrono::Utc::now().to_rfc3339(),
            };

            log::info!("Submitting DSC application {}", payload.reference);
            match submit_digital_signature(&payload).await {
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
        <Title text="Digital Signature Certificate — FilingDesk"/>

        <div class="container wizard-page">
            <div class="wizard-header">
                <h1>"Digital Signature Certificate"</h1>
                <p class="subtitle">
                    "Class 3 DSC on a USB token, accepted for MCA filings, income tax, "
                    "GST and e-tenders."
                </p>
                <div class="wizard-reference">"Reference: " {reference.get_value()}</div>
            </div>

            {move || {
                submitted.get().map(|response| {
                    view! {
                        <SuccessCard
                            service_name="digital signature"
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
                        <SelectField
                            label="Certificate for"
                            value=applicant_type
                            options=APPLICANT_OPTIONS.to_vec()
                        />
                        <SelectField
                            label="Validity"
                            value=validity_years
                            options=VALIDITY_OPTIONS.to_vec()
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 3 fallback=|| view! { }>
                    <div class="wizard-step">
                        <DocumentUploadSlot
                            label="PAN card"
                            category="pan-card"
                            file=pan_doc
                            error=field_error(errors, "pan-card")
                        />
                        <DocumentUploadSlot
                            label="Address proof"
                            category="address-proof"
                            file=address_doc
                            hint="Aadhaar, passport or driving license"
                            error=field_error(errors, "address-proof")
                        />
                        <DocumentUploadSlot
                            label="Passport photo"
                            category="photo"
                            file=photo_doc
                            error=field_error(errors, "photo")
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
                                <span>"Certificate for"</span>
                                <strong>
                                    {move || {
                                        ApplicantType::from_value(&applicant_type.get()).label()
                                    }}
                                </strong>
                            </div>
                            <div class="review-row">
                                <span>"Validity"</span>
                                <strong>{move || validity_years.get()} " year(s)"</strong>
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

//! FSSAI food business license wizard.
//!
//! The license tier follows annual turnover; the government fee is per
//! year of validity, so the fee table reacts to both selects.

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
    collect_documents, load_profile, save_profile, simulate_payment, submit_fssai_license,
    ApplicantInfo, FoodBusinessDetails, FssaiLicensePayload,
};
use crate::types::{FssaiTier, SubmissionResponse, UploadedFile, UserProfile};
use crate::validation;

const STEPS: &[&str] = &["Applicant", "Business", "Documents", "Review & Pay"];

const TIER_OPTIONS: &[(&str, &str)] = &[
    ("basic", "Basic — turnover up to ₹12 lakh"),
    ("state", "State — turnover up to ₹20 crore"),
    ("central", "Central — above ₹20 crore / import-export"),
];

const VALIDITY_OPTIONS: &[(&str, &str)] = &[
    ("1", "1 year"),
    ("2", "2 years"),
    ("3", "3 years"),
    ("5", "5 years"),
];

#[component]
pub fn FssaiLicensePage() -> impl IntoView {
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

    let business_name = create_rw_signal(String::new());
    let tier = create_rw_signal("basic".to_string());
    let validity_years = create_rw_signal("1".to_string());
    let premises_pincode = create_rw_signal(String::new());

    let identity_doc = create_rw_signal(None::<UploadedFile>);
    let premises_doc = create_rw_signal(None::<UploadedFile>);
    let safety_plan_doc = create_rw_signal(None::<UploadedFile>);

    let errors = create_rw_signal(HashMap::<&'static str, String>::new());
    let submit_error = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);
    let submitted = create_rw_signal(None::<SubmissionResponse>);

    let fees = Signal::derive(move || {
        pricing::fssai_license(
            FssaiTier::from_value(&tier.get()),
            validation::parse_count(&validity_years.get(), 1),
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
                if let Some(e) = validation::required(&business_name.get(), "Business name") {
                    errs.insert("business_name", e);
                }
                if let Some(e) = validation::pincode(&premises_pincode.get()) {
                    errs.insert("premises_pincode", e);
                }
            }
            3 => {
                if identity_doc.get().is_none() {
                    errs.insert("identity-proof", "Identity proof is required".to_string());
                }
                if premises_doc.get().is_none() {
                    errs.insert(
                        "premises-proof",
                        "Premises proof is required".to_string(),
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
        let business = FoodBusinessDetails {
            business_name: business_name.get().trim().to_string(),
            tier: FssaiTier::from_value(&tier.get()),
            validity_years: validation::parse_count(&validity_years.get(), 1),
            premises_pincode: premises_pincode.get().trim().to_string(),
        };
        let documents = collect_documents(&[
            &identity_doc.get(),
            &premises_doc.get(),
            &safety_plan_doc.get(),
        ]);
        let reference_value = reference.get_value();

        spawn_local(async move {
            let payment = simulate_payment(current_fees.total).await;

            let payload = FssaiLicensePayload {
                reference: reference_value,
                applicant: applicant.clone(),
                business,
                documents,
                fees: current_fees,
                payment,
                submitted_at: chrono::Utc::now().to_rfc3339(),
            };

            log::info!("Submitting FSSAI license application {}", payload.reference);
            match submit_fssai_license(&payload).await {
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
        <Title text="FSSAI Food License — FilingDesk"/>

        <div class="container wizard-page">
            <div class="wizard-header">
                <h1>"FSSAI Food Business License"</h1>
                <p class="subtitle">
                    "Mandatory for every food business operator. We pick the right tier "
                    "from your turnover and file with the food safety authority."
                </p>
                <div class="wizard-reference">"Reference: " {reference.get_value()}</div>
            </div>

            {move || {
                submitted.get().map(|response| {
                    view! {
                        <SuccessCard
                            service_name="FSSAI license"
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
                            label="Business name"
                            value=business_name
                            error=field_error(errors, "business_name")
                        />
                        <SelectField
                            label="License tier"
                            value=tier
                            options=TIER_OPTIONS.to_vec()
                        />
                        <SelectField
                            label="Validity"
                            value=validity_years
                            options=VALIDITY_OPTIONS.to_vec()
                        />
                        <TextField
                            label="Premises PIN code"
                            value=premises_pincode
                            placeholder="6-digit PIN"
                            error=field_error(errors, "premises_pincode")
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 3 fallback=|| view! { }>
                    <div class="wizard-step">
                        <DocumentUploadSlot
                            label="Identity proof"
                            category="identity-proof"
                            file=identity_doc
                            hint="PAN or Aadhaar of the operator"
                            error=field_error(errors, "identity-proof")
                        />
                        <DocumentUploadSlot
                            label="Premises proof"
                            category="premises-proof"
                            file=premises_doc
                            hint="Rent agreement or utility bill"
                            error=field_error(errors, "premises-proof")
                        />
                        <DocumentUploadSlot
                            label="Food safety management plan"
                            category="safety-plan"
                            file=safety_plan_doc
                            hint="Optional, required for central licenses only"
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 4 fallback=|| view! { }>
                    <div class="wizard-step">
                        <div class="review-summary">
                            <div class="review-row">
                                <span>"Business"</span>
                                <strong>{move || business_name.get()}</strong>
                            </div>
                            <div class="review-row">
                                <span>"Tier"</span>
                                <strong>{move || tier.get().to_uppercase()}</strong>
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

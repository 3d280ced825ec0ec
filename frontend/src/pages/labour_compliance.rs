//! PF & ESI employer registration wizard.

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
    collect_documents, load_profile, save_profile, simulate_payment, submit_labour_compliance,
    ApplicantInfo, EstablishmentDetails, LabourCompliancePayload,
};
use crate::types::{SubmissionResponse, UploadedFile, UserProfile};
use crate::validation;

const STEPS: &[&str] = &["Applicant", "Establishment", "Documents", "Review & Pay"];

#[component]
pub fn LabourCompliancePage() -> impl IntoView {
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

    let establishment_name = create_rw_signal(String::new());
    let state = create_rw_signal("Maharashtra".to_string());
    let employee_count = create_rw_signal("10".to_string());

    let incorporation_doc = create_rw_signal(None::<UploadedFile>);
    let employee_list_doc = create_rw_signal(None::<UploadedFile>);
    let cheque_doc = create_rw_signal(None::<UploadedFile>);

    let errors = create_rw_signal(HashMap::<&'static str, String>::new());
    let submit_error = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);
    let submitted = create_rw_signal(None::<SubmissionResponse>);

    // PF registration is mandatory at 20 employees, ESI at 10; pricing
    // only needs the head count band.
    let fees = Signal::derive(move || {
        pricing::labour_compliance(validation::parse_count(&employee_count.get(), 1))
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
                if let Some(e) =
                    validation::required(&establishment_name.get(), "Establishment name")
                {
                    errs.insert("establishment_name", e);
                }
                if let Some(e) = validation::count_in_range(
                    &employee_count.get(),
                    "Number of employees",
                    1,
                    10_000,
                ) {
                    errs.insert("employee_count", e);
                }
            }
            3 => {
                if incorporation_doc.get().is_none() {
                    errs.insert(
                        "incorporation-certificate",
                        "Incorporation certificate is required".to_string(),
                    );
                }
                if employee_list_doc.get().is_none() {
                    errs.insert("employee-list", "Employee list is required".to_string());
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
        let establishment = EstablishmentDetails {
            establishment_name: establishment_name.get().trim().to_string(),
            state: state.get(),
            employee_count: validation::parse_count(&employee_count.get(), 1),
        };
        let documents = collect_documents(&[
            &incorporation_doc.get(),
            &employee_list_doc.get(),
            &cheque_doc.get(),
        ]);
        let reference_value = reference.get_value();

        spawn_local(async move {
            let payment = simulate_payment(current_fees.total).await;

            let payload = LabourCompliancePayload {
                reference: reference_value,
                applicant: applicant.clone(),
                establishment,
                documents,
                fees: current_fees,
                payment,
                submitted_at: chrono::Utc::now().to_rfc3339(),
            };

            log::info!("Submitting PF/ESI registration {}", payload.reference);
            match submit_labour_compliance(&payload).await {
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
        <Title text="PF & ESI Registration — FilingDesk"/>

        <div class="container wizard-page">
            <div class="wizard-header">
                <h1>"PF & ESI Employer Registration"</h1>
                <p class="subtitle">
                    "Register your establishment under the Employees' Provident Fund and "
                    "Employees' State Insurance schemes."
                </p>
                <div class="wizard-reference">"Reference: " {reference.get_value()}</div>
            </div>

            {move || {
                submitted.get().map(|response| {
                    view! {
                        <SuccessCard
                            service_name="PF & ESI registration"
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
                            label="Employer PAN"
                            value=pan
                            placeholder="ABCDE1234F"
                            error=field_error(errors, "pan")
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 2 fallback=|| view! { }>
                    <div class="wizard-step">
                        <TextField
                            label="Establishment name"
                            value=establishment_name
                            error=field_error(errors, "establishment_name")
                        />
                        <SelectField
                            label="State"
                            value=state
                            options=STATE_OPTIONS.to_vec()
                        />
                        <TextField
                            label="Number of employees"
                            value=employee_count
                            input_type="number"
                            error=field_error(errors, "employee_count")
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 3 fallback=|| view! { }>
                    <div class="wizard-step">
                        <DocumentUploadSlot
                            label="Incorporation certificate"
                            category="incorporation-certificate"
                            file=incorporation_doc
                            error=field_error(errors, "incorporation-certificate")
                        />
                        <DocumentUploadSlot
                            label="Employee list with salaries"
                            category="employee-list"
                            file=employee_list_doc
                            error=field_error(errors, "employee-list")
                        />
                        <DocumentUploadSlot
                            label="Cancelled cheque"
                            category="cancelled-cheque"
                            file=cheque_doc
                            hint="Optional, speeds up bank verification"
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == 4 fallback=|| view! { }>
                    <div class="wizard-step">
                        <div class="review-summary">
                            <div class="review-row">
                                <span>"Establishment"</span>
                                <strong>{move || establishment_name.get()}</strong>
                            </div>
                            <div class="review-row">
                                <span>"State"</span>
                                <strong>{move || state.get()}</strong>
                            </div>
                            <div class="review-row">
                                <span>"Employees"</span>
                                <strong>{move || employee_count.get()}</strong>
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

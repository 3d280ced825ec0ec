//! Submission payloads for every service.
//!
//! Each wizard assembles one of these structs on the review step and
//! posts it through [`submit_application`]. Field names are the
//! backend's contract; everything serializes camelCase.

use serde::{Deserialize, Serialize};

use crate::pricing::FeeBreakdown;
use crate::services::api::submit_application;
use crate::services::payment::PaymentRecord;
use crate::types::{ApplicantType, FssaiTier, PatentKind, SubmissionResponse, UploadedFile};

// =============================================================================
// Shared payload pieces
// =============================================================================

/// Contact/identity block common to every application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// PAN where the service requires it, otherwise omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
}

/// Reference to a document already uploaded via `/api/files`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    pub category: String,
    pub file_id: String,
    pub url: String,
    pub file_name: String,
}

impl From<&UploadedFile> for DocumentRef {
    fn from(file: &UploadedFile) -> Self {
        Self {
            category: file.category.clone(),
            file_id: file.id.clone(),
            url: file.url.clone(),
            file_name: file.file_name.clone(),
        }
    }
}

/// Collect document references from upload slots, skipping empty ones.
///
/// Required-document checks happen at step validation, so an empty slot
/// here is an optional document the applicant chose not to provide.
pub fn collect_documents(slots: &[&Option<UploadedFile>]) -> Vec<DocumentRef> {
    slots
        .iter()
        .filter_map(|slot| slot.as_ref().map(DocumentRef::from))
        .collect()
}

// =============================================================================
// Company registration
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetails {
    pub proposed_name: String,
    pub state: String,
    pub authorized_capital: u32,
    pub director_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRegistrationPayload {
    pub reference: String,
    pub applicant: ApplicantInfo,
    pub company: CompanyDetails,
    pub documents: Vec<DocumentRef>,
    pub fees: FeeBreakdown,
    pub payment: PaymentRecord,
    pub submitted_at: String,
}

pub async fn submit_company_registration(
    payload: &CompanyRegistrationPayload,
) -> Result<SubmissionResponse, String> {
    submit_application("company-registration", payload).await
}

// =============================================================================
// Trademark registration
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrademarkDetails {
    pub mark_name: String,
    pub applicant_type: ApplicantType,
    pub class_count: u32,
    pub goods_description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrademarkPayload {
    pub reference: String,
    pub applicant: ApplicantInfo,
    pub trademark: TrademarkDetails,
    pub documents: Vec<DocumentRef>,
    pub fees: FeeBreakdown,
    pub payment: PaymentRecord,
    pub submitted_at: String,
}

pub async fn submit_trademark(payload: &TrademarkPayload) -> Result<SubmissionResponse, String> {
    submit_application("trademark", payload).await
}

// =============================================================================
// Patent filing
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentDetails {
    pub invention_title: String,
    pub kind: PatentKind,
    pub field_of_invention: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentPayload {
    pub reference: String,
    pub applicant: ApplicantInfo,
    pub patent: PatentDetails,
    pub documents: Vec<DocumentRef>,
    pub fees: FeeBreakdown,
    pub payment: PaymentRecord,
    pub submitted_at: String,
}

pub async fn submit_patent(payload: &PatentPayload) -> Result<SubmissionResponse, String> {
    submit_application("patent", payload).await
}

// =============================================================================
// Labour compliance (PF & ESI)
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentDetails {
    pub establishment_name: String,
    pub state: String,
    pub employee_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourCompliancePayload {
    pub reference: String,
    pub applicant: ApplicantInfo,
    pub establishment: EstablishmentDetails,
    pub documents: Vec<DocumentRef>,
    pub fees: FeeBreakdown,
    pub payment: PaymentRecord,
    pub submitted_at: String,
}

pub async fn submit_labour_compliance(
    payload: &LabourCompliancePayload,
) -> Result<SubmissionResponse, String> {
    submit_application("labour-compliance", payload).await
}

// =============================================================================
// FSSAI license
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodBusinessDetails {
    pub business_name: String,
    pub tier: FssaiTier,
    pub validity_years: u32,
    pub premises_pincode: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FssaiLicensePayload {
    pub reference: String,
    pub applicant: ApplicantInfo,
    pub business: FoodBusinessDetails,
    pub documents: Vec<DocumentRef>,
    pub fees: FeeBreakdown,
    pub payment: PaymentRecord,
    pub submitted_at: String,
}

pub async fn submit_fssai_license(
    payload: &FssaiLicensePayload,
) -> Result<SubmissionResponse, String> {
    submit_application("fssai-license", payload).await
}

// =============================================================================
// Digital signature certificate
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DscDetails {
    pub applicant_type: ApplicantType,
    pub validity_years: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalSignaturePayload {
    pub reference: String,
    pub applicant: ApplicantInfo,
    pub certificate: DscDetails,
    pub documents: Vec<DocumentRef>,
    pub fees: FeeBreakdown,
    pub payment: PaymentRecord,
    pub submitted_at: String,
}

pub async fn submit_digital_signature(
    payload: &DigitalSignaturePayload,
) -> Result<SubmissionResponse, String> {
    submit_application("digital-signature", payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing;

    fn applicant() -> ApplicantInfo {
        ApplicantInfo {
            full_name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            pan: Some("ABCDE1234F".to_string()),
        }
    }

    fn uploaded(category: &str) -> UploadedFile {
        UploadedFile {
            id: format!("f-{}", category),
            url: format!("https://files.filingdesk.in/f-{}", category),
            file_name: format!("{}.pdf", category),
            category: category.to_string(),
        }
    }

    fn payment() -> PaymentRecord {
        PaymentRecord {
            status: "paid".to_string(),
            transaction_id: "TXN-ABCDEF2345".to_string(),
            amount: 8_499,
            paid_at: "2025-06-01T10:30:00+00:00".to_string(),
        }
    }

    #[test]
    fn collect_documents_skips_empty_slots() {
        let pan = Some(uploaded("pan-card"));
        let missing = None::<UploadedFile>;
        let photo = Some(uploaded("photo"));
        let documents = collect_documents(&[&pan, &missing, &photo]);
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].category, "pan-card");
        assert_eq!(documents[1].file_name, "photo.pdf");
    }

    #[test]
    fn company_payload_wire_shape() {
        let fees = pricing::company_registration(500_000);
        let payload = CompanyRegistrationPayload {
            reference: "FD-AB23CD".to_string(),
            applicant: applicant(),
            company: CompanyDetails {
                proposed_name: "Lumora Textiles Private Limited".to_string(),
                state: "Karnataka".to_string(),
                authorized_capital: 500_000,
                director_count: 2,
            },
            documents: collect_documents(&[&Some(uploaded("pan-card")), &Some(uploaded("address-proof"))]),
            fees,
            payment: payment(),
            submitted_at: "2025-06-01T10:31:00+00:00".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["reference"], "FD-AB23CD");
        assert_eq!(value["applicant"]["fullName"], "Asha Verma");
        assert_eq!(value["company"]["authorizedCapital"], 500_000);
        assert_eq!(value["company"]["directorCount"], 2);
        assert_eq!(value["documents"][0]["fileId"], "f-pan-card");
        assert_eq!(value["documents"][1]["category"], "address-proof");
        assert_eq!(value["fees"]["governmentFee"], 2_500);
        assert_eq!(value["payment"]["transactionId"], "TXN-ABCDEF2345");
        assert_eq!(value["submittedAt"], "2025-06-01T10:31:00+00:00");
    }

    #[test]
    fn trademark_payload_embeds_applicant_type() {
        let payload = TrademarkPayload {
            reference: "FD-XY45ZW".to_string(),
            applicant: applicant(),
            trademark: TrademarkDetails {
                mark_name: "LUMORA".to_string(),
                applicant_type: ApplicantType::Company,
                class_count: 2,
                goods_description: "Textiles and textile goods".to_string(),
            },
            documents: vec![],
            fees: pricing::trademark(2, ApplicantType::Company),
            payment: payment(),
            submitted_at: "2025-06-01T10:31:00+00:00".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["trademark"]["applicantType"], "company");
        assert_eq!(value["trademark"]["classCount"], 2);
        assert_eq!(value["fees"]["total"], 1_999 + 18_000);
    }

    #[test]
    fn applicant_pan_omitted_when_absent() {
        let mut info = applicant();
        info.pan = None;
        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("pan").is_none());
    }

    #[test]
    fn payload_round_trip() {
        let payload = DigitalSignaturePayload {
            reference: "FD-QR78ST".to_string(),
            applicant: applicant(),
            certificate: DscDetails {
                applicant_type: ApplicantType::Individual,
                validity_years: 2,
            },
            documents: vec![DocumentRef::from(&uploaded("photo"))],
            fees: pricing::digital_signature(2),
            payment: payment(),
            submitted_at: "2025-06-01T10:31:00+00:00".to_string(),
        };
        let raw = serde_json::to_string(&payload).unwrap();
        let parsed: DigitalSignaturePayload = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, payload);
    }
}

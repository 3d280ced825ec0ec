//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across pages.
//!
//! # Categories
//!
//! - **Upload Types** - Remote file references returned by the backend
//! - **Submission Types** - Backend application responses
//! - **Profile Types** - Locally cached applicant profile
//! - **Service Detail Types** - Enums entered in wizard forms
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Upload Types
// =============================================================================

/// Remote reference to a document uploaded to the backend.
///
/// Returned by `POST /api/files`. The `category` is filled in
/// client-side from the upload slot that requested it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Backend file identifier
    pub id: String,
    /// Remote URL of the stored file
    pub url: String,
    /// Original file name
    pub file_name: String,
    /// Document category key (e.g. "pan-card")
    #[serde(default)]
    pub category: String,
}

// =============================================================================
// Submission Types
// =============================================================================

/// Response from an application submission endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    /// Backend application identifier
    pub application_id: String,
    /// Status: "received", "processing"
    pub status: String,
    /// Optional human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Profile Types
// =============================================================================

/// Applicant profile cached in browser storage to pre-fill forms.
///
/// Not authoritative: the backend owns and validates applicant data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

// =============================================================================
// Service Detail Types
// =============================================================================

/// Who is applying: a natural person or a registered entity.
///
/// Government fees for trademarks differ between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicantType {
    Individual,
    Company,
}

impl ApplicantType {
    /// Parse from a `<select>` value, defaulting to individual.
    pub fn from_value(value: &str) -> Self {
        match value {
            "company" => ApplicantType::Company,
            _ => ApplicantType::Individual,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicantType::Individual => "Individual / Proprietor",
            ApplicantType::Company => "Company / LLP",
        }
    }
}

/// Patent filing kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatentKind {
    /// Provisional specification, to be completed within 12 months
    Provisional,
    /// Complete specification filed directly
    Complete,
}

impl PatentKind {
    pub fn from_value(value: &str) -> Self {
        match value {
            "complete" => PatentKind::Complete,
            _ => PatentKind::Provisional,
        }
    }
}

/// FSSAI license tier, decided by annual turnover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FssaiTier {
    /// Turnover up to 12 lakh
    Basic,
    /// Turnover up to 20 crore
    State,
    /// Above 20 crore, importers/exporters
    Central,
}

impl FssaiTier {
    pub fn from_value(value: &str) -> Self {
        match value {
            "state" => FssaiTier::State,
            "central" => FssaiTier::Central,
            _ => FssaiTier::Basic,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug)]
pub enum AppError {
    /// File upload failed.
    Upload(String),
    /// Network/HTTP error.
    Network(String),
    /// Browser storage unavailable or unreadable.
    Storage(String),
    /// Invalid user input.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uploaded_file_parses_without_category() {
        let json = r#"{"id":"f-91","url":"https://files.filingdesk.in/f-91","fileName":"pan.pdf"}"#;
        let file: UploadedFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.id, "f-91");
        assert_eq!(file.file_name, "pan.pdf");
        assert_eq!(file.category, "");
    }

    #[test]
    fn submission_response_message_is_optional() {
        let json = r#"{"applicationId":"APP-2041","status":"received"}"#;
        let resp: SubmissionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.application_id, "APP-2041");
        assert_eq!(resp.message, None);
    }

    #[test]
    fn applicant_type_from_select_value() {
        assert_eq!(ApplicantType::from_value("company"), ApplicantType::Company);
        assert_eq!(ApplicantType::from_value("individual"), ApplicantType::Individual);
        assert_eq!(ApplicantType::from_value(""), ApplicantType::Individual);
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&PatentKind::Complete).unwrap(), r#""complete""#);
        assert_eq!(serde_json::to_string(&FssaiTier::Central).unwrap(), r#""central""#);
    }
}

//! HTTP client for the FilingDesk backend.
//!
//! Two endpoints matter to this frontend: the shared document upload
//! endpoint and the per-service application submission endpoints.
//! Errors are returned as plain strings ready for UI display.

use gloo_net::http::Request;
use serde::Serialize;
use web_sys::{File, FormData};

use crate::config::{API_BASE_URL, MAX_UPLOAD_SIZE};
use crate::types::{SubmissionResponse, UploadedFile};

/// Upload a supporting document to the backend.
///
/// Sends `multipart/form-data` with `file` and `category` parts to
/// `POST /api/files` and returns the remote reference. Files over
/// [`MAX_UPLOAD_SIZE`] are rejected before any network call.
pub async fn upload_file(file: File, category: &str) -> Result<UploadedFile, String> {
    if file.size() as usize > MAX_UPLOAD_SIZE {
        return Err(format!(
            "File is too large ({} KB). Maximum allowed is {} MB.",
            (file.size() as usize) / 1024,
            MAX_UPLOAD_SIZE / (1024 * 1024)
        ));
    }

    let form_data = FormData::new().map_err(|e| format!("Failed to create FormData: {:?}", e))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("Failed to append file: {:?}", e))?;
    form_data
        .append_with_str("category", category)
        .map_err(|e| format!("Failed to append category: {:?}", e))?;

    let url = format!("{}/api/files", API_BASE_URL);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("Server error ({}): {}", response.status(), error_text));
    }

    let mut uploaded = response
        .json::<UploadedFile>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    uploaded.category = category.to_string();
    Ok(uploaded)
}

/// Submit a completed application payload.
///
/// Posts JSON to `POST /api/applications/{service}`. A non-2xx response
/// body becomes the error string shown in the submit banner.
pub async fn submit_application<T: Serialize>(
    service: &str,
    payload: &T,
) -> Result<SubmissionResponse, String> {
    let url = format!("{}/api/applications/{}", API_BASE_URL, service);
    let request = Request::post(&url)
        .json(payload)
        .map_err(|e| format!("Failed to encode payload: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("Server error ({}): {}", response.status(), error_text));
    }

    response
        .json::<SubmissionResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_deserialization() {
        let json = r#"{
            "id": "f-7c21",
            "url": "https://files.filingdesk.in/f-7c21/pan.pdf",
            "fileName": "pan.pdf"
        }"#;

        let result: Result<UploadedFile, _> = serde_json::from_str(json);
        assert!(result.is_ok());

        let file = result.unwrap();
        assert_eq!(file.id, "f-7c21");
        assert_eq!(file.file_name, "pan.pdf");
    }

    #[test]
    fn submission_response_deserialization() {
        let json = r#"{
            "applicationId": "APP-10234",
            "status": "received",
            "message": "Application received and queued for review"
        }"#;

        let response: SubmissionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.application_id, "APP-10234");
        assert_eq!(response.status, "received");
        assert!(response.message.is_some());
    }
}

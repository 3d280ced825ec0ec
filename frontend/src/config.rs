//! Application configuration.
//!
//! Centralized configuration for the FilingDesk frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The FilingDesk backend server handling uploads and applications.
pub const API_BASE_URL: &str = "http://localhost:3000";

/// Application name, shown in page titles.
pub const APP_NAME: &str = "FilingDesk";

/// Support contact shown in the header and footer.
pub const SUPPORT_EMAIL: &str = "support@filingdesk.in";

/// Maximum size for a single uploaded document (in bytes).
///
/// 10 MB limit, enforced client-side before any network call.
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// `localStorage` key under which the applicant profile is cached.
pub const PROFILE_STORAGE_KEY: &str = "filingdesk.profile";

/// Simulated payment gateway delay in milliseconds.
pub const PAYMENT_DELAY_MS: u32 = 1200;

//! Route-level pages.
//!
//! The home page is marketing composition; every service page is a
//! linear wizard over the same pattern: applicant details, service
//! details, document uploads, review with simulated payment, success.

mod company_registration;
mod digital_signature;
mod fssai_license;
mod home;
mod labour_compliance;
mod not_found;
mod patent;
mod trademark;

pub use company_registration::*;
pub use digital_signature::*;
pub use fssai_license::*;
pub use home::*;
pub use labour_compliance::*;
pub use not_found::*;
pub use patent::*;
pub use trademark::*;

/// States offered in registration dropdowns.
pub(crate) const STATE_OPTIONS: &[(&str, &str)] = &[
    ("Andhra Pradesh", "Andhra Pradesh"),
    ("Delhi", "Delhi"),
    ("Gujarat", "Gujarat"),
    ("Karnataka", "Karnataka"),
    ("Maharashtra", "Maharashtra"),
    ("Tamil Nadu", "Tamil Nadu"),
    ("Telangana", "Telangana"),
    ("Uttar Pradesh", "Uttar Pradesh"),
    ("West Bengal", "West Bengal"),
];

//! UI Components for the FilingDesk application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Marketing Components
//! - [`ServiceCard`] / [`StepCard`] - Home page cards
//! - [`FaqSection`] - Expandable FAQ accordion
//!
//! # Wizard Components
//! - [`StepIndicator`] / [`WizardNav`] - Step rail and navigation
//! - [`TextField`] / [`SelectField`] - Bound form fields
//! - [`DocumentUploadSlot`] - Per-category document upload
//! - [`ErrorBanner`] / [`FeeTable`] / [`SuccessCard`] - Review and result UI

mod cards;
mod document_upload;
mod faq;
mod fields;
mod footer;
mod header;
mod hero;
mod status;
mod wizard;

pub use cards::*;
pub use document_upload::*;
pub use faq::*;
pub use fields::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use status::*;
pub use wizard::*;

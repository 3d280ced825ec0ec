//! FilingDesk - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the FilingDesk compliance marketplace:
//! company registration, trademarks, patents, labour filings, food
//! licenses and digital signature certificates.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand, navigation)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routed page                                                 │
//! │  ├── HomePage (hero, service catalog, FAQ)                  │
//! │  └── Service wizards (applicant → details → documents →     │
//! │      review & simulated payment → success)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UploadedFile, UserProfile, etc.)
//! - [`components`] - UI components (fields, upload slots, cards, etc.)
//! - [`pages`] - Route-level pages (home + one wizard per service)
//! - [`services`] - Backend communication, payment simulation, profile cache
//! - [`validation`] / [`pricing`] / [`ids`] - Pure helpers behind the wizards

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod pricing;
pub mod ids;
pub mod components;
pub mod services;
pub mod pages;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    SubmissionResponse, UploadedFile,
    // Profile
    UserProfile,
    // Service details
    ApplicantType, FssaiTier, PatentKind,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// Pages
pub use pages::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 FilingDesk - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/services/company-registration" view=CompanyRegistrationPage/>
                    <Route path="/services/trademark" view=TrademarkPage/>
                    <Route path="/services/patent" view=PatentPage/>
                    <Route path="/services/labour-compliance" view=LabourCompliancePage/>
                    <Route path="/services/fssai-license" view=FssaiLicensePage/>
                    <Route path="/services/digital-signature" view=DigitalSignaturePage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

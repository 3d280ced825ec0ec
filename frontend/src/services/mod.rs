//! Backend communication and browser-side services.
//!
//! This module provides services for everything outside component state:
//!
//! # Services
//!
//! - [`api`] - Document upload and application submission over HTTP
//! - [`submissions`] - Per-service payload types and submit calls
//! - [`payment`] - Simulated payment gateway
//! - [`profile`] - Applicant profile cache in `localStorage`

pub mod api;
pub mod payment;
pub mod profile;
pub mod submissions;

pub use api::*;
pub use payment::*;
pub use profile::*;
pub use submissions::*;

//! RUT Validator
//!
//! Validation of Chilean RUT numbers (Rol Único Tributario) for the hostel
//! management application.
//!
//! This library provides:
//! - RUT format and check digit validation
//! - Required-field and RUT-field form checks
//! - Input sanitizing and display helpers
//! - Configuration and the `rut-check` command line

pub mod cli;
pub mod config;
pub mod display;
pub mod form;
pub mod input;
pub mod rut;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use form::{validate_form, FormReport, FormSchema};
pub use input::sanitize_rut_input;
pub use rut::{check_digit, is_valid_rut, CheckDigit, Rut, RutError};
pub use validation::{validate_document, Diagnostic};

//! Form Validation
//!
//! Required-field and RUT-field checks over a declared field list.

pub mod engine;
pub mod schema;

pub use engine::{
    validate_form, validate_form_with_messages, FieldError, FieldIssue, FormReport,
};
pub use schema::{FormSchema, Messages};

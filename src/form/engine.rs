//! Form Validation Engine
//!
//! Checks a submitted form against a [`FormSchema`] before it is accepted.

use std::collections::HashMap;

use super::schema::{FormSchema, Messages};
use crate::rut::{is_valid_rut, Rut, RutError};

/// What is wrong with a field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldIssue {
    /// Missing, empty or whitespace only
    Required,
    /// Non-empty text that is not a valid RUT
    InvalidRut(RutError),
}

impl FieldIssue {
    /// Stable identifier for machine-readable output
    pub fn kind(&self) -> &'static str {
        match self {
            FieldIssue::Required => "required",
            FieldIssue::InvalidRut(_) => "invalid_rut",
        }
    }
}

/// A rejected field with the message to show next to it
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub issue: FieldIssue,
    pub message: String,
}

/// Outcome of validating one submission
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormReport {
    pub errors: Vec<FieldError>,
}

impl FormReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The field to bring into view first
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Validate `submission` against `schema` using the default messages
pub fn validate_form(schema: &FormSchema, submission: &HashMap<String, String>) -> FormReport {
    validate_form_with_messages(schema, &Messages::default(), submission)
}

/// Validate `submission` against `schema`.
///
/// A blank required field is reported once and not checked as a RUT. An
/// empty RUT field that is not required passes.
pub fn validate_form_with_messages(
    schema: &FormSchema,
    messages: &Messages,
    submission: &HashMap<String, String>,
) -> FormReport {
    let mut report = FormReport::new();

    for field in schema.fields() {
        let value = submission.get(field).map(String::as_str).unwrap_or("");

        if schema.is_required(field) && value.trim().is_empty() {
            report.errors.push(FieldError {
                field: field.to_string(),
                issue: FieldIssue::Required,
                message: messages.required.clone(),
            });
            continue;
        }

        if schema.is_rut_field(field) && !value.is_empty() && !is_valid_rut(value) {
            // Rut::parse rejects exactly what is_valid_rut rejects; it supplies the cause
            if let Err(err) = Rut::parse(value) {
                log::debug!("Field '{}' holds an invalid RUT: {}", field, err);
                report.errors.push(FieldError {
                    field: field.to_string(),
                    issue: FieldIssue::InvalidRut(err),
                    message: messages.invalid_rut.clone(),
                });
            }
        }
    }

    report
}

//! Rendering of command results

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};

use crate::form::{FieldError, FieldIssue, FormReport};
use crate::validation::{Diagnostic, Severity};

/// Pretty-print `value` as JSON followed by a newline
pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    format!("line {}: {}: {}", diagnostic.line, severity, diagnostic.message)
}

pub fn format_field_error(error: &FieldError) -> String {
    match &error.issue {
        FieldIssue::Required => format!("{}: {}", error.field, error.message),
        FieldIssue::InvalidRut(cause) => {
            format!("{}: {} ({})", error.field, error.message, cause)
        }
    }
}

pub fn form_report_json(report: &FormReport) -> Value {
    let errors: Vec<Value> = report
        .errors
        .iter()
        .map(|error| {
            let detail = match &error.issue {
                FieldIssue::Required => Value::Null,
                FieldIssue::InvalidRut(cause) => Value::String(cause.to_string()),
            };
            json!({
                "field": error.field,
                "kind": error.issue.kind(),
                "message": error.message,
                "detail": detail,
            })
        })
        .collect();

    json!({ "valid": report.is_valid(), "errors": errors })
}

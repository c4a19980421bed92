//! Validation Engine
//!
//! Line-oriented checking of RUT lists, separated from CLI concerns.

use serde::Serialize;

use crate::rut::Rut;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message for a validation issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
    pub severity: Severity,
}

/// Outcome of validating one line
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Rut(Rut),
    Invalid(crate::rut::RutError),
    /// Blank or `#` comment
    Skipped,
}

/// Result of validating a document or line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Number of lines that held a valid RUT
    pub valid: usize,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
            valid: 0,
        }
    }

    pub fn add_error(&mut self, line: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            message,
            severity: Severity::Error,
        });
    }

    pub fn add_warning(&mut self, line: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            message,
            severity: Severity::Warning,
        });
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Classify a single line of a RUT list
pub fn parse_line(line: &str) -> ParsedLine {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return ParsedLine::Skipped;
    }

    match Rut::parse(trimmed) {
        Ok(rut) => ParsedLine::Rut(rut),
        Err(err) => ParsedLine::Invalid(err),
    }
}

/// Validate a single line of a RUT list
pub fn validate_line(line_num: usize, line: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    match parse_line(line) {
        ParsedLine::Rut(rut) => {
            result.valid += 1;
            let canonical = rut.to_string();
            if canonical != line.trim() {
                result.add_warning(
                    line_num,
                    format!("Write '{}' as '{}'", line.trim(), canonical),
                );
            }
        }
        ParsedLine::Invalid(err) => {
            result.add_error(line_num, format!("Invalid RUT '{}': {}", line.trim(), err));
        }
        ParsedLine::Skipped => {
            // Blank lines and comments are always valid
        }
    }

    result
}

/// Validate an entire document, one RUT per line
pub fn validate_document(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_result = validate_line(line_num + 1, line);
        result.valid += line_result.valid;
        result.diagnostics.extend(line_result.diagnostics);
    }

    log::debug!(
        "Validated document: {} valid, {} errors",
        result.valid,
        result.error_count()
    );

    result
}

//! Validation Engine
//!
//! Clean separation of document validation from parsing and CLI concerns.

pub mod engine;

pub use engine::{parse_line, validate_document, validate_line, Diagnostic, ParsedLine, Severity};

// Re-export common types
pub use engine::ValidationResult;

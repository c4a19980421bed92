//! Form Schema Types
//!
//! Declared field lists and user-facing messages, loadable from TOML.

use serde::Deserialize;

pub const DEFAULT_REQUIRED_MESSAGE: &str = "Este campo es obligatorio";
pub const DEFAULT_INVALID_RUT_MESSAGE: &str = "RUT inválido. Formato: 12345678-9";

/// Which fields of a submission are checked, and how
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormSchema {
    /// Fields that must hold non-blank text
    pub required: Vec<String>,
    /// Fields that must hold a valid RUT when not empty
    pub rut_fields: Vec<String>,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self {
            required: Vec::new(),
            rut_fields: vec!["rut".to_string()],
        }
    }
}

impl FormSchema {
    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|f| f == field)
    }

    pub fn is_rut_field(&self, field: &str) -> bool {
        self.rut_fields.iter().any(|f| f == field)
    }

    /// Every declared field once: required first, then RUT-only fields
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for field in self.required.iter().chain(self.rut_fields.iter()) {
            if !fields.contains(&field.as_str()) {
                fields.push(field);
            }
        }
        fields
    }
}

/// Text shown next to a rejected field
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Messages {
    pub required: String,
    pub invalid_rut: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: DEFAULT_REQUIRED_MESSAGE.to_string(),
            invalid_rut: DEFAULT_INVALID_RUT_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_checks_rut() {
        let schema = FormSchema::default();
        assert!(schema.is_rut_field("rut"));
        assert!(!schema.is_required("rut"));
        assert_eq!(schema.fields(), vec!["rut"]);
    }

    #[test]
    fn test_fields_dedup_and_order() {
        let schema = FormSchema {
            required: vec!["nombre".into(), "rut".into()],
            rut_fields: vec!["rut".into(), "rut_empresa".into()],
        };
        assert_eq!(schema.fields(), vec!["nombre", "rut", "rut_empresa"]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let schema: FormSchema = toml::from_str(r#"required = ["nombre"]"#).expect("parse");
        assert_eq!(schema.required, vec!["nombre".to_string()]);
        assert_eq!(schema.rut_fields, vec!["rut".to_string()]);

        let messages: Messages = toml::from_str(r#"required = "Requerido""#).expect("parse");
        assert_eq!(messages.required, "Requerido");
        assert_eq!(messages.invalid_rut, DEFAULT_INVALID_RUT_MESSAGE);
    }
}

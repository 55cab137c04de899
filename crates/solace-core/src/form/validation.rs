//! Field validation rules

use super::spec::{FieldKind, FieldSpec};
use super::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

/// Whether `value` has the usual `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Message attached to one invalid field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every error found on one step
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

/// Check one field. Required first, then the kind-specific rule.
pub fn validate_field(spec: &FieldSpec, value: Option<&FieldValue>) -> Option<FieldError> {
    let present = match value {
        Some(FieldValue::Text(text)) => !text.trim().is_empty(),
        Some(FieldValue::Flag(checked)) => *checked,
        None => false,
    };

    if !present {
        return spec
            .required
            .then(|| FieldError::new(&spec.name, spec.required_message()));
    }

    let Some(FieldValue::Text(text)) = value else {
        return None;
    };
    let text = text.trim();

    match &spec.kind {
        FieldKind::Email if !is_valid_email(text) => {
            Some(FieldError::new(&spec.name, "Invalid email address"))
        }
        FieldKind::Select(options) if !options.iter().any(|o| o.value == text) => {
            Some(FieldError::new(&spec.name, "Please choose one of the listed options"))
        }
        _ => None,
    }
}

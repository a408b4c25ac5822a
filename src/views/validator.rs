//! Form validation for the ticket submission form
//!
//! Validation is a pure function over the form's field map; it never touches
//! the network and never fails, it only reports which fields are invalid.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::types::TicketPriority;

pub const TITLE_MIN_LEN: usize = 3;
pub const DESCRIPTION_MIN_LEN: usize = 10;

/// Fields of the ticket submission form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Priority,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Description, FormField::Priority];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Priority => "priority",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw form input, keyed by field
pub type FormValues = BTreeMap<FormField, String>;

/// Why a single field is invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Required,
    MinLength { min: usize, actual: usize },
    NotAllowed(String),
}

impl FieldError {
    pub fn message(&self, field: FormField) -> String {
        match self {
            FieldError::Required => format!("{} is required", capitalize(field.name())),
            FieldError::MinLength { min, .. } => format!(
                "{} must be at least {} characters",
                capitalize(field.name()),
                min
            ),
            FieldError::NotAllowed(value) => format!(
                "{} '{}' is not one of: Low, Medium, High, Critical",
                capitalize(field.name()),
                value
            ),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Result of form validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FormField, FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of the fields that failed validation
    pub fn failing_fields(&self) -> BTreeSet<FormField> {
        self.errors.keys().copied().collect()
    }

    pub fn error(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Human-readable messages, one per failing field, in field order
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|(field, error)| error.message(*field))
            .collect()
    }
}

/// Validator for the ticket submission form
pub struct TicketFormValidator;

impl TicketFormValidator {
    /// Validate the whole form
    pub fn validate(values: &FormValues) -> ValidationResult {
        let mut errors = BTreeMap::new();
        for field in FormField::ALL {
            let value = values.get(&field).map(String::as_str).unwrap_or("");
            if let Some(error) = Self::validate_field(field, value) {
                errors.insert(field, error);
            }
        }
        ValidationResult { errors }
    }

    /// Validate a single field value
    pub fn validate_field(field: FormField, value: &str) -> Option<FieldError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Some(FieldError::Required);
        }

        // Lengths are measured on the value as entered
        match field {
            FormField::Title => min_length(value, TITLE_MIN_LEN),
            FormField::Description => min_length(value, DESCRIPTION_MIN_LEN),
            FormField::Priority => match trimmed.parse::<TicketPriority>() {
                Ok(_) => None,
                Err(_) => Some(FieldError::NotAllowed(trimmed.to_string())),
            },
        }
    }

    pub fn is_title_valid(title: &str) -> bool {
        Self::validate_field(FormField::Title, title).is_none()
    }

    pub fn is_description_valid(description: &str) -> bool {
        Self::validate_field(FormField::Description, description).is_none()
    }
}

fn min_length(value: &str, min: usize) -> Option<FieldError> {
    let actual = value.chars().count();
    if actual < min {
        Some(FieldError::MinLength { min, actual })
    } else {
        None
    }
}

//! Required-field validation.
//!
//! A required field is invalid when its value is blank, or when it
//! is a checkbox that is not checked. Validation marks every required field
//! and shows or hides its paired error message. Fields without an error
//! message still count toward the result.

use super::{is_blank, FieldMarker, Form, FormField};

/// Result of validating a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Error ids (`<id or name>-error`) of the invalid fields, in form order.
    pub invalid: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Element id of the error message paired with `field`.
///
/// Uses the field's id when present and non-empty, otherwise its name.
pub fn error_id(field: &FormField) -> String {
    let key = field
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .or(field.name.as_deref())
        .unwrap_or("");
    format!("{}-error", key)
}

fn is_field_valid(field: &FormField) -> bool {
    !is_blank(&field.value) && !(field.is_checkbox() && !field.checked)
}

/// Validate every required field and update markers and error messages.
pub fn validate_form_report(form: &mut Form) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in form.fields.iter_mut().filter(|f| f.required) {
        let id = error_id(field);
        let valid = is_field_valid(field);

        field.marker = if valid {
            FieldMarker::Valid
        } else {
            FieldMarker::Invalid
        };
        if let Some(message) = form.errors.get_mut(&id) {
            message.visible = !valid;
        }
        if !valid {
            report.invalid.push(id);
        }
    }

    report
}

/// Validate a form; true iff every required field is valid.
pub fn validate_form(form: &mut Form) -> bool {
    validate_form_report(form).is_valid()
}

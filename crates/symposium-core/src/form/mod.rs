//! Form model, validation and serialization.
//!
//! A [`Form`] is the data a page's `<form>` element carries: its input,
//! textarea and select controls, plus the inline error messages paired with
//! them by id (`<field-id>-error`). Validation writes visual state back into
//! the form; serialization reads it into a [`FormSubmission`].

mod submission;
mod validator;

pub use submission::FormSubmission;
pub use validator::{error_id, validate_form, validate_form_report, ValidationReport};

use std::collections::BTreeMap;

/// True when `value` is empty after trimming whitespace and byte order marks.
pub fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

/// The kind of control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `<input type="...">`; the type is lowercased (`text`, `email`, `checkbox`, ...).
    Input(String),
    TextArea,
    Select,
}

/// Border state written by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMarker {
    /// Never validated.
    #[default]
    Unmarked,
    Valid,
    Invalid,
}

/// A single form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub kind: FieldKind,
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: String,
    /// Checked state; only meaningful for checkboxes and radios.
    pub checked: bool,
    pub required: bool,
    pub marker: FieldMarker,
    /// Option values of a select, in display order.
    pub options: Vec<String>,
}

impl FormField {
    fn new(kind: FieldKind, name: &str) -> Self {
        Self {
            kind,
            id: Some(name.to_string()),
            name: Some(name.to_string()),
            value: String::new(),
            checked: false,
            required: false,
            marker: FieldMarker::Unmarked,
            options: Vec::new(),
        }
    }

    /// An `<input>` whose id and name are both `name`.
    pub fn input(input_type: &str, name: &str) -> Self {
        Self::new(FieldKind::Input(input_type.to_ascii_lowercase()), name)
    }

    pub fn text(name: &str) -> Self {
        Self::input("text", name)
    }

    pub fn email(name: &str) -> Self {
        Self::input("email", name)
    }

    /// A checkbox with the browser's default value `on`.
    pub fn checkbox(name: &str) -> Self {
        let mut field = Self::input("checkbox", name);
        field.value = "on".to_string();
        field
    }

    pub fn textarea(name: &str) -> Self {
        Self::new(FieldKind::TextArea, name)
    }

    pub fn select(name: &str) -> Self {
        Self::new(FieldKind::Select, name)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_id(mut self, id: Option<&str>) -> Self {
        self.id = id.map(str::to_string);
        self
    }

    pub fn with_name(mut self, name: Option<&str>) -> Self {
        self.name = name.map(str::to_string);
        self
    }

    pub fn with_options<I, T>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(&self.kind, FieldKind::Input(t) if t == "checkbox")
    }

    /// Checkboxes and radios only submit when checked.
    pub fn is_checkable(&self) -> bool {
        matches!(&self.kind, FieldKind::Input(t) if t == "checkbox" || t == "radio")
    }
}

/// An inline error message element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub text: String,
    pub visible: bool,
}

/// A form and the error messages that belong to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<FormField>,
    /// Error message elements by element id.
    pub errors: BTreeMap<String, ErrorMessage>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Attach a hidden error message with element id `id`.
    pub fn with_error(mut self, id: &str, text: &str) -> Self {
        self.errors.insert(
            id.to_string(),
            ErrorMessage {
                text: text.to_string(),
                visible: false,
            },
        );
        self
    }

    /// First field whose name is `name`.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields
            .iter()
            .find(|f| f.name.as_deref() == Some(name))
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields
            .iter_mut()
            .find(|f| f.name.as_deref() == Some(name))
    }

    /// Set the value of the named field. Returns false if there is no such field.
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Set the checked state of the named field. Returns false if there is no such field.
    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Whether the error message with element id `id` is shown.
    pub fn error_visible(&self, id: &str) -> bool {
        self.errors.get(id).is_some_and(|e| e.visible)
    }

    /// Ids of the error messages currently shown.
    pub fn visible_errors(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|(_, e)| e.visible)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Read the form into a submission.
    pub fn to_submission(&self) -> FormSubmission {
        FormSubmission::from_form(self)
    }
}

//! Form serialization.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Form;

/// Flat field-name to value mapping read from a form at submit time.
///
/// Entries keep first-insertion order. A repeated name keeps its position
/// and takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    entries: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the successful controls of `form`.
    ///
    /// Unnamed fields and unchecked checkboxes/radios are skipped.
    pub fn from_form(form: &Form) -> Self {
        let mut submission = Self::new();
        for field in &form.fields {
            let Some(name) = field.name.as_deref().filter(|n| !n.is_empty()) else {
                continue;
            };
            if field.is_checkable() && !field.checked {
                continue;
            }
            submission.insert(name, &field.value);
        }
        submission
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Two-space indented JSON object.
    pub fn to_pretty_json(&self) -> String {
        // Serializing string pairs into a String buffer cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Serialize for FormSubmission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

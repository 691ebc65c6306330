use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Transient form state for one scenario: camelCase field id → raw value.
///
/// A record only lives for the duration of a form-filling session. It does
/// not know which fields belong to which scenario and does not enforce the
/// sentinel relationship between a controlling field and its details field;
/// that is decided once, when a scenario reads the record into its typed
/// model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormRecord(BTreeMap<String, String>);

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field to a new value, replacing whatever was there.
    ///
    /// Changing a controlling field never touches its details field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// The trimmed value of a field, or `None` when it is absent or blank.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// The value exactly as entered, including surrounding whitespace.
    pub fn raw(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_blank(&self, field: &str) -> bool {
        self.get(field).is_none()
    }

    /// Whether `field` currently holds exactly `sentinel`.
    pub fn equals(&self, field: &str, sentinel: &str) -> bool {
        self.get(field) == Some(sentinel)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a record from a JSON object. Strings are kept verbatim, numbers
    /// and booleans are stringified, `null` leaves the field unset.
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        let serde_json::Value::Object(map) = value else {
            return Err(CoreError::NotAnObject);
        };

        let mut record = Self::new();
        for (key, value) in map {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => record.set(key, s),
                serde_json::Value::Number(n) => record.set(key, n.to_string()),
                serde_json::Value::Bool(b) => record.set(key, b.to_string()),
                _ => return Err(CoreError::InvalidFieldValue(key)),
            }
        }
        Ok(record)
    }

    /// Parse and apply a `key=value` assignment. An empty value clears the
    /// field.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), CoreError> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| CoreError::MalformedAssignment(assignment.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(CoreError::MalformedAssignment(assignment.to_string()));
        }
        if value.is_empty() {
            self.clear(key);
        } else {
            self.set(key, value);
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for FormRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

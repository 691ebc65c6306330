use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use super::answer::{capitalize_first, NOT_SPECIFIED};

/// One line of the label/value listing shown on the review screen and
/// written into exported documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReviewEntry {
    pub field_id: String,
    pub label: String,
    /// Raw value, or [`NOT_SPECIFIED`] when the field was empty.
    pub value: String,
}

impl ReviewEntry {
    pub fn new(field_id: &str, label: &str, value: Option<&str>) -> Self {
        Self {
            field_id: field_id.to_string(),
            label: label.to_string(),
            value: value.unwrap_or(NOT_SPECIFIED).to_string(),
        }
    }

    pub fn is_specified(&self) -> bool {
        self.value != NOT_SPECIFIED
    }

    /// Value as displayed: first letter capitalized, fallback left as is.
    pub fn display_value(&self) -> String {
        if self.is_specified() {
            capitalize_first(&self.value)
        } else {
            self.value.clone()
        }
    }
}

/// A validation message attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{field_id}: {message}")]
pub struct FieldError {
    pub field_id: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field_id: &str, message: impl Into<String>) -> Self {
        Self {
            field_id: field_id.to_string(),
            message: message.into(),
        }
    }
}

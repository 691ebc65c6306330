use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::record::FormRecord;

/// Literal shown wherever a field has no value.
pub const NOT_SPECIFIED: &str = "not specified";

/// Controlling values that unlock a dependent details field.
pub mod sentinel {
    pub const YES: &str = "yes";
    pub const OTHER: &str = "other";
    pub const POSITIVE: &str = "positive";
    pub const WITH: &str = "with";
}

/// A controlling answer paired with the details field it may unlock.
///
/// The sentinel check happens once, in [`Gated::read`]. A `Closed` answer
/// carries no details even if the record still holds a stale details value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum Gated {
    /// The controlling field is empty.
    Unanswered,
    /// The controlling field holds a value other than the sentinel.
    Closed { value: String },
    /// The controlling field equals the sentinel.
    Open {
        value: String,
        details: Option<String>,
    },
}

impl Gated {
    pub fn read(record: &FormRecord, controller: &str, sentinel: &str, details_field: &str) -> Self {
        match record.get(controller) {
            None => Gated::Unanswered,
            Some(value) if value == sentinel => Gated::Open {
                value: value.to_string(),
                details: record.get(details_field).map(str::to_string),
            },
            Some(value) => Gated::Closed {
                value: value.to_string(),
            },
        }
    }

    pub fn details(&self) -> Option<&str> {
        match self {
            Gated::Open { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Gated::Open { .. })
    }

    /// `other (custom brace)` for an open answer, the bare value otherwise.
    pub fn with_parenthesized_details(&self) -> String {
        match self {
            Gated::Unanswered => NOT_SPECIFIED.to_string(),
            Gated::Closed { value } => value.clone(),
            Gated::Open { value, details } => {
                format!("{value} ({})", details.as_deref().unwrap_or(NOT_SPECIFIED))
            }
        }
    }

    /// `Yes - details` for an open yes/no answer, `No` for a closed one.
    pub fn as_yes_no(&self) -> String {
        match self {
            Gated::Unanswered => NOT_SPECIFIED.to_string(),
            Gated::Closed { value } => yes_no(Some(value)),
            Gated::Open { value, details } => match details {
                Some(details) => format!("{} - {details}", yes_no(Some(value))),
                None => yes_no(Some(value)),
            },
        }
    }
}

/// The value itself, or the fallback literal when empty.
pub fn or_not_specified(value: Option<&str>) -> String {
    value.unwrap_or(NOT_SPECIFIED).to_string()
}

/// Capitalized `Yes`/`No`; any other value passes through unchanged.
pub fn yes_no(value: Option<&str>) -> String {
    match value {
        Some("yes") => "Yes".to_string(),
        Some("no") => "No".to_string(),
        other => or_not_specified(other),
    }
}

pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

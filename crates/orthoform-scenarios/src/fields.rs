use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which joint a scenario (or a record) is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Joint {
    Knee,
    Hip,
}

impl Joint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Joint::Knee => "knee",
            Joint::Hip => "hip",
        }
    }

    /// Abbreviation for total arthroplasty of this joint.
    pub fn arthroplasty(&self) -> &'static str {
        match self {
            Joint::Knee => "TKA",
            Joint::Hip => "THA",
        }
    }
}

/// Defines the valid range for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// One entry of a controlled choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// The kind of control a field is rendered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    LongText,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    Choice { options: Vec<ChoiceOption> },
    /// Numeric score entered as text.
    Score { range: ScoreRange },
}

/// Visibility rule: the field is shown only while `controller` holds
/// `sentinel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reveal {
    pub controller: String,
    pub sentinel: String,
}

/// A single named field of a scenario form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub reveal: Option<Reveal>,
}

impl FieldSpec {
    fn new(id: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            reveal: None,
        }
    }

    pub fn text(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Text)
    }

    pub fn long_text(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::LongText)
    }

    pub fn date(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldKind::Date)
    }

    pub fn score(id: &str, label: &str, range: ScoreRange) -> Self {
        Self::new(id, label, FieldKind::Score { range })
    }

    /// `options` are `(value, label)` pairs in display order.
    pub fn choice(id: &str, label: &str, options: &[(&str, &str)]) -> Self {
        let options = options
            .iter()
            .map(|(value, label)| ChoiceOption {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect();
        Self::new(id, label, FieldKind::Choice { options })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn revealed_by(mut self, controller: &str, sentinel: &str) -> Self {
        self.reveal = Some(Reveal {
            controller: controller.to_string(),
            sentinel: sentinel.to_string(),
        });
        self
    }

    /// Whether `value` is one of this field's choice values. Non-choice
    /// fields accept anything.
    pub fn accepts_choice(&self, value: &str) -> bool {
        match &self.kind {
            FieldKind::Choice { options } => options.iter().any(|o| o.value == value),
            _ => true,
        }
    }
}

//! orthoform-scenarios
//!
//! Clinical follow-up scenario definitions. Pure data — no rendering.
//! Each scenario declares its fields, the sentinel rules that reveal
//! dependent details fields, its narrative template, and how a raw form
//! record is read into its typed model.

pub mod error;
pub mod fields;
pub mod form;
pub mod scenarios;

use error::ScenarioError;
use fields::{FieldKind, FieldSpec};
use orthoform_core::models::record::FormRecord;
use orthoform_core::models::review::{FieldError, ReviewEntry};

/// Trait implemented by each clinical visit type.
pub trait Scenario: Send + Sync {
    /// Unique identifier (e.g., "native_knee_follow_up", "tka_post_op").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "TKA Post-operative Review").
    fn name(&self) -> &str;

    /// Stem of the exported file name; exports are `<stem>-report.<ext>`.
    fn file_stem(&self) -> &str;

    /// The fields of this scenario, in template order.
    fn fields(&self) -> &[FieldSpec];

    /// Tera template producing the narrative paragraph.
    fn narrative_template(&self) -> &str;

    /// Read the record into this scenario's typed model and project it into
    /// the preformatted strings the narrative template interpolates.
    fn narrative_context(&self, record: &FormRecord) -> serde_json::Value;

    fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields().iter().find(|f| f.id == id)
    }

    /// A field is visible unless it has a reveal rule whose controller does
    /// not currently hold the sentinel.
    fn is_visible(&self, spec: &FieldSpec, record: &FormRecord) -> bool {
        spec.reveal
            .as_ref()
            .is_none_or(|r| record.equals(&r.controller, &r.sentinel))
    }

    fn visible_fields(&self, record: &FormRecord) -> Vec<&FieldSpec> {
        self.fields()
            .iter()
            .filter(|f| self.is_visible(f, record))
            .collect()
    }

    /// Label/value listing of every visible field, in template order.
    fn review_entries(&self, record: &FormRecord) -> Vec<ReviewEntry> {
        self.visible_fields(record)
            .into_iter()
            .map(|f| ReviewEntry::new(&f.id, &f.label, record.get(&f.id)))
            .collect()
    }

    /// Check visible fields: required values present, choices within their
    /// options, dates parseable, scores within range. Hidden fields are
    /// skipped.
    fn validate(&self, record: &FormRecord) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for spec in self.visible_fields(record) {
            let Some(value) = record.get(&spec.id) else {
                if spec.required {
                    errors.push(FieldError::new(
                        &spec.id,
                        format!("{} is required", spec.label),
                    ));
                }
                continue;
            };

            match &spec.kind {
                FieldKind::Choice { options } => {
                    if !spec.accepts_choice(value) {
                        let allowed: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
                        errors.push(FieldError::new(
                            &spec.id,
                            format!(
                                "{}: '{}' is not one of {}",
                                spec.label,
                                value,
                                allowed.join(", ")
                            ),
                        ));
                    }
                }
                FieldKind::Date => {
                    if value.parse::<jiff::civil::Date>().is_err() {
                        errors.push(FieldError::new(
                            &spec.id,
                            format!("{}: '{}' is not a date (YYYY-MM-DD)", spec.label, value),
                        ));
                    }
                }
                FieldKind::Score { range } => match value.parse::<f64>() {
                    Ok(score) if range.contains(score) => {}
                    _ => errors.push(FieldError::new(
                        &spec.id,
                        format!(
                            "{}: {} is outside range [{}, {}]",
                            spec.label, value, range.min, range.max
                        ),
                    )),
                },
                FieldKind::Text | FieldKind::LongText => {}
            }
        }
        errors
    }
}

/// Return all registered scenarios.
pub fn all_scenarios() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(scenarios::native_knee::NativeKnee),
        Box::new(scenarios::post_op::PostOp::TKA),
        Box::new(scenarios::post_op::PostOp::THA),
        Box::new(scenarios::one_year::OneYear::TKA),
        Box::new(scenarios::one_year::OneYear::THA),
        Box::new(scenarios::unplanned_return::UnplannedReturn),
        Box::new(scenarios::pre_op::PreOp),
    ]
}

/// Look up a scenario by ID.
pub fn get_scenario(id: &str) -> Option<Box<dyn Scenario>> {
    all_scenarios().into_iter().find(|s| s.id() == id)
}

/// Look up a scenario by ID, failing with the list of known IDs.
pub fn require_scenario(id: &str) -> Result<Box<dyn Scenario>, ScenarioError> {
    get_scenario(id).ok_or_else(|| ScenarioError::UnknownScenario {
        id: id.to_string(),
        known: all_scenarios()
            .iter()
            .map(|s| s.id().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

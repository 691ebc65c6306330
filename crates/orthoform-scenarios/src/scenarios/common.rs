use orthoform_core::models::answer::{sentinel, Gated, NOT_SPECIFIED};
use orthoform_core::models::record::FormRecord;

use crate::fields::{FieldSpec, ScoreRange};

pub(crate) const SIDE_OPTIONS: &[(&str, &str)] = &[
    ("left", "Left"),
    ("right", "Right"),
    ("bilateral", "Bilateral"),
];

pub(crate) const JOINT_OPTIONS: &[(&str, &str)] = &[("knee", "Knee"), ("hip", "Hip")];

pub(crate) const YES_NO_OPTIONS: &[(&str, &str)] = &[("yes", "Yes"), ("no", "No")];

pub(crate) const PAIN_OPTIONS: &[(&str, &str)] = &[
    ("none", "None"),
    ("mild", "Mild"),
    ("moderate", "Moderate"),
    ("severe", "Severe"),
];

pub(crate) const MOBILITY_OPTIONS: &[(&str, &str)] = &[
    ("independent", "Independent"),
    ("with", "With walking aid"),
];

/// Oxford Knee / Hip Score, 12 items scored 0–4.
pub(crate) const OXFORD_RANGE: ScoreRange = ScoreRange {
    min: 0.0,
    max: 48.0,
    step: Some(1.0),
};

pub(crate) fn side() -> FieldSpec {
    FieldSpec::choice("side", "Side", SIDE_OPTIONS).required()
}

pub(crate) fn surgery_date() -> FieldSpec {
    FieldSpec::date("surgeryDate", "Date of surgery").required()
}

pub(crate) fn mobility() -> [FieldSpec; 2] {
    [
        FieldSpec::choice("mobility", "Mobility", MOBILITY_OPTIONS),
        FieldSpec::text("mobilityAid", "Walking aid").revealed_by("mobility", sentinel::WITH),
    ]
}

pub(crate) fn questions() -> [FieldSpec; 2] {
    [
        FieldSpec::choice("hasQuestions", "Questions or concerns", YES_NO_OPTIONS).required(),
        FieldSpec::long_text("questionsDetails", "Question details")
            .revealed_by("hasQuestions", sentinel::YES),
    ]
}

pub(crate) fn read_questions(record: &FormRecord) -> Gated {
    Gated::read(record, "hasQuestions", sentinel::YES, "questionsDetails")
}

pub(crate) fn read_mobility(record: &FormRecord) -> Gated {
    Gated::read(record, "mobility", sentinel::WITH, "mobilityAid")
}

/// `independent`, or `with walking aid (frame)` when an aid is used.
pub(crate) fn mobility_phrase(mobility: &Gated) -> String {
    match mobility {
        Gated::Unanswered => NOT_SPECIFIED.to_string(),
        Gated::Closed { value } => value.clone(),
        Gated::Open { details, .. } => format!(
            "with walking aid ({})",
            details.as_deref().unwrap_or(NOT_SPECIFIED)
        ),
    }
}

pub(crate) fn owned(record: &FormRecord, field: &str) -> Option<String> {
    record.get(field).map(str::to_string)
}

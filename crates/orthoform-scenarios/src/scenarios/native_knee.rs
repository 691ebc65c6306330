use serde::{Deserialize, Serialize};
use serde_json::json;

use orthoform_core::models::answer::{or_not_specified, sentinel, Gated};
use orthoform_core::models::record::FormRecord;

use super::common::{self, owned, SIDE_OPTIONS};
use crate::fields::FieldSpec;
use crate::Scenario;

const NARRATIVE: &str = "Review of the {{ knee_side }} native knee. \
Clinic history: {{ clinic_history }}. \
Treatment to date consisted of {{ treatment_plan }}. \
The symptoms are {{ symptoms_status }}. \
Changes in history since the last visit: {{ history_changes }}. \
Treatment under consideration: {{ treatment_consideration }}. \
Questions/concerns? {{ questions }}";

/// Native (non-operated) knee follow-up in clinic.
pub struct NativeKnee;

/// A native knee follow-up record, read once from the form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeKneeFollowUp {
    pub knee_side: Option<String>,
    pub clinic_history: Option<String>,
    pub treatment_plan: Gated,
    pub symptoms_status: Option<String>,
    pub history_changes: Option<String>,
    pub treatment_consideration: Option<String>,
    pub questions: Gated,
}

impl NativeKneeFollowUp {
    pub fn from_record(record: &FormRecord) -> Self {
        Self {
            knee_side: owned(record, "kneeSide"),
            clinic_history: owned(record, "clinicHistory"),
            treatment_plan: Gated::read(
                record,
                "treatmentPlan",
                sentinel::OTHER,
                "treatmentPlanOther",
            ),
            symptoms_status: owned(record, "symptomsStatus"),
            history_changes: owned(record, "historyChanges"),
            treatment_consideration: owned(record, "treatmentConsideration"),
            questions: common::read_questions(record),
        }
    }

    pub fn narrative_context(&self) -> serde_json::Value {
        json!({
            "knee_side": or_not_specified(self.knee_side.as_deref()),
            "clinic_history": or_not_specified(self.clinic_history.as_deref()),
            "treatment_plan": self.treatment_plan.with_parenthesized_details(),
            "symptoms_status": or_not_specified(self.symptoms_status.as_deref()),
            "history_changes": or_not_specified(self.history_changes.as_deref()),
            "treatment_consideration": or_not_specified(self.treatment_consideration.as_deref()),
            "questions": self.questions.as_yes_no(),
        })
    }
}

impl Scenario for NativeKnee {
    fn id(&self) -> &str {
        "native_knee_follow_up"
    }

    fn name(&self) -> &str {
        "Native Knee Follow-up"
    }

    fn file_stem(&self) -> &str {
        "native-knee-follow-up"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let mut fields = vec![
                FieldSpec::choice("kneeSide", "Knee side", SIDE_OPTIONS).required(),
                FieldSpec::long_text("clinicHistory", "Clinic history"),
                FieldSpec::choice(
                    "treatmentPlan",
                    "Treatment plan",
                    &[
                        ("physiotherapy", "Physiotherapy"),
                        ("injection", "Injection"),
                        ("bracing", "Bracing"),
                        ("analgesia", "Analgesia"),
                        ("other", "Other"),
                    ],
                ),
                FieldSpec::text("treatmentPlanOther", "Other treatment")
                    .revealed_by("treatmentPlan", sentinel::OTHER),
                FieldSpec::choice(
                    "symptomsStatus",
                    "Symptoms",
                    &[
                        ("improving", "Improving"),
                        ("unchanged", "Unchanged"),
                        ("worsening", "Worsening"),
                    ],
                ),
                FieldSpec::long_text("historyChanges", "Changes in history"),
                FieldSpec::choice(
                    "treatmentConsideration",
                    "Treatment under consideration",
                    &[
                        ("continuing", "Continue current treatment"),
                        ("injection", "Injection"),
                        ("surgical referral", "Surgical referral"),
                        ("discharge", "Discharge"),
                    ],
                ),
            ];
            fields.extend(common::questions());
            fields
        });
        &FIELDS
    }

    fn narrative_template(&self) -> &str {
        NARRATIVE
    }

    fn narrative_context(&self, record: &FormRecord) -> serde_json::Value {
        NativeKneeFollowUp::from_record(record).narrative_context()
    }
}

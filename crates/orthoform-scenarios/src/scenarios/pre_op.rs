use serde::{Deserialize, Serialize};
use serde_json::json;

use orthoform_core::models::answer::{or_not_specified, sentinel, yes_no, Gated};
use orthoform_core::models::record::FormRecord;

use super::common::{self, owned, JOINT_OPTIONS, YES_NO_OPTIONS};
use crate::fields::FieldSpec;
use crate::Scenario;

const NARRATIVE: &str = "Pre-operative assessment of the {{ side }} {{ joint }} \
ahead of {{ planned_procedure }}. \
Comorbidities: {{ comorbidities }}. \
Mobility: {{ mobility }}. \
Anticoagulation? {{ anticoagulation }}. \
Allergies? {{ allergies }}. \
Consent discussed? {{ consent_discussed }}. \
Questions/concerns? {{ questions }}";

/// Pre-operative assessment before knee or hip arthroplasty.
pub struct PreOp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreOpAssessment {
    pub joint: Option<String>,
    pub side: Option<String>,
    pub planned_procedure: Option<String>,
    pub comorbidities: Option<String>,
    pub mobility: Gated,
    pub anticoagulation: Gated,
    pub allergies: Gated,
    pub consent_discussed: Option<String>,
    pub questions: Gated,
}

impl PreOpAssessment {
    pub fn from_record(record: &FormRecord) -> Self {
        Self {
            joint: owned(record, "joint"),
            side: owned(record, "side"),
            planned_procedure: owned(record, "plannedProcedure"),
            comorbidities: owned(record, "comorbidities"),
            mobility: common::read_mobility(record),
            anticoagulation: Gated::read(record, "anticoagulation", sentinel::YES, "anticoagulant"),
            allergies: Gated::read(record, "allergies", sentinel::YES, "allergyDetails"),
            consent_discussed: owned(record, "consentDiscussed"),
            questions: common::read_questions(record),
        }
    }

    pub fn narrative_context(&self) -> serde_json::Value {
        json!({
            "joint": or_not_specified(self.joint.as_deref()),
            "side": or_not_specified(self.side.as_deref()),
            "planned_procedure": or_not_specified(self.planned_procedure.as_deref()),
            "comorbidities": or_not_specified(self.comorbidities.as_deref()),
            "mobility": common::mobility_phrase(&self.mobility),
            "anticoagulation": self.anticoagulation.as_yes_no(),
            "allergies": self.allergies.as_yes_no(),
            "consent_discussed": yes_no(self.consent_discussed.as_deref()),
            "questions": self.questions.as_yes_no(),
        })
    }
}

impl Scenario for PreOp {
    fn id(&self) -> &str {
        "pre_op_assessment"
    }

    fn name(&self) -> &str {
        "Pre-operative Assessment"
    }

    fn file_stem(&self) -> &str {
        "pre-op-assessment"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let mut fields = vec![
                FieldSpec::choice("joint", "Joint", JOINT_OPTIONS).required(),
                common::side(),
                FieldSpec::text("plannedProcedure", "Planned procedure"),
                FieldSpec::long_text("comorbidities", "Comorbidities"),
            ];
            fields.extend(common::mobility());
            fields.extend([
                FieldSpec::choice("anticoagulation", "Anticoagulation", YES_NO_OPTIONS),
                FieldSpec::text("anticoagulant", "Anticoagulant")
                    .revealed_by("anticoagulation", sentinel::YES),
                FieldSpec::choice("allergies", "Allergies", YES_NO_OPTIONS),
                FieldSpec::text("allergyDetails", "Allergy details")
                    .revealed_by("allergies", sentinel::YES),
                FieldSpec::choice("consentDiscussed", "Consent discussed", YES_NO_OPTIONS),
            ]);
            fields.extend(common::questions());
            fields
        });
        &FIELDS
    }

    fn narrative_template(&self) -> &str {
        NARRATIVE
    }

    fn narrative_context(&self, record: &FormRecord) -> serde_json::Value {
        PreOpAssessment::from_record(record).narrative_context()
    }
}

use serde::{Deserialize, Serialize};
use serde_json::json;

use orthoform_core::models::answer::{or_not_specified, sentinel, Gated};
use orthoform_core::models::record::FormRecord;

use super::common::{self, owned, JOINT_OPTIONS};
use crate::fields::FieldSpec;
use crate::Scenario;

const NARRATIVE: &str = "Unplanned return following {{ side }} {{ joint }} arthroplasty \
performed on {{ surgery_date }}. \
Presenting complaint: {{ presenting_complaint }}. \
Onset: {{ onset }}. \
Wound cultures: {{ wound_cultures }}. \
Investigations: {{ investigations }}. \
Management plan: {{ management_plan }}. \
Questions/concerns? {{ questions }}";

/// Unplanned return to clinic or hospital after arthroplasty.
pub struct UnplannedReturn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnplannedReturnVisit {
    pub joint: Option<String>,
    pub side: Option<String>,
    pub surgery_date: Option<String>,
    pub presenting_complaint: Option<String>,
    pub onset: Option<String>,
    pub wound_cultures: Gated,
    pub investigations: Option<String>,
    pub management_plan: Gated,
    pub questions: Gated,
}

impl UnplannedReturnVisit {
    pub fn from_record(record: &FormRecord) -> Self {
        Self {
            joint: owned(record, "joint"),
            side: owned(record, "side"),
            surgery_date: owned(record, "surgeryDate"),
            presenting_complaint: owned(record, "presentingComplaint"),
            onset: owned(record, "onset"),
            wound_cultures: Gated::read(
                record,
                "woundCultures",
                sentinel::POSITIVE,
                "cultureOrganism",
            ),
            investigations: owned(record, "investigations"),
            management_plan: Gated::read(
                record,
                "managementPlan",
                sentinel::OTHER,
                "managementOther",
            ),
            questions: common::read_questions(record),
        }
    }

    pub fn narrative_context(&self) -> serde_json::Value {
        json!({
            "joint": or_not_specified(self.joint.as_deref()),
            "side": or_not_specified(self.side.as_deref()),
            "surgery_date": or_not_specified(self.surgery_date.as_deref()),
            "presenting_complaint": or_not_specified(self.presenting_complaint.as_deref()),
            "onset": or_not_specified(self.onset.as_deref()),
            "wound_cultures": self.wound_cultures.with_parenthesized_details(),
            "investigations": or_not_specified(self.investigations.as_deref()),
            "management_plan": self.management_plan.with_parenthesized_details(),
            "questions": self.questions.as_yes_no(),
        })
    }
}

impl Scenario for UnplannedReturn {
    fn id(&self) -> &str {
        "unplanned_return"
    }

    fn name(&self) -> &str {
        "Unplanned Return"
    }

    fn file_stem(&self) -> &str {
        "unplanned-return"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let mut fields = vec![
                FieldSpec::choice("joint", "Joint", JOINT_OPTIONS).required(),
                common::side(),
                common::surgery_date(),
                FieldSpec::long_text("presentingComplaint", "Presenting complaint"),
                FieldSpec::choice(
                    "onset",
                    "Onset",
                    &[("acute", "Acute"), ("gradual", "Gradual")],
                ),
                FieldSpec::choice(
                    "woundCultures",
                    "Wound cultures",
                    &[
                        ("positive", "Positive"),
                        ("negative", "Negative"),
                        ("not taken", "Not taken"),
                    ],
                ),
                FieldSpec::text("cultureOrganism", "Organism")
                    .revealed_by("woundCultures", sentinel::POSITIVE),
                FieldSpec::long_text("investigations", "Investigations"),
                FieldSpec::choice(
                    "managementPlan",
                    "Management plan",
                    &[
                        ("conservative", "Conservative"),
                        ("readmission", "Readmission"),
                        ("return to theatre", "Return to theatre"),
                        ("other", "Other"),
                    ],
                ),
                FieldSpec::text("managementOther", "Other management")
                    .revealed_by("managementPlan", sentinel::OTHER),
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
        UnplannedReturnVisit::from_record(record).narrative_context()
    }
}

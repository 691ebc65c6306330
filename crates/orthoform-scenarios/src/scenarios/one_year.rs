use serde::{Deserialize, Serialize};
use serde_json::json;

use orthoform_core::models::answer::{or_not_specified, sentinel, Gated};
use orthoform_core::models::record::FormRecord;

use super::common::{self, owned, OXFORD_RANGE, PAIN_OPTIONS};
use crate::fields::{FieldSpec, Joint};
use crate::Scenario;

const NARRATIVE: &str = "One-year review following {{ side }} total {{ joint }} arthroplasty ({{ procedure }}) \
performed on {{ surgery_date }}. \
Satisfaction with the outcome: {{ satisfaction }}. \
Pain is {{ pain_level }}. \
{{ score_name }}: {{ oxford_score }}. \
Function: {{ function_notes }}. \
X-ray findings: {{ xray_findings }}. \
Plan: {{ follow_up_plan }}. \
Questions/concerns? {{ questions }}";

/// One-year follow-up after total knee or hip arthroplasty.
pub struct OneYear {
    pub joint: Joint,
}

impl OneYear {
    pub const TKA: OneYear = OneYear { joint: Joint::Knee };
    pub const THA: OneYear = OneYear { joint: Joint::Hip };
}

fn score_name(joint: Joint) -> &'static str {
    match joint {
        Joint::Knee => "Oxford Knee Score",
        Joint::Hip => "Oxford Hip Score",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneYearReview {
    pub joint: Joint,
    pub side: Option<String>,
    pub surgery_date: Option<String>,
    pub satisfaction: Option<String>,
    pub pain_level: Option<String>,
    pub oxford_score: Option<String>,
    pub function_notes: Option<String>,
    pub xray_findings: Gated,
    pub follow_up_plan: Option<String>,
    pub questions: Gated,
}

impl OneYearReview {
    pub fn from_record(joint: Joint, record: &FormRecord) -> Self {
        Self {
            joint,
            side: owned(record, "side"),
            surgery_date: owned(record, "surgeryDate"),
            satisfaction: owned(record, "satisfaction"),
            pain_level: owned(record, "painLevel"),
            oxford_score: owned(record, "oxfordScore"),
            function_notes: owned(record, "functionNotes"),
            xray_findings: Gated::read(record, "xrayFindings", sentinel::OTHER, "xrayOther"),
            follow_up_plan: owned(record, "followUpPlan"),
            questions: common::read_questions(record),
        }
    }

    pub fn narrative_context(&self) -> serde_json::Value {
        json!({
            "side": or_not_specified(self.side.as_deref()),
            "joint": self.joint.as_str(),
            "procedure": self.joint.arthroplasty(),
            "surgery_date": or_not_specified(self.surgery_date.as_deref()),
            "satisfaction": or_not_specified(self.satisfaction.as_deref()),
            "pain_level": or_not_specified(self.pain_level.as_deref()),
            "score_name": score_name(self.joint),
            "oxford_score": or_not_specified(self.oxford_score.as_deref()),
            "function_notes": or_not_specified(self.function_notes.as_deref()),
            "xray_findings": self.xray_findings.with_parenthesized_details(),
            "follow_up_plan": or_not_specified(self.follow_up_plan.as_deref()),
            "questions": self.questions.as_yes_no(),
        })
    }
}

fn one_year_fields(joint: Joint) -> Vec<FieldSpec> {
    let mut fields = vec![
        common::side(),
        common::surgery_date(),
        FieldSpec::choice(
            "satisfaction",
            "Satisfaction",
            &[
                ("very satisfied", "Very satisfied"),
                ("satisfied", "Satisfied"),
                ("neutral", "Neutral"),
                ("dissatisfied", "Dissatisfied"),
            ],
        ),
        FieldSpec::choice("painLevel", "Pain", PAIN_OPTIONS),
        FieldSpec::score("oxfordScore", score_name(joint), OXFORD_RANGE),
        FieldSpec::long_text("functionNotes", "Function"),
        FieldSpec::choice(
            "xrayFindings",
            "X-ray findings",
            &[("satisfactory", "Satisfactory"), ("other", "Other")],
        ),
        FieldSpec::text("xrayOther", "X-ray details").revealed_by("xrayFindings", sentinel::OTHER),
        FieldSpec::choice(
            "followUpPlan",
            "Follow-up plan",
            &[
                ("discharge", "Discharge"),
                ("5-year review", "Review at 5 years"),
                ("early review", "Early review"),
            ],
        ),
    ];
    fields.extend(common::questions());
    fields
}

impl Scenario for OneYear {
    fn id(&self) -> &str {
        match self.joint {
            Joint::Knee => "tka_one_year",
            Joint::Hip => "tha_one_year",
        }
    }

    fn name(&self) -> &str {
        match self.joint {
            Joint::Knee => "TKA 1-Year Follow-up",
            Joint::Hip => "THA 1-Year Follow-up",
        }
    }

    fn file_stem(&self) -> &str {
        match self.joint {
            Joint::Knee => "tka-one-year",
            Joint::Hip => "tha-one-year",
        }
    }

    fn fields(&self) -> &[FieldSpec] {
        static KNEE: std::sync::LazyLock<Vec<FieldSpec>> =
            std::sync::LazyLock::new(|| one_year_fields(Joint::Knee));
        static HIP: std::sync::LazyLock<Vec<FieldSpec>> =
            std::sync::LazyLock::new(|| one_year_fields(Joint::Hip));
        match self.joint {
            Joint::Knee => &KNEE,
            Joint::Hip => &HIP,
        }
    }

    fn narrative_template(&self) -> &str {
        NARRATIVE
    }

    fn narrative_context(&self, record: &FormRecord) -> serde_json::Value {
        OneYearReview::from_record(self.joint, record).narrative_context()
    }
}

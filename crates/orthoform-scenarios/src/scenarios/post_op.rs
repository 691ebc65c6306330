use serde::{Deserialize, Serialize};
use serde_json::json;

use orthoform_core::models::answer::{or_not_specified, sentinel, yes_no, Gated};
use orthoform_core::models::record::FormRecord;

use super::common::{self, owned, PAIN_OPTIONS, YES_NO_OPTIONS};
use crate::fields::{FieldSpec, Joint};
use crate::Scenario;

const NARRATIVE: &str = "Post-operative review following {{ side }} total {{ joint }} arthroplasty ({{ procedure }}) \
performed on {{ surgery_date }}. \
Wound: {{ wound_status }}. \
Pain is {{ pain_level }}. \
{{ joint_finding }}. \
Mobility: {{ mobility }}. \
Complications? {{ complications }}. \
Physiotherapy: {{ physiotherapy }}. \
Questions/concerns? {{ questions }}";

/// Early post-operative review after total knee or hip arthroplasty.
pub struct PostOp {
    pub joint: Joint,
}

impl PostOp {
    pub const TKA: PostOp = PostOp { joint: Joint::Knee };
    pub const THA: PostOp = PostOp { joint: Joint::Hip };
}

/// The joint-specific examination finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "joint", rename_all = "snake_case")]
pub enum JointFinding {
    Knee { range_of_motion: Option<String> },
    Hip { precautions_understood: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOpReview {
    pub joint: Joint,
    pub side: Option<String>,
    pub surgery_date: Option<String>,
    pub wound_status: Gated,
    pub pain_level: Option<String>,
    pub finding: JointFinding,
    pub mobility: Gated,
    pub complications: Gated,
    pub physiotherapy: Option<String>,
    pub questions: Gated,
}

impl PostOpReview {
    pub fn from_record(joint: Joint, record: &FormRecord) -> Self {
        let finding = match joint {
            Joint::Knee => JointFinding::Knee {
                range_of_motion: owned(record, "rangeOfMotion"),
            },
            Joint::Hip => JointFinding::Hip {
                precautions_understood: owned(record, "hipPrecautions"),
            },
        };

        Self {
            joint,
            side: owned(record, "side"),
            surgery_date: owned(record, "surgeryDate"),
            wound_status: Gated::read(record, "woundStatus", sentinel::OTHER, "woundOther"),
            pain_level: owned(record, "painLevel"),
            finding,
            mobility: common::read_mobility(record),
            complications: Gated::read(
                record,
                "complications",
                sentinel::YES,
                "complicationsDetails",
            ),
            physiotherapy: owned(record, "physiotherapy"),
            questions: common::read_questions(record),
        }
    }

    pub fn narrative_context(&self) -> serde_json::Value {
        let joint_finding = match &self.finding {
            JointFinding::Knee { range_of_motion } => format!(
                "Range of motion: {}",
                or_not_specified(range_of_motion.as_deref())
            ),
            JointFinding::Hip {
                precautions_understood,
            } => format!(
                "Hip precautions understood? {}",
                yes_no(precautions_understood.as_deref())
            ),
        };

        json!({
            "side": or_not_specified(self.side.as_deref()),
            "joint": self.joint.as_str(),
            "procedure": self.joint.arthroplasty(),
            "surgery_date": or_not_specified(self.surgery_date.as_deref()),
            "wound_status": self.wound_status.with_parenthesized_details(),
            "pain_level": or_not_specified(self.pain_level.as_deref()),
            "joint_finding": joint_finding,
            "mobility": common::mobility_phrase(&self.mobility),
            "complications": self.complications.as_yes_no(),
            "physiotherapy": or_not_specified(self.physiotherapy.as_deref()),
            "questions": self.questions.as_yes_no(),
        })
    }
}

fn post_op_fields(joint: Joint) -> Vec<FieldSpec> {
    let mut fields = vec![
        common::side(),
        common::surgery_date(),
        FieldSpec::choice(
            "woundStatus",
            "Wound",
            &[
                ("healed", "Healed"),
                ("healing", "Healing"),
                ("other", "Other"),
            ],
        ),
        FieldSpec::text("woundOther", "Wound details").revealed_by("woundStatus", sentinel::OTHER),
        FieldSpec::choice("painLevel", "Pain", PAIN_OPTIONS),
    ];

    fields.push(match joint {
        Joint::Knee => FieldSpec::text("rangeOfMotion", "Range of motion"),
        Joint::Hip => {
            FieldSpec::choice("hipPrecautions", "Hip precautions understood", YES_NO_OPTIONS)
        }
    });

    fields.extend(common::mobility());
    fields.push(FieldSpec::choice(
        "complications",
        "Complications",
        YES_NO_OPTIONS,
    ));
    fields.push(
        FieldSpec::long_text("complicationsDetails", "Complication details")
            .revealed_by("complications", sentinel::YES),
    );
    fields.push(FieldSpec::choice(
        "physiotherapy",
        "Physiotherapy",
        &[
            ("attending", "Attending"),
            ("completed", "Completed"),
            ("not started", "Not started"),
        ],
    ));
    fields.extend(common::questions());
    fields
}

impl Scenario for PostOp {
    fn id(&self) -> &str {
        match self.joint {
            Joint::Knee => "tka_post_op",
            Joint::Hip => "tha_post_op",
        }
    }

    fn name(&self) -> &str {
        match self.joint {
            Joint::Knee => "TKA Post-operative Review",
            Joint::Hip => "THA Post-operative Review",
        }
    }

    fn file_stem(&self) -> &str {
        match self.joint {
            Joint::Knee => "tka-post-op",
            Joint::Hip => "tha-post-op",
        }
    }

    fn fields(&self) -> &[FieldSpec] {
        static KNEE: std::sync::LazyLock<Vec<FieldSpec>> =
            std::sync::LazyLock::new(|| post_op_fields(Joint::Knee));
        static HIP: std::sync::LazyLock<Vec<FieldSpec>> =
            std::sync::LazyLock::new(|| post_op_fields(Joint::Hip));
        match self.joint {
            Joint::Knee => &KNEE,
            Joint::Hip => &HIP,
        }
    }

    fn narrative_template(&self) -> &str {
        NARRATIVE
    }

    fn narrative_context(&self, record: &FormRecord) -> serde_json::Value {
        PostOpReview::from_record(self.joint, record).narrative_context()
    }
}

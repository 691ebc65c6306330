use orthoform_core::models::answer::Gated;
use orthoform_core::models::record::FormRecord;
use orthoform_scenarios::fields::Joint;
use orthoform_scenarios::scenarios::native_knee::NativeKneeFollowUp;
use orthoform_scenarios::scenarios::post_op::{JointFinding, PostOpReview};

fn record(pairs: &[(&str, &str)]) -> FormRecord {
    pairs.iter().copied().collect()
}

#[test]
fn native_knee_reads_gated_answers_once() {
    let r = record(&[
        ("kneeSide", "right"),
        ("treatmentPlan", "other"),
        ("treatmentPlanOther", "custom brace"),
        ("hasQuestions", "no"),
        ("questionsDetails", "left over from an earlier edit"),
    ]);
    let model = NativeKneeFollowUp::from_record(&r);
    assert_eq!(model.knee_side.as_deref(), Some("right"));
    assert_eq!(
        model.treatment_plan,
        Gated::Open {
            value: "other".to_string(),
            details: Some("custom brace".to_string()),
        }
    );
    assert_eq!(
        model.questions,
        Gated::Closed {
            value: "no".to_string()
        }
    );
}

#[test]
fn native_knee_context_uses_fallbacks() {
    let context = NativeKneeFollowUp::from_record(&FormRecord::new()).narrative_context();
    assert_eq!(context["knee_side"], "not specified");
    assert_eq!(context["treatment_plan"], "not specified");
    assert_eq!(context["questions"], "not specified");
}

#[test]
fn post_op_joint_finding_follows_joint() {
    let r = record(&[("rangeOfMotion", "0-110"), ("hipPrecautions", "yes")]);

    let knee = PostOpReview::from_record(Joint::Knee, &r);
    assert_eq!(
        knee.finding,
        JointFinding::Knee {
            range_of_motion: Some("0-110".to_string())
        }
    );
    assert_eq!(
        knee.narrative_context()["joint_finding"],
        "Range of motion: 0-110"
    );

    let hip = PostOpReview::from_record(Joint::Hip, &r);
    assert_eq!(
        hip.narrative_context()["joint_finding"],
        "Hip precautions understood? Yes"
    );
}

#[test]
fn mobility_with_aid_names_the_aid() {
    let r = record(&[("mobility", "with"), ("mobilityAid", "walking frame")]);
    let review = PostOpReview::from_record(Joint::Knee, &r);
    assert_eq!(
        review.narrative_context()["mobility"],
        "with walking aid (walking frame)"
    );

    let r = record(&[("mobility", "independent"), ("mobilityAid", "walking frame")]);
    let review = PostOpReview::from_record(Joint::Knee, &r);
    assert_eq!(review.narrative_context()["mobility"], "independent");
}

use orthoform_core::models::record::FormRecord;
use orthoform_export::render::{build_report, render_narrative, render_template};
use orthoform_scenarios::{all_scenarios, get_scenario};
use proptest::prelude::*;

fn record(pairs: &[(&str, &str)]) -> FormRecord {
    pairs.iter().copied().collect()
}

fn knee_record() -> FormRecord {
    record(&[
        ("kneeSide", "right"),
        ("clinicHistory", "arthritis"),
        ("treatmentPlan", "other"),
        ("treatmentPlanOther", "custom brace"),
        ("symptomsStatus", "improving"),
        ("historyChanges", "none"),
        ("treatmentConsideration", "continuing"),
        ("hasQuestions", "no"),
    ])
}

fn date() -> jiff::civil::Date {
    jiff::civil::date(2026, 10, 19)
}

#[test]
fn native_knee_narrative_without_questions() {
    let scenario = get_scenario("native_knee_follow_up").unwrap();
    let narrative = render_narrative(scenario.as_ref(), &knee_record()).unwrap();

    assert_eq!(
        narrative,
        "Review of the right native knee. Clinic history: arthritis. \
         Treatment to date consisted of other (custom brace). The symptoms are improving. \
         Changes in history since the last visit: none. \
         Treatment under consideration: continuing. Questions/concerns? No"
    );
    assert!(narrative.contains("consisted of other (custom brace). The symptoms are improving"));
    assert!(narrative.ends_with("Questions/concerns? No"));
}

#[test]
fn native_knee_narrative_with_questions() {
    let scenario = get_scenario("native_knee_follow_up").unwrap();
    let mut r = knee_record();
    r.set("hasQuestions", "yes");
    r.set("questionsDetails", "worried about swelling");

    let narrative = render_narrative(scenario.as_ref(), &r).unwrap();
    assert!(narrative.ends_with("Questions/concerns? Yes - worried about swelling"));
}

#[test]
fn stale_details_are_left_out_when_controller_changes() {
    let scenario = get_scenario("native_knee_follow_up").unwrap();
    let mut r = knee_record();
    r.set("hasQuestions", "yes");
    r.set("questionsDetails", "worried about swelling");
    r.set("hasQuestions", "no");
    r.set("treatmentPlan", "bracing");

    let narrative = render_narrative(scenario.as_ref(), &r).unwrap();
    assert!(!narrative.contains("swelling"));
    assert!(!narrative.contains("custom brace"));
    assert!(narrative.contains("consisted of bracing."));
}

#[test]
fn empty_records_use_the_fallback_everywhere() {
    for scenario in all_scenarios() {
        let narrative = render_narrative(scenario.as_ref(), &FormRecord::new()).unwrap();
        assert!(narrative.contains("not specified"), "{}", scenario.id());
        assert!(!narrative.contains("undefined"), "{}", scenario.id());
        assert!(!narrative.contains("  "), "{}: {narrative}", scenario.id());
        assert!(!narrative.contains(": ."), "{}: {narrative}", scenario.id());
        assert!(!narrative.contains("{{"), "{}", scenario.id());

        let report = build_report(scenario.as_ref(), &FormRecord::new(), date()).unwrap();
        assert!(report.entries.iter().all(|e| !e.value.is_empty()));
    }
}

#[test]
fn post_op_narratives_name_the_joint() {
    let r = record(&[
        ("side", "left"),
        ("surgeryDate", "2026-09-01"),
        ("woundStatus", "other"),
        ("woundOther", "small superficial dehiscence"),
        ("hipPrecautions", "yes"),
        ("complications", "no"),
        ("complicationsDetails", "should not appear"),
        ("hasQuestions", "no"),
    ]);

    let tha = get_scenario("tha_post_op").unwrap();
    let narrative = render_narrative(tha.as_ref(), &r).unwrap();
    assert!(narrative.starts_with(
        "Post-operative review following left total hip arthroplasty (THA) performed on 2026-09-01."
    ));
    assert!(narrative.contains("Wound: other (small superficial dehiscence)."));
    assert!(narrative.contains("Hip precautions understood? Yes."));
    assert!(narrative.contains("Complications? No."));
    assert!(!narrative.contains("should not appear"));
}

#[test]
fn unplanned_return_positive_cultures_name_the_organism() {
    let scenario = get_scenario("unplanned_return").unwrap();
    let r = record(&[
        ("joint", "knee"),
        ("woundCultures", "positive"),
        ("cultureOrganism", "Staphylococcus aureus"),
        ("managementPlan", "return to theatre"),
    ]);
    let narrative = render_narrative(scenario.as_ref(), &r).unwrap();
    assert!(narrative.contains("Wound cultures: positive (Staphylococcus aureus)."));
    assert!(narrative.contains("Management plan: return to theatre."));
}

#[test]
fn one_year_names_the_oxford_score() {
    let scenario = get_scenario("tka_one_year").unwrap();
    let r = record(&[("oxfordScore", "42")]);
    let narrative = render_narrative(scenario.as_ref(), &r).unwrap();
    assert!(narrative.contains("Oxford Knee Score: 42."));
}

#[test]
fn report_carries_title_entries_and_stem() {
    let scenario = get_scenario("native_knee_follow_up").unwrap();
    let report = build_report(scenario.as_ref(), &knee_record(), date()).unwrap();

    assert_eq!(report.title, "Native Knee Follow-up Report");
    assert_eq!(report.file_stem, "native-knee-follow-up");
    assert_eq!(report.generated_on, date());

    let ids: Vec<_> = report.entries.iter().map(|e| e.field_id.as_str()).collect();
    assert!(ids.contains(&"treatmentPlanOther"));
    assert!(!ids.contains(&"questionsDetails"));
    assert_eq!(report.entries[0].value, "right");
    assert_eq!(report.entries[0].display_value(), "Right");
}

#[test]
fn template_errors_are_reported() {
    let context = serde_json::json!({ "side": "left" });
    assert!(render_template("broken", "{{ side ", &context).is_err());
    assert!(render_template("missing", "{{ joint }}", &context).is_err());
    assert_eq!(
        render_template("ok", "<{{ side }}>", &context).unwrap(),
        "<left>"
    );
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("yes".to_string()),
        Just("no".to_string()),
        Just("other".to_string()),
        Just("positive".to_string()),
        Just("with".to_string()),
        "[a-z ]{1,20}",
    ]
}

proptest! {
    #[test]
    fn narrative_is_a_pure_function_of_the_record(
        values in proptest::collection::vec(value_strategy(), 24),
    ) {
        for scenario in all_scenarios() {
            let r: FormRecord = scenario
                .fields()
                .iter()
                .zip(values.iter())
                .map(|(f, v)| (f.id.clone(), v.clone()))
                .collect();
            let first = render_narrative(scenario.as_ref(), &r).unwrap();
            let second = render_narrative(scenario.as_ref(), &r.clone()).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn question_details_appear_iff_answer_is_yes(
        answer in prop_oneof![Just("yes"), Just("no"), Just("")],
        details in "[a-z]{6,12}",
    ) {
        let marker = format!("zz{details}zz");
        for scenario in all_scenarios() {
            let r = record(&[("hasQuestions", answer), ("questionsDetails", marker.as_str())]);
            let narrative = render_narrative(scenario.as_ref(), &r).unwrap();
            prop_assert_eq!(narrative.contains(&marker), answer == "yes", "{}", scenario.id());
        }
    }
}

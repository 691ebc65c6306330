use orthoform_core::models::record::FormRecord;
use orthoform_core::models::review::FieldError;
use orthoform_scenarios::form::form_view;
use orthoform_scenarios::get_scenario;

fn control_visible(record: &FormRecord, field: &str) -> bool {
    let scenario = get_scenario("native_knee_follow_up").unwrap();
    form_view(scenario.as_ref(), record, &[])
        .into_iter()
        .find(|c| c.field_id == field)
        .unwrap()
        .visible
}

#[test]
fn details_hidden_until_sentinel_selected() {
    let mut record = FormRecord::new();
    assert!(!control_visible(&record, "treatmentPlanOther"));

    record.set("treatmentPlan", "bracing");
    assert!(!control_visible(&record, "treatmentPlanOther"));

    record.set("treatmentPlan", "other");
    assert!(control_visible(&record, "treatmentPlanOther"));

    record.set("treatmentPlan", "injection");
    assert!(!control_visible(&record, "treatmentPlanOther"));
}

#[test]
fn controls_follow_template_order_and_carry_values() {
    let scenario = get_scenario("native_knee_follow_up").unwrap();
    let mut record = FormRecord::new();
    record.set("kneeSide", "left");

    let controls = form_view(scenario.as_ref(), &record, &[]);
    assert_eq!(controls.len(), scenario.fields().len());
    assert_eq!(controls[0].field_id, "kneeSide");
    assert_eq!(controls[0].value.as_deref(), Some("left"));
    assert!(controls[0].required);
    assert!(controls.iter().all(|c| c.error.is_none()));
}

#[test]
fn supplied_errors_show_on_visible_fields_only() {
    let scenario = get_scenario("native_knee_follow_up").unwrap();
    let record = FormRecord::new();
    let errors = vec![
        FieldError::new("kneeSide", "Knee side is required"),
        FieldError::new("questionsDetails", "too long"),
    ];

    let controls = form_view(scenario.as_ref(), &record, &errors);
    let side = controls.iter().find(|c| c.field_id == "kneeSide").unwrap();
    assert_eq!(side.error.as_deref(), Some("Knee side is required"));

    let details = controls
        .iter()
        .find(|c| c.field_id == "questionsDetails")
        .unwrap();
    assert!(!details.visible);
    assert_eq!(details.error, None);
}

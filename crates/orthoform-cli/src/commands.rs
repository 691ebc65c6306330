use std::fmt::Write as _;
use std::path::Path;

use orthoform_core::models::record::FormRecord;
use orthoform_core::models::review::FieldError;
use orthoform_export::render::Report;
use orthoform_scenarios::fields::FieldKind;
use orthoform_scenarios::form::form_view;
use orthoform_scenarios::{all_scenarios, require_scenario, Scenario};

pub fn scenario(id: &str) -> eyre::Result<Box<dyn Scenario>> {
    Ok(require_scenario(id)?)
}

/// Read a record from an optional JSON file, then apply `key=value`
/// overrides in order.
pub fn load_record(input: Option<&Path>, assignments: &[String]) -> eyre::Result<FormRecord> {
    let mut record = match input {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| eyre::eyre!("failed to read record at {}: {e}", path.display()))?;
            FormRecord::from_json(serde_json::from_str(&contents)?)?
        }
        None => FormRecord::new(),
    };

    for assignment in assignments {
        record.apply_assignment(assignment)?;
    }
    Ok(record)
}

pub fn list_scenarios() -> String {
    let mut out = String::new();
    for scenario in all_scenarios() {
        let _ = writeln!(out, "{:<24}{}", scenario.id(), scenario.name());
    }
    out
}

fn describe_kind(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::LongText => "long text".to_string(),
        FieldKind::Date => "date".to_string(),
        FieldKind::Choice { options } => {
            let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
            format!("one of: {}", values.join(" | "))
        }
        FieldKind::Score { range } => format!("score {}-{}", range.min, range.max),
    }
}

/// The form as it would be rendered: visible controls with their current
/// value, kind and validation message.
pub fn render_form(scenario: &dyn Scenario, record: &FormRecord, errors: &[FieldError]) -> String {
    let mut out = format!("{}\n\n", scenario.name());
    for control in form_view(scenario, record, errors)
        .into_iter()
        .filter(|c| c.visible)
    {
        let marker = if control.required { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {} [{}] = {}",
            control.label,
            control.field_id,
            control.value.as_deref().unwrap_or(""),
        );
        let _ = writeln!(out, "      {}", describe_kind(&control.kind));
        if let Some(error) = control.error {
            let _ = writeln!(out, "      ! {error}");
        }
    }
    out
}

/// The review screen: title, narrative, label/value listing, and any
/// outstanding validation messages.
pub fn render_review(report: &Report, errors: &[FieldError]) -> String {
    let mut out = format!("{}\n\n{}\n\n", report.title, report.narrative);

    let width = report
        .entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0)
        + 1;
    for entry in &report.entries {
        let _ = writeln!(
            out,
            "{:<width$} {}",
            format!("{}:", entry.label),
            entry.display_value()
        );
    }

    if !errors.is_empty() {
        out.push_str("\nNeeds attention:\n");
        for error in errors {
            let _ = writeln!(out, "  - {}", error.message);
        }
    }
    out
}

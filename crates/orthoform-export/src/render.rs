use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use orthoform_core::models::record::FormRecord;
use orthoform_core::models::review::ReviewEntry;
use orthoform_scenarios::Scenario;

use crate::error::ExportError;

/// Everything the review screen shows and every export writes.
///
/// Built once by [`build_report`]; the review and all document encoders
/// consume the same value, so what the clinician confirms is what gets
/// exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub scenario_id: String,
    pub title: String,
    pub narrative: String,
    pub entries: Vec<ReviewEntry>,
    pub generated_on: jiff::civil::Date,
    pub file_stem: String,
}

/// Render a Tera template with a JSON context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The top-level keys of `context` become the template variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    context: &serde_json::Value,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = Context::from_value(context.clone())
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the narrative paragraph of a scenario for the given record.
pub fn render_narrative(
    scenario: &dyn Scenario,
    record: &FormRecord,
) -> Result<String, ExportError> {
    let context = scenario.narrative_context(record);
    render_template(scenario.id(), scenario.narrative_template(), &context)
}

/// Derive the review (narrative + label/value listing) for a record.
pub fn build_report(
    scenario: &dyn Scenario,
    record: &FormRecord,
    generated_on: jiff::civil::Date,
) -> Result<Report, ExportError> {
    let narrative = render_narrative(scenario, record)?;
    let entries = scenario.review_entries(record);

    tracing::debug!(
        scenario = scenario.id(),
        entries = entries.len(),
        narrative_len = narrative.len(),
        "built report"
    );

    Ok(Report {
        scenario_id: scenario.id().to_string(),
        title: format!("{} Report", scenario.name()),
        narrative,
        entries,
        generated_on,
        file_stem: scenario.file_stem().to_string(),
    })
}

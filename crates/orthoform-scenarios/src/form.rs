use serde::{Deserialize, Serialize};
use ts_rs::TS;

use orthoform_core::models::record::FormRecord;
use orthoform_core::models::review::FieldError;

use crate::fields::FieldKind;
use crate::Scenario;

/// The state of one rendered control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormControl {
    pub field_id: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: Option<String>,
    pub visible: bool,
    /// Message supplied by the caller for this field, if any.
    pub error: Option<String>,
}

/// Project a record into the controls of a scenario's form.
///
/// Visibility follows the reveal rules only. Errors are taken as given;
/// this does no validation of its own. Errors on hidden fields are not shown.
pub fn form_view(
    scenario: &dyn Scenario,
    record: &FormRecord,
    errors: &[FieldError],
) -> Vec<FormControl> {
    scenario
        .fields()
        .iter()
        .map(|spec| {
            let visible = scenario.is_visible(spec, record);
            let error = visible
                .then(|| errors.iter().find(|e| e.field_id == spec.id))
                .flatten()
                .map(|e| e.message.clone());
            FormControl {
                field_id: spec.id.clone(),
                label: spec.label.clone(),
                kind: spec.kind.clone(),
                required: spec.required,
                value: record.raw(&spec.id).map(str::to_string),
                visible,
                error,
            }
        })
        .collect()
}

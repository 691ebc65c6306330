use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use orthoform_core::models::record::FormRecord;
use orthoform_scenarios::Scenario;

use crate::delivery::{deliver, Artifact, DeliveryOutcome, Host};
use crate::error::ExportError;
use crate::render::{build_report, Report};
use crate::styles::DocumentStyles;
use crate::{docx, pdf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            other => Err(format!("unsupported export format: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub styles: DocumentStyles,
    pub generated_on: jiff::civil::Date,
    /// How long the host keeps a viewing handle before releasing it.
    pub release_delay: Duration,
}

/// The fixed file name for a report, e.g. `tka-post-op-report.pdf`.
pub fn filename(report: &Report, format: ExportFormat) -> String {
    format!("{}-report.{}", report.file_stem, format.extension())
}

/// Encode a report into a deliverable artifact.
pub fn render_document(
    report: &Report,
    format: ExportFormat,
    styles: &DocumentStyles,
) -> Result<Artifact, ExportError> {
    let bytes = match format {
        ExportFormat::Pdf => pdf::generate_pdf(report, styles)?,
        ExportFormat::Docx => docx::generate_docx(report, styles)?,
    };

    Ok(Artifact {
        filename: filename(report, format),
        mime_type: format.mime_type().to_string(),
        bytes,
    })
}

/// Build the report for a record, encode it, and deliver it to the host.
pub fn export_report<H: Host + ?Sized>(
    scenario: &dyn Scenario,
    record: &FormRecord,
    options: &ExportOptions,
    host: &mut H,
) -> Result<DeliveryOutcome, ExportError> {
    let report = build_report(scenario, record, options.generated_on)?;
    let artifact = render_document(&report, options.format, &options.styles)?;
    tracing::info!(
        scenario = scenario.id(),
        format = %options.format,
        bytes = artifact.bytes.len(),
        "exporting report"
    );
    deliver(host, &artifact, options.release_delay)
}

use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use orthoform_core::models::review::ReviewEntry;

use crate::error::ExportError;
use crate::render::Report;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from a report.
///
/// - title → Heading 1
/// - narrative → one body paragraph
/// - "Fields" → Heading 2, then one `**Label:** value` paragraph per entry
/// - generated-date footer line
pub fn generate_docx(report: &Report, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_paragraph(heading_paragraph(&report.title, "Heading1"))
        .add_paragraph(body_paragraph(&report.narrative, styles))
        .add_paragraph(heading_paragraph("Fields", "Heading2"));

    for entry in &report.entries {
        docx = docx.add_paragraph(field_paragraph(entry, styles));
    }

    docx = docx.add_paragraph(Paragraph::new()).add_paragraph(body_paragraph(
        &format!("Generated on {}", report.generated_on),
        styles,
    ));

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(bytes = buf.get_ref().len(), "generated DOCX");
    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn text_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(text_run(text, styles))
}

fn field_paragraph(entry: &ReviewEntry, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(text_run(&format!("{}: ", entry.label), styles).bold())
        .add_run(text_run(&entry.display_value(), styles))
}

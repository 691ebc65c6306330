use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for DOCX body text (e.g. "Calibri", "Arial").
    pub body_font: String,

    /// Body text font size in points (DOCX).
    pub body_size: usize,

    /// Heading 1 font size in points (DOCX).
    pub heading1_size: usize,

    /// Heading 2 font size in points (DOCX).
    pub heading2_size: usize,

    /// Page geometry and text placement for PDF output.
    pub pdf: PdfLayout,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Arial".to_string(),
            body_size: 11,
            heading1_size: 16,
            heading2_size: 13,
            pdf: PdfLayout::default(),
        }
    }
}

/// Fixed-page layout for the PDF export. All lengths are in points and
/// vertical positions are measured down from the top edge of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfLayout {
    pub page_width: f32,
    pub page_height: f32,

    /// Baseline of the first line on each page.
    pub margin_top: f32,
    /// Content never goes below `page_height - margin_bottom`.
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,

    /// PDF base-14 font names.
    pub regular_font: String,
    pub bold_font: String,

    pub title_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub line_height: f32,

    /// Gap between the title baseline and the rule beneath it.
    pub rule_gap: f32,

    /// x of the bold field label and of its wrapped value. Values wrap
    /// at the right margin.
    pub label_x: f32,
    pub value_x: f32,

    /// Minimum space between a wrapped label and its value.
    pub label_gap: f32,

    /// Extra space after each field.
    pub field_spacing: f32,

    /// Distance of the footer baseline from the bottom of the page.
    pub footer_offset: f32,
}

impl Default for PdfLayout {
    // A4 portrait
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin_top: 56.0,
            margin_bottom: 70.0,
            margin_left: 56.0,
            margin_right: 56.0,
            regular_font: "Helvetica".to_string(),
            bold_font: "Helvetica-Bold".to_string(),
            title_size: 16.0,
            heading_size: 13.0,
            body_size: 10.0,
            line_height: 14.0,
            rule_gap: 10.0,
            label_x: 56.0,
            value_x: 210.0,
            label_gap: 8.0,
            field_spacing: 6.0,
            footer_offset: 30.0,
        }
    }
}

impl PdfLayout {
    /// Lowest baseline content may use on a page.
    pub fn content_limit(&self) -> f32 {
        self.page_height - self.margin_bottom
    }
}

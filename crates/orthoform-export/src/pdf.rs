use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, StringFormat, Stream};

use crate::error::ExportError;
use crate::layout::{layout_report, Mark, Page, Weight};
use crate::render::Report;
use crate::styles::DocumentStyles;

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

/// Generate a PDF from a report.
///
/// The report is laid out with [`layout_report`] and every page is written
/// as a content stream using the two standard Type1 fonts named in the
/// layout.
pub fn generate_pdf(report: &Report, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let layout = &styles.pdf;
    let pages = layout_report(report, layout);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => layout.regular_font.as_str(),
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => layout.bold_font.as_str(),
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR => regular_id,
            BOLD => bold_id,
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for page in &pages {
        let content = Content {
            operations: page_operations(page, layout.page_height),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::from(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                points(layout.page_width),
                points(layout.page_height),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_text(&report.title), StringFormat::Literal),
        "Producer" => Object::string_literal("orthoform"),
    });
    doc.trailer.set("Info", info_id);

    doc.compress();

    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    tracing::debug!(pages = count, bytes = buf.len(), "generated PDF");
    Ok(buf)
}

fn page_operations(page: &Page, page_height: f32) -> Vec<Operation> {
    let mut ops = Vec::new();
    for mark in &page.marks {
        match mark {
            Mark::Text {
                x,
                y,
                size,
                weight,
                text,
            } => {
                let font = match weight {
                    Weight::Regular => REGULAR,
                    Weight::Bold => BOLD,
                };
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new("Tf", vec![font.into(), points(*size)]));
                ops.push(Operation::new(
                    "Td",
                    vec![points(*x), points(page_height - *y)],
                ));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_text(text), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            Mark::Rule { x1, x2, y } => {
                let y = points(page_height - *y);
                ops.push(Operation::new("w", vec![Object::Integer(1)]));
                ops.push(Operation::new("m", vec![points(*x1), y.clone()]));
                ops.push(Operation::new("l", vec![points(*x2), y]));
                ops.push(Operation::new("S", vec![]));
            }
        }
    }
    ops
}

/// Whole points; the layout never needs sub-point precision.
fn points(value: f32) -> Object {
    Object::Integer(value.round() as i64)
}

/// Encode text for a WinAnsi-encoded standard font. Latin-1 characters map
/// to single bytes, control characters become spaces, anything else `?`.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            0x00..=0x1F => b' ',
            _ => b'?',
        })
        .collect()
}

use crate::metrics::text_width;
use crate::render::Report;
use crate::styles::PdfLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// A positioned drawing command. `y` is a baseline measured from the top
/// of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Text {
        x: f32,
        y: f32,
        size: f32,
        weight: Weight,
        text: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub marks: Vec<Mark>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Text { text, .. } => Some(text.as_str()),
            Mark::Rule { .. } => None,
        })
    }
}

/// Greedy word wrap so no line measures more than `max_width`.
///
/// Whitespace runs (including newlines) collapse to single spaces. Words
/// wider than a line are split, keeping at least one character per line.
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();

        while !word.is_empty() && measure(&word) > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(fitting_prefix(&word, max_width, &measure));
            lines.push(word);
            word = rest;
        }
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            current = word;
        } else {
            let joined = format!("{current} {word}");
            if measure(&joined) > max_width {
                lines.push(std::mem::replace(&mut current, word));
            } else {
                current = joined;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Byte length of the longest prefix of `word` that fits, never less than
/// its first character.
fn fitting_prefix<F>(word: &str, max_width: f32, measure: &F) -> usize
where
    F: Fn(&str) -> f32,
{
    let mut end = word.chars().next().map_or(0, char::len_utf8);
    for (i, c) in word.char_indices().skip(1) {
        let next = i + c.len_utf8();
        if measure(&word[..next]) > max_width {
            break;
        }
        end = next;
    }
    end
}

/// Tracks the vertical cursor and opens a new page when content would
/// cross the bottom limit.
struct Pager<'a> {
    layout: &'a PdfLayout,
    pages: Vec<Page>,
    cursor: f32,
}

impl<'a> Pager<'a> {
    fn new(layout: &'a PdfLayout) -> Self {
        Self {
            layout,
            pages: vec![Page::default()],
            cursor: layout.margin_top,
        }
    }

    /// Make room for a block whose last baseline is `extent` below the
    /// cursor. A block taller than a page is started at the top and left
    /// to run past the limit.
    fn ensure(&mut self, extent: f32) {
        let at_top = self.cursor <= self.layout.margin_top;
        if !at_top && self.cursor + extent > self.layout.content_limit() {
            self.pages.push(Page::default());
            self.cursor = self.layout.margin_top;
        }
    }

    fn push(&mut self, mark: Mark) {
        if let Some(page) = self.pages.last_mut() {
            page.marks.push(mark);
        }
    }

    fn text(&mut self, x: f32, y: f32, size: f32, weight: Weight, text: impl Into<String>) {
        self.push(Mark::Text {
            x,
            y,
            size,
            weight,
            text: text.into(),
        });
    }
}

/// Lay a report out onto fixed-size pages.
///
/// Title and rule, wrapped narrative, a "Fields" heading, then one bold
/// label and wrapped value per entry. Each field is kept on one page. The
/// generated-date footer goes on every page.
pub fn layout_report(report: &Report, layout: &PdfLayout) -> Vec<Page> {
    let mut pager = Pager::new(layout);
    let line = layout.line_height;

    pager.text(
        layout.margin_left,
        pager.cursor,
        layout.title_size,
        Weight::Bold,
        report.title.as_str(),
    );
    pager.cursor += layout.rule_gap;
    pager.push(Mark::Rule {
        x1: layout.margin_left,
        x2: layout.page_width - layout.margin_right,
        y: pager.cursor,
    });
    pager.cursor += line * 1.5;

    let body = layout.body_size;
    let narrative_width = layout.page_width - layout.margin_right - layout.margin_left;
    let label_width = layout.value_x - layout.label_gap - layout.label_x;
    let value_width = layout.page_width - layout.margin_right - layout.value_x;

    for text in wrap_text(&report.narrative, narrative_width, |s| {
        text_width(s, Weight::Regular, body)
    }) {
        pager.ensure(0.0);
        pager.text(
            layout.margin_left,
            pager.cursor,
            layout.body_size,
            Weight::Regular,
            text,
        );
        pager.cursor += line;
    }

    pager.cursor += line;
    pager.ensure(line);
    pager.text(
        layout.margin_left,
        pager.cursor,
        layout.heading_size,
        Weight::Bold,
        "Fields",
    );
    pager.cursor += line * 1.5;

    for entry in &report.entries {
        let labels = wrap_text(&format!("{}:", entry.label), label_width, |s| {
            text_width(s, Weight::Bold, body)
        });
        let values = wrap_text(&entry.display_value(), value_width, |s| {
            text_width(s, Weight::Regular, body)
        });
        let rows = labels.len().max(values.len()).max(1);

        pager.ensure((rows - 1) as f32 * line);
        let top = pager.cursor;
        for (i, text) in labels.into_iter().enumerate() {
            pager.text(
                layout.label_x,
                top + i as f32 * line,
                layout.body_size,
                Weight::Bold,
                text,
            );
        }
        for (i, text) in values.into_iter().enumerate() {
            pager.text(
                layout.value_x,
                top + i as f32 * line,
                layout.body_size,
                Weight::Regular,
                text,
            );
        }
        pager.cursor = top + rows as f32 * line + layout.field_spacing;
    }

    let mut pages = pager.pages;
    let total = pages.len();
    let footer_y = layout.page_height - layout.footer_offset;
    for (index, page) in pages.iter_mut().enumerate() {
        let footer = if total > 1 {
            format!(
                "Generated on {} (page {} of {})",
                report.generated_on,
                index + 1,
                total
            )
        } else {
            format!("Generated on {}", report.generated_on)
        };
        page.marks.push(Mark::Text {
            x: layout.margin_left,
            y: footer_y,
            size: layout.body_size - 1.0,
            weight: Weight::Regular,
            text: footer,
        });
    }

    tracing::debug!(pages = total, "laid out report");
    pages
}

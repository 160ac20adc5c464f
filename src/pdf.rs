//! PDF rendering of a laid-out worksheet.
//!
//! Everything here is thin usage of `pdf-canvas`: the builtin Helvetica
//! metrics double as the text-width oracle for the layout, and drawing is
//! lines plus positioned strings on a single page.

use std::io;
use std::path::Path;

use pdf_canvas::{BuiltinFont, Canvas, FontSource, Pdf};
use tracing::debug;

use crate::exercise::Exercise;
use crate::layout::{PageLayout, TextMeasure};

pub const FONT: BuiltinFont = BuiltinFont::Helvetica;
pub const FONT_SIZE: f32 = 12.0;
pub const HEADER_FONT_SIZE: f32 = 24.0;
pub const FOOTER_FONT_SIZE: f32 = 8.0;

const HEADER_LINE_WIDTH: f32 = 1.0;
const ANSWER_LINE_WIDTH: f32 = 0.3;

/// Measures strings with a builtin font's AFM widths.
pub struct FontMetrics {
    font: BuiltinFont,
    size: f32,
}

impl FontMetrics {
    pub fn new(font: BuiltinFont, size: f32) -> Self {
        Self { font, size }
    }
}

impl TextMeasure for FontMetrics {
    fn text_width(&self, text: &str) -> f32 {
        self.font.get_width(self.size, text)
    }
}

/// One worksheet page ready to render.
pub struct Worksheet<'a> {
    pub title: String,
    pub footer: String,
    pub exercises: &'a [Exercise],
    pub layout: PageLayout,
}

/// Writes the worksheet as a single-page PDF at `path`.
///
/// I/O errors from the underlying writer are propagated untouched; there is
/// no meaningful retry for a local file write.
pub fn render_worksheet(sheet: &Worksheet<'_>, path: &Path) -> io::Result<()> {
    let filename = path.to_str().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path is not valid UTF-8")
    })?;

    let metrics = FontMetrics::new(FONT, FONT_SIZE);
    let placed = sheet.layout.place(sheet.exercises, &metrics);
    debug!(exercises = placed.len(), path = filename, "rendering worksheet");

    let layout = &sheet.layout;
    let mut document = Pdf::create(filename)?;
    document.render_page(layout.width, layout.height, |canvas| {
        canvas.set_line_width(ANSWER_LINE_WIDTH)?;
        for p in &placed {
            canvas.left_text(p.x, p.y, FONT, FONT_SIZE, &p.text)?;
            canvas.line(p.line_start, p.y, p.line_end, p.y)?;
        }
        draw_header(canvas, layout, &sheet.title)?;
        draw_footer(canvas, layout, &sheet.footer)
    })?;
    document.finish()
}

fn draw_header(canvas: &mut Canvas, layout: &PageLayout, title: &str) -> io::Result<()> {
    let rule_y = layout.height - layout.margin;
    canvas.set_line_width(HEADER_LINE_WIDTH)?;
    canvas.line(
        layout.margin / 2.0,
        rule_y,
        layout.width - layout.margin / 2.0,
        rule_y,
    )?;
    canvas.center_text(
        layout.width / 2.0,
        rule_y + layout.spacing,
        FONT,
        HEADER_FONT_SIZE,
        title,
    )
}

fn draw_footer(canvas: &mut Canvas, layout: &PageLayout, text: &str) -> io::Result<()> {
    let rule_y = layout.margin - layout.spacing;
    canvas.line(
        layout.margin / 2.0,
        rule_y,
        layout.width - layout.margin / 2.0,
        rule_y,
    )?;
    canvas.left_text(
        layout.margin / 2.0,
        rule_y - FOOTER_FONT_SIZE,
        FONT,
        FOOTER_FONT_SIZE,
        text,
    )
}

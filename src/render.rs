use anyhow::{Context, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};

const FONT_SIZE_PT: f32 = 8.0;
/// Courier advances every glyph by 0.6 em.
const GLYPH_ADVANCE_EM: f32 = 0.6;

const LETTER_WIDTH_MM: f32 = 215.9;
const LETTER_HEIGHT_MM: f32 = 279.4;
const LETTER_MARGIN_MM: f32 = 10.0;
const LETTER_LEADING_PT: f32 = 8.0;

const RECEIPT_WIDTH_MM: f32 = 80.0;
const RECEIPT_TEXT_WIDTH_MM: f32 = 74.0;
const RECEIPT_MM_PER_LINE: f32 = 3.25;
const RECEIPT_LEADING_MM: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// US Letter, paginated.
    Letter,
    /// 80 mm roll cut to the length of the text.
    Receipt,
}

pub trait DocumentRenderer {
    fn render(&self, text: &str, size: PageSize) -> Result<Vec<u8>>;
}

fn pt_to_mm(pt: f32) -> f32 {
    pt * 25.4 / 72.0
}

/// How many monospace glyphs fit across `width_mm`.
pub fn columns_for(width_mm: f32) -> usize {
    (width_mm / pt_to_mm(FONT_SIZE_PT * GLYPH_ADVANCE_EM)).floor() as usize
}

/// Hard-wraps each line at `columns` characters. Blank lines are kept.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut out = Vec::new();
    for line in text.lines() {
        let chars = line.chars().collect::<Vec<_>>();
        if chars.is_empty() {
            out.push(String::new());
            continue;
        }
        out.extend(chars.chunks(columns).map(|chunk| chunk.iter().collect::<String>()));
    }
    out
}

/// Printed lines once the text is wrapped to the receipt's text width.
pub fn receipt_line_count(text: &str) -> usize {
    wrap(text, columns_for(RECEIPT_TEXT_WIDTH_MM)).len()
}

pub fn receipt_height_mm(text: &str) -> f32 {
    receipt_line_count(text).max(1) as f32 * RECEIPT_MM_PER_LINE
}

pub struct PdfRenderer;

impl PdfRenderer {
    fn write(lines: &[String], width_mm: f32, height_mm: f32, margin_mm: f32, leading_mm: f32) -> Result<Vec<u8>> {
        let (doc, first_page, first_layer) = PdfDocument::new("report", Mm(width_mm), Mm(height_mm), "text");
        let font = doc.add_builtin_font(BuiltinFont::Courier).context("Failed to load Courier")?;
        let usable_mm = height_mm - 2.0 * margin_mm;
        let per_page = ((usable_mm / leading_mm).floor() as usize).max(1);
        for (idx, chunk) in lines.chunks(per_page).enumerate() {
            let (page, layer) = if idx == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(width_mm), Mm(height_mm), "text")
            };
            let layer = doc.get_page(page).get_layer(layer);
            layer.begin_text_section();
            layer.set_font(&font, FONT_SIZE_PT);
            layer.set_line_height(leading_mm * 72.0 / 25.4);
            layer.set_text_cursor(Mm(margin_mm), Mm(height_mm - margin_mm - pt_to_mm(FONT_SIZE_PT)));
            for line in chunk {
                layer.write_text(line.as_str(), &font);
                layer.add_line_break();
            }
            layer.end_text_section();
        }
        doc.save_to_bytes().context("FAILURE TO WRITE PDF OUTPUT")
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, text: &str, size: PageSize) -> Result<Vec<u8>> {
        match size {
            PageSize::Letter => {
                let lines = wrap(text, columns_for(LETTER_WIDTH_MM - 2.0 * LETTER_MARGIN_MM));
                Self::write(&lines, LETTER_WIDTH_MM, LETTER_HEIGHT_MM, LETTER_MARGIN_MM, pt_to_mm(LETTER_LEADING_PT))
            }
            PageSize::Receipt => {
                let lines = wrap(text, columns_for(RECEIPT_TEXT_WIDTH_MM));
                Self::write(&lines, RECEIPT_WIDTH_MM, receipt_height_mm(text), 0.0, RECEIPT_LEADING_MM)
            }
        }
    }
}

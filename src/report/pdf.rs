//! PDF summary document
//!
//! Page one carries the text summary, each following page one chart image.

use super::summary::{Anchor, SummaryPage};
use crate::error::{Error, Result};
use printpdf::image_crate::{self, GenericImageView};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use std::fmt::Display;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// US Letter width
const PAGE_WIDTH_MM: f32 = 215.9;
/// US Letter height
const PAGE_HEIGHT_MM: f32 = 279.4;
/// Margin around chart images
const IMAGE_MARGIN_MM: f32 = 15.0;
/// Points to millimetres
const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.55;

fn pdf_err<E: Display>(e: E) -> Error {
    Error::Pdf(e.to_string())
}

/// Writes the multi-page summary PDF
#[derive(Debug, Clone)]
pub struct ReportWriter {
    page_width: f32,
    page_height: f32,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter {
    /// Create a writer for US Letter pages
    pub fn new() -> Self {
        Self {
            page_width: PAGE_WIDTH_MM,
            page_height: PAGE_HEIGHT_MM,
        }
    }

    /// Write `summary` followed by one page per image in `images`
    pub fn write<P: AsRef<Path>>(
        &self,
        path: P,
        summary: &SummaryPage,
        images: &[&Path],
    ) -> Result<()> {
        let path = path.as_ref();
        let (doc, page, layer) = PdfDocument::new(
            summary.title.as_str(),
            Mm(self.page_width),
            Mm(self.page_height),
            "Summary",
        );

        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?;

        let layer = doc.get_page(page).get_layer(layer);
        self.draw_summary(&layer, summary, &regular, &bold);

        for (i, image_path) in images.iter().enumerate() {
            self.add_image_page(&doc, image_path, &format!("Chart {}", i + 1))?;
        }

        let file = File::create(path)?;
        doc.save(&mut BufWriter::new(file)).map_err(pdf_err)?;

        info!(path = %path.display(), pages = images.len() + 1, "Saved PDF summary");
        Ok(())
    }

    fn draw_summary(
        &self,
        layer: &PdfLayerReference,
        summary: &SummaryPage,
        regular: &IndirectFontRef,
        bold: &IndirectFontRef,
    ) {
        for line in &summary.lines {
            let size = line.style.font_size() as f32;
            let font = if line.style.is_bold() { bold } else { regular };

            // PDF text is positioned by its baseline
            let y = line.y as f32 * self.page_height - size * PT_TO_MM;
            let x = match line.anchor {
                Anchor::Left(fraction) => fraction as f32 * self.page_width,
                Anchor::Center(fraction) => {
                    let chars = line.text.chars().count() as f32;
                    let width = chars * size * AVG_GLYPH_WIDTH * PT_TO_MM;
                    (fraction as f32 * self.page_width - width / 2.0).max(0.0)
                }
            };

            layer.use_text(line.text.as_str(), size, Mm(x), Mm(y), font);
        }
    }

    fn add_image_page(
        &self,
        doc: &PdfDocumentReference,
        image_path: &Path,
        name: &str,
    ) -> Result<()> {
        let dynamic = image_crate::open(image_path).map_err(pdf_err)?;
        let (px_width, px_height) = dynamic.dimensions();

        let (page, layer) = doc.add_page(Mm(self.page_width), Mm(self.page_height), name);
        let layer = doc.get_page(page).get_layer(layer);

        // Pick the DPI that fits the image inside the margins
        let max_width = self.page_width - 2.0 * IMAGE_MARGIN_MM;
        let max_height = self.page_height - 2.0 * IMAGE_MARGIN_MM;
        let dpi = (px_width as f32 * 25.4 / max_width).max(px_height as f32 * 25.4 / max_height);

        let width_mm = px_width as f32 * 25.4 / dpi;
        let height_mm = px_height as f32 * 25.4 / dpi;

        Image::from_dynamic_image(&dynamic).add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm((self.page_width - width_mm) / 2.0)),
                translate_y: Some(Mm((self.page_height - height_mm) / 2.0)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{AggregateResult, ScoredItem};
    use tempfile::tempdir;

    #[test]
    fn test_write_summary_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary_war.pdf");

        let result = AggregateResult::from_items(&[ScoredItem::new(-0.6, 0.8)]);
        let summary = SummaryPage::build("war", &result, 85);

        ReportWriter::new().write(&path, &summary, &[]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_missing_image_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.pdf");
        let summary = SummaryPage::build("war", &AggregateResult::from_items(&[]), 85);
        let missing = dir.path().join("missing.png");

        let err = ReportWriter::new()
            .write(&path, &summary, &[missing.as_path()])
            .unwrap_err();
        assert!(matches!(err, Error::Pdf(_)));
    }
}

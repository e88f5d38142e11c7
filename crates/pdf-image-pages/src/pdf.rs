use crate::io::write_atomically;
use crate::page::Page;
use crate::types::{PageError, Result, px_to_mm};
use printpdf::*;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Resolution the page pixels are printed at; sets the physical page size
    pub dpi: f32,
    pub title: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            title: "Images".to_string(),
        }
    }
}

/// Write `pages` as a single PDF at `path`, first page first.
///
/// The file only appears once it has been written completely.
pub fn export_pdf(pages: &[Page], output_path: impl AsRef<Path>, options: &ExportOptions) -> Result<()> {
    let output_path = output_path.as_ref();
    let bytes = render_pdf(pages, options)?;
    write_atomically(output_path, &bytes)?;

    log::debug!(
        "Wrote {} page(s) to {}",
        pages.len(),
        output_path.display()
    );
    Ok(())
}

/// Serialize `pages` to PDF bytes, one full-bleed image per page
pub fn render_pdf(pages: &[Page], options: &ExportOptions) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(PageError::EmptyQueue);
    }
    if !options.dpi.is_finite() || options.dpi <= 0.0 {
        return Err(PageError::Config(format!("DPI must be positive, got {}", options.dpi)));
    }

    let mut doc = PdfDocument::new(&options.title);

    let pdf_pages: Vec<PdfPage> = pages
        .iter()
        .map(|page| image_page(&mut doc, page, options.dpi))
        .collect();
    doc.pages = pdf_pages;

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    for warning in &warnings {
        log::debug!("PDF writer: {:?}", warning);
    }

    Ok(bytes)
}

fn image_page(doc: &mut PdfDocument, page: &Page, dpi: f32) -> PdfPage {
    let (width, height) = page.dimensions();

    let raw = RawImage {
        pixels: RawImageData::U8(page.image().as_raw().clone()),
        width: width as usize,
        height: height as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    };
    let image_id = doc.add_image(&raw);

    // At `dpi` the image covers the whole page from the origin
    let ops = vec![Op::UseXobject {
        id: image_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(0.0)),
            translate_y: Some(Pt(0.0)),
            dpi: Some(dpi),
            ..Default::default()
        },
    }];

    PdfPage::new(Mm(px_to_mm(width, dpi)), Mm(px_to_mm(height, dpi)), ops)
}

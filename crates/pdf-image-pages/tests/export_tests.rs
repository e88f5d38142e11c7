use image::{DynamicImage, Rgb, RgbImage};
use pdf_image_pages::*;
use tempfile::TempDir;

fn pages(count: usize) -> Vec<Page> {
    (0..count)
        .map(|i| {
            let shade = (i * 40) as u8;
            let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(30, 10 + i as u32 * 5, Rgb([shade, 0, 0])));
            compose(&image, 62, 88, Background::WHITE).unwrap()
        })
        .collect()
}

fn options() -> ExportOptions {
    ExportOptions {
        dpi: 30.0,
        ..Default::default()
    }
}

#[test]
fn test_render_pdf_produces_pdf_bytes() {
    let bytes = render_pdf(&pages(1), &options()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_writes_one_page_per_queued_page() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.pdf");

    export_pdf(&pages(3), &path, &options()).unwrap();

    let doc = lopdf::Document::load(&path).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
    assert!(!dir.path().join("out.pdf.part").exists());
}

#[test]
fn test_export_empty_page_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.pdf");

    let result = export_pdf(&[], &path, &options());
    assert!(matches!(result, Err(PageError::EmptyQueue)));
    assert!(!path.exists());
}

#[test]
fn test_export_into_missing_directory_leaves_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.pdf");

    match export_pdf(&pages(2), &path, &options()) {
        Err(PageError::Write { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("Expected Write error, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_export_rejects_non_positive_dpi() {
    let options = ExportOptions {
        dpi: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        render_pdf(&pages(1), &options),
        Err(PageError::Config(_))
    ));
}

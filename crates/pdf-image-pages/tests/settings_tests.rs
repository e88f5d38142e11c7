use pdf_image_pages::*;
use std::str::FromStr;

#[test]
fn test_default_settings_are_a4_at_300_dpi() {
    let settings = Settings::default();
    assert_eq!(settings.paper_size, PaperSize::A4);
    assert_eq!(settings.background, Background::WHITE);
    assert!(!settings.open_after_export);
    assert_eq!(settings.output_dir, None);
    assert_eq!(settings.page_dimensions_px(), (2480, 3508));
    assert!(settings.validate().is_ok());
}

#[test]
fn test_landscape_swaps_dimensions() {
    let settings = Settings {
        orientation: Orientation::Landscape,
        ..Default::default()
    };
    assert_eq!(settings.page_dimensions_px(), (3508, 2480));
}

#[test]
fn test_paper_sizes_in_pixels() {
    assert_eq!(PaperSize::Letter.dimensions_px(Orientation::Portrait, 300.0), (2550, 3300));
    assert_eq!(PaperSize::A5.dimensions_px(Orientation::Portrait, 72.0), (420, 595));
    let custom = PaperSize::Custom {
        width_mm: 25.4,
        height_mm: 50.8,
    };
    assert_eq!(custom.dimensions_px(Orientation::Portrait, 100.0), (100, 200));
}

#[test]
fn test_validation_rejects_bad_dpi_and_empty_pages() {
    let mut settings = Settings {
        dpi: 0.0,
        ..Default::default()
    };
    match settings.validate() {
        Err(PageError::Config(msg)) => assert!(msg.contains("DPI")),
        other => panic!("Expected Config error, got {other:?}"),
    }

    settings.dpi = 300.0;
    settings.paper_size = PaperSize::Custom {
        width_mm: 0.0,
        height_mm: 100.0,
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_validation_rejects_pages_too_large_to_allocate() {
    for dpi in [1.0e9, f32::INFINITY, f32::NAN] {
        let settings = Settings {
            dpi,
            ..Default::default()
        };
        assert!(
            matches!(settings.validate(), Err(PageError::Config(_))),
            "dpi {dpi} was accepted"
        );
    }

    let huge = Settings {
        paper_size: PaperSize::Custom {
            width_mm: 210.0,
            height_mm: 1.0e7,
        },
        ..Default::default()
    };
    match huge.validate() {
        Err(PageError::Config(msg)) => assert!(msg.contains("pixel limit")),
        other => panic!("Expected Config error, got {other:?}"),
    }

    // Largest preset the settings panel offers
    let largest = Settings {
        paper_size: PaperSize::A3,
        dpi: 1200.0,
        ..Default::default()
    };
    let (width, height) = largest.page_dimensions_px();
    assert!(width <= MAX_PAGE_SIDE_PX && height <= MAX_PAGE_SIDE_PX);
    assert!(largest.validate().is_ok());
}

#[test]
fn test_background_parsing() {
    assert_eq!(Background::from_str("white").unwrap(), Background::WHITE);
    assert_eq!(Background::from_str("Black").unwrap(), Background::BLACK);
    assert_eq!(
        Background::from_str("#0a141e").unwrap(),
        Background::rgb(10, 20, 30)
    );
    assert_eq!(
        Background::from_str("FF8000").unwrap(),
        Background::rgb(255, 128, 0)
    );
    assert!(Background::from_str("#12345").is_err());
    assert!(Background::from_str("#gggggg").is_err());
    assert_eq!(Background::rgb(255, 128, 0).to_string(), "#ff8000");
}

#[cfg(feature = "serde")]
#[test]
fn test_save_and_load_settings() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let settings = Settings {
        paper_size: PaperSize::Letter,
        orientation: Orientation::Landscape,
        dpi: 150.0,
        background: Background::rgb(1, 2, 3),
        output_dir: Some(dir.path().to_path_buf()),
        open_after_export: true,
    };
    settings.save(&path).unwrap();

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[cfg(feature = "serde")]
#[test]
fn test_partial_settings_file_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "dpi": 150.0 }"#).unwrap();

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded.dpi, 150.0);
    assert_eq!(loaded.paper_size, PaperSize::A4);
    assert_eq!(loaded.page_dimensions_px(), (1240, 1754));
}

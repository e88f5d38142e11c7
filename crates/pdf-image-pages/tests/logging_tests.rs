use image::{Rgb, RgbImage};
use log::{Level, LevelFilter, Log, Metadata, Record};
use pdf_image_pages::*;
use std::sync::Mutex;
use tempfile::TempDir;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct Capture;

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            RECORDS
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

// One test per binary: the logger is process-wide
#[test]
fn test_session_logs_each_outcome_at_info_or_warn() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Info);

    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.png");
    RgbImage::from_pixel(8, 8, Rgb([0, 0, 0])).save(&good).unwrap();
    let broken = dir.path().join("broken.png");
    std::fs::write(&broken, b"not an image").unwrap();

    let mut session = Session::new(Settings {
        paper_size: PaperSize::Custom {
            width_mm: 25.4,
            height_mm: 25.4,
        },
        dpi: 10.0,
        ..Default::default()
    })
    .unwrap();
    session.add_images(&[good, broken]);
    session.convert("album", &HeadlessDesktop::new(dir.path()), &chrono::Utc::now());

    let records = RECORDS.lock().unwrap();
    assert!(records.iter().any(|(level, msg)| *level == Level::Info && msg.starts_with("Added")));
    assert!(records.iter().any(|(level, msg)| *level == Level::Warn && msg.starts_with("Skipped")));
    assert!(records.iter().any(|(level, msg)| *level == Level::Info && msg.starts_with("Done!")));
}

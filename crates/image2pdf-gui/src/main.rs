#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod logger;
mod ui_components;
mod views;

fn main() -> eframe::Result<()> {
    let logger = logger::AppLogger::new(500);
    if let Err(e) = logger.clone().init() {
        eprintln!("Failed to install logger: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_title("Images to PDF"),
        ..Default::default()
    };

    eframe::run_native(
        "Images to PDF",
        options,
        Box::new(move |cc| Ok(Box::new(app::ImageToPdfApp::new(cc, logger)))),
    )
}

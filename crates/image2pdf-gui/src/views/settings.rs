use eframe::egui;
use pdf_image_pages::{Background, Orientation, PaperSize, Settings};

use crate::ui_components::{button_group, enum_selector};

/// Page settings panel. Page geometry is read-only while `locked`.
///
/// Returns true when `settings` was edited.
pub fn show(ui: &mut egui::Ui, settings: &mut Settings, locked: bool) -> bool {
    let mut changed = false;

    ui.heading("Page");
    ui.separator();

    ui.add_enabled_ui(!locked, |ui| {
        changed |= show_paper_size_selector(ui, &mut settings.paper_size);
        ui.add_space(5.0);

        ui.label("Orientation:");
        changed |= button_group(
            ui,
            &mut settings.orientation,
            &[
                (Orientation::Portrait, "Portrait"),
                (Orientation::Landscape, "Landscape"),
            ],
        );
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label("Resolution:");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut settings.dpi)
                        .range(36.0..=1200.0)
                        .speed(1.0)
                        .suffix(" dpi"),
                )
                .changed();
        });
    });
    if locked {
        ui.weak("Clear the files to change the page size");
    }

    let (width, height) = settings.page_dimensions_px();
    ui.label(format!("{width} × {height} px"));
    ui.add_space(5.0);

    changed |= show_background_picker(ui, &mut settings.background);

    ui.add_space(10.0);
    ui.heading("Output");
    ui.separator();

    changed |= show_output_dir(ui, settings);
    changed |= ui
        .checkbox(&mut settings.open_after_export, "Open PDF when done")
        .changed();

    ui.add_space(10.0);
    changed |= show_config_buttons(ui, settings);

    changed
}

fn show_paper_size_selector(ui: &mut egui::Ui, paper_size: &mut PaperSize) -> bool {
    let paper_sizes = [
        (PaperSize::A3, "A3"),
        (PaperSize::A4, "A4"),
        (PaperSize::A5, "A5"),
        (PaperSize::Letter, "Letter"),
        (PaperSize::Legal, "Legal"),
    ];

    enum_selector(ui, "paper_size", "Paper size:", paper_size, &paper_sizes)
}

fn show_background_picker(ui: &mut egui::Ui, background: &mut Background) -> bool {
    let mut rgb = [background.r, background.g, background.b];
    let changed = ui
        .horizontal(|ui| {
            ui.label("Background:");
            ui.color_edit_button_srgb(&mut rgb).changed()
        })
        .inner;

    if changed {
        *background = Background::rgb(rgb[0], rgb[1], rgb[2]);
    }
    changed
}

fn show_output_dir(ui: &mut egui::Ui, settings: &mut Settings) -> bool {
    let mut changed = false;

    let current = settings
        .output_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "Documents folder".to_string());
    ui.label(format!("Folder: {current}"));

    ui.horizontal(|ui| {
        if ui.button("Choose…").clicked() {
            if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                settings.output_dir = Some(dir);
                changed = true;
            }
        }
        if settings.output_dir.is_some() && ui.button("Reset").clicked() {
            settings.output_dir = None;
            changed = true;
        }
    });

    changed
}

fn show_config_buttons(ui: &mut egui::Ui, settings: &mut Settings) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        if ui.button("💾 Save Settings").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name("image2pdf.json")
                .save_file()
            {
                match settings.save(&path) {
                    Ok(()) => log::info!("Settings saved to {}", path.display()),
                    Err(e) => log::warn!("Failed to save settings: {e}"),
                }
            }
        }

        if ui.button("📂 Load Settings").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                match Settings::load(&path) {
                    Ok(loaded) => {
                        *settings = loaded;
                        changed = true;
                    }
                    Err(e) => log::warn!("Failed to load settings: {e}"),
                }
            }
        }
    });

    changed
}

use eframe::egui;
use std::path::PathBuf;

/// Numbered list of the files queued for conversion
pub fn show(ui: &mut egui::Ui, files: &[PathBuf]) {
    ui.heading(format!("Files ({})", files.len()));

    egui::ScrollArea::vertical()
        .id_salt("file_log")
        .max_height((ui.available_height() - 120.0).max(60.0))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if files.is_empty() {
                ui.weak("No files selected");
                return;
            }

            for (idx, path) in files.iter().enumerate() {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                ui.label(format!("{}. {}", idx + 1, name))
                    .on_hover_text(path.display().to_string());
            }
        });
}

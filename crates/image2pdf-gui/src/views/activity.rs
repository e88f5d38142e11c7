use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

pub fn show(ui: &mut egui::Ui, logger: &AppLogger) {
    ui.horizontal(|ui| {
        ui.strong("Activity");
        if ui.small_button("Clear log").clicked() {
            logger.clear();
        }
    });

    egui::ScrollArea::vertical()
        .id_salt("activity")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in logger.entries() {
                let line = entry.line();
                match entry.level {
                    Level::Error | Level::Warn => {
                        ui.colored_label(ui.visuals().warn_fg_color, line);
                    }
                    _ => {
                        ui.label(line);
                    }
                }
            }
        });
}

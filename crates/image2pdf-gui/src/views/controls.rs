use eframe::egui;

use crate::ui_components::{placeholder_field, tool_button};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select,
    Convert,
    Clear,
}

/// Output name field and the Select / Convert / Clear buttons
pub fn show(ui: &mut egui::Ui, name: &mut String) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label("Name:");
        placeholder_field(ui, name, "Leave blank for a timestamped name");
    });

    ui.add_space(5.0);

    ui.horizontal(|ui| {
        if tool_button(ui, "📂 Select", "Add images; each becomes one page") {
            action = Some(Action::Select);
        }
        if tool_button(ui, "📄 Convert", "Save all pages as one PDF") {
            action = Some(Action::Convert);
        }
        if tool_button(ui, "🗑 Clear", "Remove all selected files") {
            action = Some(Action::Clear);
        }
    });

    action
}

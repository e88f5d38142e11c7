use eframe::egui;

/// ComboBox over a fixed set of labelled values
pub fn enum_selector<T>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[(T, &str)],
) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);

        let selected = options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, text)| *text)
            .unwrap_or("Custom");

        egui::ComboBox::from_id_salt(id)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for (option, text) in options {
                    changed |= ui.selectable_value(value, option.clone(), *text).changed();
                }
            });
    });
    changed
}

/// Row of toggle buttons, one per value
pub fn button_group<T>(ui: &mut egui::Ui, value: &mut T, options: &[(T, &str)]) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        for (option, text) in options {
            changed |= ui.selectable_value(value, option.clone(), *text).changed();
        }
    });
    changed
}

/// Button with a hover tooltip; returns whether it was clicked
pub fn tool_button(ui: &mut egui::Ui, text: &str, tooltip: &str) -> bool {
    ui.add(egui::Button::new(text).min_size(egui::vec2(96.0, 28.0)))
        .on_hover_text(tooltip)
        .clicked()
}

/// Single-line text field showing `placeholder` while empty
pub fn placeholder_field(ui: &mut egui::Ui, text: &mut String, placeholder: &str) -> bool {
    ui.add(
        egui::TextEdit::singleline(text)
            .hint_text(placeholder)
            .desired_width(f32::INFINITY),
    )
    .changed()
}

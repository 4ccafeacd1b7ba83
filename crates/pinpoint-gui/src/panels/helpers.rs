/// Show a ComboBox for enum selection.
pub(crate) fn enum_combo<T: PartialEq + Copy + ToString>(
    ui: &mut egui::Ui,
    label: &str,
    current: &mut T,
    options: &[T],
) {
    egui::ComboBox::from_label(label)
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            for &choice in options {
                ui.selectable_value(current, choice, choice.to_string());
            }
        });
}

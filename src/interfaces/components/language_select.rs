use crate::domain::ports::SelectWidget;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::SelectViewModel;
use eframe::egui;

/// Renders a language select as a combo box.
///
/// Returns the newly chosen value when the user picks a different option
/// (the change event); the view model is already updated at that point.
pub fn render_language_select(
    ui: &mut egui::Ui,
    label: &str,
    select: &mut SelectViewModel,
) -> Option<String> {
    let mut picked: Option<String> = None;

    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY),
        );

        ui.add_enabled_ui(select.is_enabled(), |ui| {
            let current_value = select.value().map(str::to_string);
            let current_label = select.selected_label().unwrap_or("Loading...").to_string();

            egui::ComboBox::from_id_salt(select.id)
                .selected_text(current_label)
                .width(220.0)
                .show_ui(ui, |ui| {
                    for option in select.options() {
                        let is_current = current_value.as_deref() == Some(option.value.as_str());
                        if ui
                            .selectable_label(is_current, option.label.as_str())
                            .clicked()
                            && !is_current
                        {
                            picked = Some(option.value.clone());
                        }
                    }
                });
        });
    });

    picked.filter(|value| select.choose(value))
}

use crate::domain::ui::Alert;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Renders the alerts container. Returns the index of a dismissed alert.
pub fn render_alerts(ui: &mut egui::Ui, alerts: &[Alert]) -> Option<usize> {
    let mut dismissed = None;

    for (i, alert) in alerts.iter().enumerate() {
        DesignSystem::alert_frame(alert.level).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&alert.text)
                        .color(DesignSystem::alert_color(alert.level))
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        dismissed = Some(i);
                    }
                });
            });
        });
        ui.add_space(DesignSystem::SPACING_SMALL);
    }

    dismissed
}

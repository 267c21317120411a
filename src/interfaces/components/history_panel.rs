use crate::domain::translation::{TranslationRecord, TranslationStatus};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::{HistoryContent, PageViewModel};
use eframe::egui;

fn status_color(status: &TranslationStatus) -> egui::Color32 {
    match status {
        TranslationStatus::Completed => DesignSystem::SUCCESS,
        TranslationStatus::New | TranslationStatus::Translating => DesignSystem::ACCENT_SECONDARY,
        TranslationStatus::Other(_) => DesignSystem::TEXT_MUTED,
    }
}

/// Renders the translation-history container
pub fn render_history(ui: &mut egui::Ui, page: &PageViewModel) {
    if let Some(spinner) = &page.spinner {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(
                egui::RichText::new(spinner.screen_reader_text).color(DesignSystem::TEXT_SECONDARY),
            );
        });
        return;
    }

    let html = match &page.history {
        HistoryContent::Html(html) => Some(html.as_str()),
        HistoryContent::Empty => None,
    };

    // Backends without the JSON listing only provide the fragment.
    if page.history_records.is_empty() {
        if let Some(html) = html {
            render_fragment(ui, html);
        }
        return;
    }

    render_records(ui, &page.history_records);

    if let Some(html) = html {
        ui.add_space(DesignSystem::SPACING_SMALL);
        egui::CollapsingHeader::new("Rendered fragment")
            .id_salt("translation-history-html")
            .show(ui, |ui| render_fragment(ui, html));
    }
}

fn render_fragment(ui: &mut egui::Ui, html: &str) {
    egui::ScrollArea::vertical()
        .id_salt("translation-history-html-scroll")
        .max_height(200.0)
        .show(ui, |ui| {
            ui.label(egui::RichText::new(html).monospace().size(11.0));
        });
}

fn render_records(ui: &mut egui::Ui, records: &[TranslationRecord]) {
    egui::ScrollArea::vertical()
        .id_salt("translation-history-scroll")
        .max_height(360.0)
        .show(ui, |ui| {
            egui::Grid::new("translation-history-grid")
                .num_columns(5)
                .striped(true)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for header in ["Status", "Pair", "Text", "Translation", "Updated"] {
                        ui.label(
                            egui::RichText::new(header)
                                .strong()
                                .color(DesignSystem::TEXT_SECONDARY),
                        );
                    }
                    ui.end_row();

                    for record in records {
                        ui.label(
                            egui::RichText::new(record.status.to_string())
                                .color(status_color(&record.status)),
                        );
                        ui.label(format!(
                            "{} → {}",
                            record.source_language, record.target_language
                        ));
                        ui.label(record.text.as_str());
                        ui.label(record.translated_text.as_deref().unwrap_or("-"));
                        ui.label(
                            egui::RichText::new(
                                record.date_updated.format("%Y-%m-%d %H:%M").to_string(),
                            )
                            .color(DesignSystem::TEXT_MUTED),
                        );
                        ui.end_row();
                    }
                });
        });
}

use crate::application::client::PageClient;
use crate::application::page_controller::PageController;
use crate::application::page_loader::{PageEvent, PageResource};
use crate::config::SelectionDefaults;
use crate::domain::ports::PageSurface;
use crate::domain::ui::create_loading_spinner;
use crate::interfaces::components::alert_banner::render_alerts;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::history_panel::render_history;
use crate::interfaces::components::language_select::render_language_select;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::{PageViewModel, SelectViewModel};
use eframe::egui;
use std::collections::VecDeque;
use std::time::Duration;

const MAX_LOG_LINES: usize = 200;

/// The translation page: language selects, request form and history.
pub struct TranslationPageApp {
    client: PageClient,
    controller: PageController<PageViewModel, SelectViewModel>,
    text_input: String,
    submitting: bool,
    logs: VecDeque<String>,
    show_logs: bool,
}

impl TranslationPageApp {
    pub fn new(client: PageClient, defaults: SelectionDefaults) -> Self {
        let mut controller = PageController::new(
            PageViewModel::new(),
            SelectViewModel::new("source-language"),
            SelectViewModel::new("target-language"),
            defaults,
        );
        controller.begin_loading();
        client.load_page();

        Self {
            client,
            controller,
            text_input: String::new(),
            submitting: false,
            logs: VecDeque::new(),
            show_logs: false,
        }
    }

    /// Apply every fetch that completed since the last frame.
    fn process_events(&mut self) {
        while let Some(event) = self.client.poll_next() {
            let submitted = matches!(event, PageEvent::TranslationSubmitted(_));
            if submitted
                || matches!(
                    event,
                    PageEvent::FetchFailed {
                        resource: PageResource::Submission,
                        ..
                    }
                )
            {
                self.submitting = false;
            }

            self.controller.apply(event);

            if submitted {
                self.text_input.clear();
                self.controller
                    .page
                    .show_history_spinner(create_loading_spinner());
                self.client.reload_history();
            }
        }

        while let Some(line) = self.client.poll_log() {
            if self.logs.len() == MAX_LOG_LINES {
                self.logs.pop_front();
            }
            self.logs.push_back(line);
        }
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        Card::new().title("NEW TRANSLATION").show(ui, |ui| {
            let mut source_change = None;
            ui.horizontal(|ui| {
                source_change =
                    render_language_select(ui, "From", &mut self.controller.source_select);
                ui.add_space(DesignSystem::SPACING_MEDIUM);
                render_language_select(ui, "To", &mut self.controller.target_select);
            });

            if let Some(code) = source_change {
                self.controller.on_source_changed(&code);
            }

            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.add(
                egui::TextEdit::multiline(&mut self.text_input)
                    .hint_text("Text to translate")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);

            let can_submit = self.controller.is_ready() && !self.submitting;
            ui.horizontal(|ui| {
                let button = egui::Button::new(
                    egui::RichText::new("Translate")
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                )
                .fill(DesignSystem::ACCENT_PRIMARY)
                .min_size(egui::vec2(120.0, 32.0));

                if ui.add_enabled(can_submit, button).clicked()
                    && let Some(request) = self.controller.prepare_submission(&self.text_input)
                {
                    self.submitting = true;
                    self.client.submit(request);
                }

                if self.submitting {
                    ui.spinner();
                }
            });
        });
    }
}

impl eframe::App for TranslationPageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        self.process_events();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Cervantes");
                ui.separator();
                ui.label(
                    egui::RichText::new("Translation requests")
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.toggle_value(&mut self.show_logs, "Logs");
                });
            });
        });

        if self.show_logs {
            egui::TopBottomPanel::bottom("log_panel")
                .resizable(true)
                .default_height(160.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for line in &self.logs {
                                ui.label(
                                    egui::RichText::new(line.trim_end())
                                        .monospace()
                                        .size(11.0)
                                        .color(egui::Color32::from_gray(200)),
                                );
                            }
                        });
                });
        }

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                if let Some(index) = render_alerts(ui, &self.controller.page.alerts) {
                    self.controller.page.dismiss_alert(index);
                }

                self.render_form(ui);
                ui.add_space(DesignSystem::SPACING_MEDIUM);

                Card::new()
                    .title("TRANSLATION HISTORY")
                    .min_height(120.0)
                    .show(ui, |ui| render_history(ui, &self.controller.page));
            });

        // Fetch results arrive from the background runtime between frames.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

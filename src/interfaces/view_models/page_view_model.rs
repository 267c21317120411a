use crate::domain::ports::PageSurface;
use crate::domain::translation::TranslationRecord;
use crate::domain::ui::{Alert, LoadingSpinner};

/// Contents of the translation-history container.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HistoryContent {
    #[default]
    Empty,
    Html(String),
}

/// Alerts and history containers of the translation page.
#[derive(Debug, Clone, Default)]
pub struct PageViewModel {
    pub alerts: Vec<Alert>,
    pub history: HistoryContent,
    pub history_records: Vec<TranslationRecord>,
    pub spinner: Option<LoadingSpinner>,
}

impl PageViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading_history(&self) -> bool {
        self.spinner.is_some()
    }

    pub fn dismiss_alert(&mut self, index: usize) {
        if index < self.alerts.len() {
            self.alerts.remove(index);
        }
    }
}

impl PageSurface for PageViewModel {
    fn append_alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    fn show_history_spinner(&mut self, spinner: LoadingSpinner) {
        self.spinner = Some(spinner);
    }

    fn hide_history_spinner(&mut self) {
        self.spinner = None;
    }

    fn set_history_html(&mut self, html: String) {
        self.history = HistoryContent::Html(html);
    }

    fn set_history_records(&mut self, records: Vec<TranslationRecord>) {
        self.history_records = records;
    }
}

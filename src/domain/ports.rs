use crate::domain::errors::FetchError;
use crate::domain::language::LanguagePairRecord;
use crate::domain::translation::{TranslationRecord, TranslationRequest};
use crate::domain::ui::{Alert, LoadingSpinner, SelectOption};
use async_trait::async_trait;

#[async_trait]
pub trait LanguagePairSource: Send + Sync {
    async fn fetch_language_pairs(&self) -> Result<Vec<LanguagePairRecord>, FetchError>;
}

#[async_trait]
pub trait TranslationHistorySource: Send + Sync {
    /// Rendered history fragment, injected verbatim into the page.
    async fn fetch_history_html(&self) -> Result<String, FetchError>;
    async fn fetch_history_records(&self) -> Result<Vec<TranslationRecord>, FetchError>;
}

#[async_trait]
pub trait TranslationSubmitter: Send + Sync {
    async fn submit_translation(&self, request: &TranslationRequest) -> Result<(), FetchError>;
}

/// A single-choice selection control (a `<select>` on the web page, a combo
/// box on the desktop page).
pub trait SelectWidget {
    fn clear(&mut self);
    fn append_option(&mut self, option: SelectOption);
    fn options(&self) -> &[SelectOption];
    fn set_enabled(&mut self, enabled: bool);
    fn is_enabled(&self) -> bool;

    /// Current value: the option marked selected, else the first option.
    fn value(&self) -> Option<&str> {
        let options = self.options();
        options
            .iter()
            .find(|o| o.selected)
            .or_else(|| options.first())
            .map(|o| o.value.as_str())
    }
}

/// The non-select parts of the page: the alerts container and the
/// translation-history container.
pub trait PageSurface {
    fn append_alert(&mut self, alert: Alert);
    fn show_history_spinner(&mut self, spinner: LoadingSpinner);
    fn hide_history_spinner(&mut self);
    fn set_history_html(&mut self, html: String);
    fn set_history_records(&mut self, records: Vec<TranslationRecord>);
}

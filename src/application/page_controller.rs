//! UI-thread side of the translation page.
//!
//! Applies [PageEvent]s to the page in one synchronous step and turns user
//! input (source changes, form submission) into widget updates or
//! validated requests.

use crate::application::page_loader::{PageEvent, PageResource};
use crate::application::select_synchronizer::SelectSynchronizer;
use crate::config::SelectionDefaults;
use crate::domain::errors::{FetchError, SubmissionError};
use crate::domain::language::LanguageIndex;
use crate::domain::ports::{PageSurface, SelectWidget};
use crate::domain::translation::TranslationRequest;
use crate::domain::ui::{
    BACKEND_UNAVAILABLE_MESSAGE, MISSING_INPUTS_MESSAGE, UNSUPPORTED_PAIR_MESSAGE,
    create_danger_alert, create_loading_spinner, create_success_alert,
};
use tracing::{error, info, warn};

pub struct PageController<P, W> {
    pub page: P,
    pub source_select: W,
    pub target_select: W,
    defaults: SelectionDefaults,
    synchronizer: Option<SelectSynchronizer>,
}

impl<P: PageSurface, W: SelectWidget> PageController<P, W> {
    pub fn new(page: P, source_select: W, target_select: W, defaults: SelectionDefaults) -> Self {
        Self {
            page,
            source_select,
            target_select,
            defaults,
            synchronizer: None,
        }
    }

    /// Put the page in its pre-fetch state: selects disabled, history
    /// spinner showing.
    pub fn begin_loading(&mut self) {
        self.source_select.set_enabled(false);
        self.target_select.set_enabled(false);
        self.page.show_history_spinner(create_loading_spinner());
    }

    pub fn is_ready(&self) -> bool {
        self.synchronizer.as_ref().is_some_and(|s| s.is_armed())
    }

    pub fn language_index(&self) -> Option<&LanguageIndex> {
        self.synchronizer.as_ref().map(|s| s.index())
    }

    pub fn apply(&mut self, event: PageEvent) {
        match event {
            PageEvent::LanguagePairsLoaded(records) => {
                info!("Received {} language pairs", records.len());
                let mut synchronizer =
                    SelectSynchronizer::from_records(&records, self.defaults.clone());
                if let Err(e) =
                    synchronizer.initialize(&mut self.source_select, &mut self.target_select)
                {
                    error!("Failed to initialize language selects: {}", e);
                }
                self.synchronizer = Some(synchronizer);
            }
            PageEvent::HistoryLoaded(html) => {
                self.page.set_history_html(html);
                self.page.hide_history_spinner();
            }
            PageEvent::HistoryRecordsLoaded(records) => {
                self.page.set_history_records(records);
            }
            PageEvent::TranslationSubmitted(request) => {
                info!(
                    "Translation request {} -> {} accepted",
                    request.source_language, request.target_language
                );
                self.page
                    .append_alert(create_success_alert("Translation requested!"));
            }
            PageEvent::FetchFailed { resource, error } => self.report_fetch_failure(resource, &error),
        }
    }

    /// Log the failure and show the generic danger alert. The content the
    /// fetch was meant to fill is left untouched.
    fn report_fetch_failure(&mut self, resource: PageResource, fetch_error: &FetchError) {
        // Backends that only render the HTML fragment cannot answer the
        // records query; the fragment remains the history shown.
        if resource == PageResource::HistoryRecords {
            warn!("Structured history unavailable: {}", fetch_error);
            return;
        }

        error!("{:?} fetch failed: {}", resource, fetch_error);
        if resource == PageResource::History {
            self.page.hide_history_spinner();
        }
        self.page
            .append_alert(create_danger_alert(BACKEND_UNAVAILABLE_MESSAGE));
    }

    /// The source select's value changed to `source_code`.
    pub fn on_source_changed(&mut self, source_code: &str) {
        let Some(synchronizer) = self.synchronizer.as_ref() else {
            warn!("Source changed to '{}' before language pairs arrived", source_code);
            return;
        };

        if let Err(e) = synchronizer.on_source_change(&mut self.target_select, source_code) {
            error!("Failed to update target languages: {}", e);
        }
    }

    /// Validate the form against the current selections. Validation
    /// failures are shown as a danger alert and nothing is returned.
    pub fn prepare_submission(&mut self, text: &str) -> Option<TranslationRequest> {
        let request = TranslationRequest::new(
            self.source_select.value().unwrap_or_default(),
            self.target_select.value().unwrap_or_default(),
            text,
        );

        let empty = LanguageIndex::default();
        let index = self.language_index().unwrap_or(&empty);

        match request.validate(index) {
            Ok(()) => Some(request),
            Err(e) => {
                warn!("Rejected translation request: {}", e);
                let message = match e {
                    SubmissionError::MissingInputs { .. } => MISSING_INPUTS_MESSAGE,
                    SubmissionError::UnsupportedPair { .. } => UNSUPPORTED_PAIR_MESSAGE,
                    SubmissionError::Fetch(_) => BACKEND_UNAVAILABLE_MESSAGE,
                };
                self.page.append_alert(create_danger_alert(message));
                None
            }
        }
    }
}

//! Network side of the translation page.
//!
//! Each fetch resolves into a [PageEvent] that is handed to the UI thread.
//! The language-pairs fetch and the history fetch are independent and are
//! delivered in whatever order they complete.

use crate::domain::errors::FetchError;
use crate::domain::language::LanguagePairRecord;
use crate::domain::ports::{LanguagePairSource, TranslationHistorySource, TranslationSubmitter};
use crate::domain::translation::{TranslationRecord, TranslationRequest};
use crossbeam_channel::Sender;
use std::sync::Arc;
use tracing::{debug, warn};

/// What a fetch was for, so a failure can be routed to the right container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageResource {
    LanguagePairs,
    History,
    HistoryRecords,
    Submission,
}

/// A completed network call, ready to be applied to the page
#[derive(Debug, Clone)]
pub enum PageEvent {
    LanguagePairsLoaded(Vec<LanguagePairRecord>),
    HistoryLoaded(String),
    HistoryRecordsLoaded(Vec<TranslationRecord>),
    TranslationSubmitted(TranslationRequest),
    FetchFailed {
        resource: PageResource,
        error: FetchError,
    },
}

#[derive(Clone)]
pub struct PageLoader {
    pairs: Arc<dyn LanguagePairSource>,
    history: Arc<dyn TranslationHistorySource>,
    submitter: Arc<dyn TranslationSubmitter>,
}

impl PageLoader {
    pub fn new(
        pairs: Arc<dyn LanguagePairSource>,
        history: Arc<dyn TranslationHistorySource>,
        submitter: Arc<dyn TranslationSubmitter>,
    ) -> Self {
        Self {
            pairs,
            history,
            submitter,
        }
    }

    /// Build a loader whose every port is served by one backend.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: LanguagePairSource + TranslationHistorySource + TranslationSubmitter + 'static,
    {
        Self::new(backend.clone(), backend.clone(), backend)
    }

    pub async fn load_language_pairs(&self) -> PageEvent {
        match self.pairs.fetch_language_pairs().await {
            Ok(records) => PageEvent::LanguagePairsLoaded(records),
            Err(error) => PageEvent::FetchFailed {
                resource: PageResource::LanguagePairs,
                error,
            },
        }
    }

    pub async fn load_history(&self) -> PageEvent {
        match self.history.fetch_history_html().await {
            Ok(html) => PageEvent::HistoryLoaded(html),
            Err(error) => PageEvent::FetchFailed {
                resource: PageResource::History,
                error,
            },
        }
    }

    pub async fn load_history_records(&self) -> PageEvent {
        match self.history.fetch_history_records().await {
            Ok(records) => PageEvent::HistoryRecordsLoaded(records),
            Err(error) => PageEvent::FetchFailed {
                resource: PageResource::HistoryRecords,
                error,
            },
        }
    }

    pub async fn submit(&self, request: TranslationRequest) -> PageEvent {
        match self.submitter.submit_translation(&request).await {
            Ok(()) => PageEvent::TranslationSubmitted(request),
            Err(error) => PageEvent::FetchFailed {
                resource: PageResource::Submission,
                error,
            },
        }
    }

    /// Page-load sequence: fetch the history (fragment and records) and the
    /// language pairs concurrently, sending each outcome as soon as it is
    /// known.
    pub async fn load_page(&self, events: &Sender<PageEvent>) {
        tokio::join!(
            async {
                send_event(events, self.load_language_pairs().await);
            },
            async {
                send_event(events, self.load_history().await);
            },
            async {
                send_event(events, self.load_history_records().await);
            },
        );

        debug!("Page load fetches finished");
    }
}

/// Hand an outcome to the page. Returns `false` when the page is gone.
pub fn send_event(events: &Sender<PageEvent>, event: PageEvent) -> bool {
    if events.send(event).is_err() {
        warn!("Page closed before a fetch completed; dropping result");
        return false;
    }
    true
}

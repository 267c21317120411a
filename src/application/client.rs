use crate::application::page_loader::{PageEvent, PageLoader, send_event};
use crate::domain::translation::TranslationRequest;
use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Handle;
use tracing::info;

/// A client interface between the UI thread and the background runtime.
/// Fetches are spawned on the runtime; their outcomes come back as
/// [PageEvent]s the UI drains once per frame.
pub struct PageClient {
    loader: PageLoader,
    runtime: Handle,
    events_tx: Sender<PageEvent>,
    events_rx: Receiver<PageEvent>,
    log_rx: Option<Receiver<String>>,
}

impl PageClient {
    pub fn new(loader: PageLoader, runtime: Handle) -> Self {
        let (events_tx, events_rx) = crossbeam_channel::unbounded();
        Self {
            loader,
            runtime,
            events_tx,
            events_rx,
            log_rx: None,
        }
    }

    /// Mirror log lines into the page (desktop log panel).
    pub fn with_log_receiver(mut self, log_rx: Receiver<String>) -> Self {
        self.log_rx = Some(log_rx);
        self
    }

    /// Kick off the page-load fetches.
    pub fn load_page(&self) {
        info!("Loading translation page...");
        let loader = self.loader.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            loader.load_page(&tx).await;
        });
    }

    /// Refresh the history after a submission.
    pub fn reload_history(&self) {
        let loader = self.loader.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            send_event(&tx, loader.load_history().await);
            send_event(&tx, loader.load_history_records().await);
        });
    }

    pub fn submit(&self, request: TranslationRequest) {
        let loader = self.loader.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            send_event(&tx, loader.submit(request).await);
        });
    }

    /// Non-blocking poll for the next completed fetch.
    pub fn poll_next(&self) -> Option<PageEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Non-blocking poll for the next log line.
    pub fn poll_log(&self) -> Option<String> {
        self.log_rx.as_ref().and_then(|rx| rx.try_recv().ok())
    }
}

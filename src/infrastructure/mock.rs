use crate::domain::errors::FetchError;
use crate::domain::language::{Language, LanguagePairRecord};
use crate::domain::ports::{LanguagePairSource, TranslationHistorySource, TranslationSubmitter};
use crate::domain::translation::{TranslationRecord, TranslationRequest};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use tracing::info;

/// In-memory stand-in for the translation backend.
///
/// Every response can be set to succeed or fail independently so page flows
/// can be exercised without a network.
#[derive(Clone)]
pub struct MockCervantesBackend {
    pairs: Arc<RwLock<Result<Vec<LanguagePairRecord>, FetchError>>>,
    history_html: Arc<RwLock<Result<String, FetchError>>>,
    records: Arc<RwLock<Result<Vec<TranslationRecord>, FetchError>>>,
    submit_failure: Arc<RwLock<Option<FetchError>>>,
    submissions: Arc<RwLock<Vec<TranslationRequest>>>,
    pair_requests: Arc<AtomicUsize>,
}

impl MockCervantesBackend {
    pub fn new() -> Self {
        Self {
            pairs: Arc::new(RwLock::new(Ok(sample_language_pairs()))),
            history_html: Arc::new(RwLock::new(Ok(String::new()))),
            records: Arc::new(RwLock::new(Ok(Vec::new()))),
            submit_failure: Arc::new(RwLock::new(None)),
            submissions: Arc::new(RwLock::new(Vec::new())),
            pair_requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn set_language_pairs(&self, pairs: Result<Vec<LanguagePairRecord>, FetchError>) {
        *self.pairs.write().await = pairs;
    }

    pub async fn set_history_html(&self, html: Result<String, FetchError>) {
        *self.history_html.write().await = html;
    }

    pub async fn set_history_records(&self, records: Result<Vec<TranslationRecord>, FetchError>) {
        *self.records.write().await = records;
    }

    pub async fn fail_submissions(&self, error: Option<FetchError>) {
        *self.submit_failure.write().await = error;
    }

    pub async fn submissions(&self) -> Vec<TranslationRequest> {
        self.submissions.read().await.clone()
    }

    pub fn language_pair_requests(&self) -> usize {
        self.pair_requests.load(Ordering::Relaxed)
    }
}

impl Default for MockCervantesBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// A small pair list in the backend's order.
pub fn sample_language_pairs() -> Vec<LanguagePairRecord> {
    let en = Language::new("en", "English");
    let es = Language::new("es", "Spanish");
    let fr = Language::new("fr", "French");
    let de = Language::new("de", "German");
    let pt = Language::new("pt", "Portuguese");

    vec![
        LanguagePairRecord::new(en.clone(), es.clone()),
        LanguagePairRecord::new(en.clone(), fr),
        LanguagePairRecord::new(de, en.clone()),
        LanguagePairRecord::new(pt.clone(), en),
        LanguagePairRecord::new(pt, es),
    ]
}

#[async_trait]
impl LanguagePairSource for MockCervantesBackend {
    async fn fetch_language_pairs(&self) -> Result<Vec<LanguagePairRecord>, FetchError> {
        self.pair_requests.fetch_add(1, Ordering::Relaxed);
        self.pairs.read().await.clone()
    }
}

#[async_trait]
impl TranslationHistorySource for MockCervantesBackend {
    async fn fetch_history_html(&self) -> Result<String, FetchError> {
        self.history_html.read().await.clone()
    }

    async fn fetch_history_records(&self) -> Result<Vec<TranslationRecord>, FetchError> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl TranslationSubmitter for MockCervantesBackend {
    async fn submit_translation(&self, request: &TranslationRequest) -> Result<(), FetchError> {
        if let Some(error) = self.submit_failure.read().await.clone() {
            return Err(error);
        }

        info!(
            "MockCervantesBackend: accepted {} -> {} request",
            request.source_language, request.target_language
        );
        self.submissions.write().await.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend_switches_outcomes() {
        let backend = MockCervantesBackend::new();
        assert_eq!(backend.fetch_language_pairs().await.unwrap().len(), 5);

        backend
            .set_language_pairs(Err(FetchError::Http {
                endpoint: "translations/language_pairs".to_string(),
                status: 500,
            }))
            .await;
        assert!(backend.fetch_language_pairs().await.is_err());
        assert_eq!(backend.language_pair_requests(), 2);
    }

    #[test]
    fn test_sample_pairs_build_index() {
        let backend = MockCervantesBackend::new();
        let records = tokio_test::block_on(backend.fetch_language_pairs()).unwrap();

        let index = crate::domain::language::LanguageIndex::build(&records);
        let sources: Vec<&str> = index.iter().map(|(code, _)| code).collect();
        assert_eq!(sources, vec!["en", "de", "pt"]);
        assert!(index.supports("pt", "es"));
        assert!(!index.supports("es", "en"));
    }

    #[tokio::test]
    async fn test_mock_backend_records_submissions() {
        let backend = MockCervantesBackend::new();
        let request = TranslationRequest::new("en", "es", "Hello");

        backend.submit_translation(&request).await.unwrap();
        assert_eq!(backend.submissions().await, vec![request]);
    }
}

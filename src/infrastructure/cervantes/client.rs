//! HTTP adapter for the Cervantes translation backend.

use crate::config::HttpEnvConfig;
use crate::domain::errors::FetchError;
use crate::domain::language::{LanguagePairRecord, decode_language_pairs};
use crate::domain::ports::{LanguagePairSource, TranslationHistorySource, TranslationSubmitter};
use crate::domain::translation::{TranslationRecord, TranslationRequest};
use crate::infrastructure::core::http_client_factory::{HttpClientFactory, endpoint_url};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info};
use url::Url;

pub const LANGUAGE_PAIRS_PATH: &str = "translations/language_pairs";
pub const TRANSLATIONS_PATH: &str = "translations/";

pub struct CervantesApiClient {
    client: Client,
    base_url: Url,
}

impl CervantesApiClient {
    pub fn new(config: &HttpEnvConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClientFactory::create_client(config)?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<Url, FetchError> {
        endpoint_url(&self.base_url, path).map_err(|e| FetchError::Transport {
            endpoint: path.to_string(),
            reason: format!("Invalid endpoint URL: {}", e),
        })
    }

    /// GET an endpoint and require a `200 OK`.
    async fn get_ok(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, FetchError> {
        let url = self.url_for(path)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| transport(path, e))?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Http {
                endpoint: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response)
    }
}

fn transport(endpoint: &str, error: impl std::fmt::Display) -> FetchError {
    FetchError::Transport {
        endpoint: endpoint.to_string(),
        reason: error.to_string(),
    }
}

#[async_trait]
impl LanguagePairSource for CervantesApiClient {
    async fn fetch_language_pairs(&self) -> Result<Vec<LanguagePairRecord>, FetchError> {
        info!("Fetching language pairs from {}...", self.base_url);

        let payload: serde_json::Value = self
            .get_ok(LANGUAGE_PAIRS_PATH, &[])
            .await?
            .json()
            .await
            .map_err(|e| transport(LANGUAGE_PAIRS_PATH, e))?;

        let records = decode_language_pairs(payload);
        info!("Fetched {} language pairs", records.len());
        Ok(records)
    }
}

#[async_trait]
impl TranslationHistorySource for CervantesApiClient {
    async fn fetch_history_html(&self) -> Result<String, FetchError> {
        info!("Fetching translation history...");

        let html = self
            .get_ok(TRANSLATIONS_PATH, &[])
            .await?
            .text()
            .await
            .map_err(|e| transport(TRANSLATIONS_PATH, e))?;

        debug!("Fetched translation history fragment ({} bytes)", html.len());
        Ok(html)
    }

    async fn fetch_history_records(&self) -> Result<Vec<TranslationRecord>, FetchError> {
        let records: Vec<TranslationRecord> = self
            .get_ok(TRANSLATIONS_PATH, &[("format", "json")])
            .await?
            .json()
            .await
            .map_err(|e| transport(TRANSLATIONS_PATH, e))?;

        info!("Fetched {} translation records", records.len());
        Ok(records)
    }
}

#[async_trait]
impl TranslationSubmitter for CervantesApiClient {
    async fn submit_translation(&self, request: &TranslationRequest) -> Result<(), FetchError> {
        let url = self.url_for(TRANSLATIONS_PATH)?;
        info!(
            "Submitting translation {} -> {} ({} chars)",
            request.source_language,
            request.target_language,
            request.text.chars().count()
        );

        // The backend answers with a redirect back to the index page.
        let response = self
            .client
            .post(url)
            .form(&request.form_fields())
            .send()
            .await
            .map_err(|e| transport(TRANSLATIONS_PATH, e))?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(FetchError::Http {
                endpoint: TRANSLATIONS_PATH.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

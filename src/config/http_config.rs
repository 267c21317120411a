//! Backend connection configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Where the translation backend lives and how long to wait for it
#[derive(Debug, Clone)]
pub struct HttpEnvConfig {
    pub base_url: Url,
    /// Whole-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl Default for HttpEnvConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            request_timeout: None,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl HttpEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url = lookup("CERVANTES_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url)
            .with_context(|| format!("Invalid CERVANTES_BASE_URL: {}", raw_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("CERVANTES_BASE_URL must be an http(s) URL, got {}", raw_url);
        }

        let request_timeout = lookup("CERVANTES_REQUEST_TIMEOUT_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("CERVANTES_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let connect_timeout = lookup("CERVANTES_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)
            .context("CERVANTES_CONNECT_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            base_url,
            request_timeout,
            connect_timeout,
        })
    }
}

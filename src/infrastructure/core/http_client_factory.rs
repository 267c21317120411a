use crate::config::HttpEnvConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the HTTP client used for every backend call.
    ///
    /// Failed requests are reported once and never retried.
    pub fn create_client(config: &HttpEnvConfig) -> Result<Client> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(2)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("cervantes/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().context("Failed to build HTTP client")
    }
}

/// Resolve an endpoint path against the backend base URL.
///
/// The base is treated as a directory so a path prefix such as
/// `https://host/app` is kept: `translations/` resolves to
/// `https://host/app/translations/`.
pub fn endpoint_url(base_url: &Url, path: &str) -> Result<Url, url::ParseError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    base.join(path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_at_root() {
        let base = Url::parse("http://127.0.0.1:5000").unwrap();
        let url = endpoint_url(&base, "/translations/language_pairs").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/translations/language_pairs");
    }

    #[test]
    fn test_endpoint_url_keeps_path_prefix() {
        let base = Url::parse("https://example.com/app").unwrap();
        let url = endpoint_url(&base, "translations/").unwrap();
        assert_eq!(url.as_str(), "https://example.com/app/translations/");
    }

    #[test]
    fn test_create_client_with_timeout() {
        let config = HttpEnvConfig {
            request_timeout: Some(std::time::Duration::from_secs(5)),
            ..HttpEnvConfig::default()
        };
        assert!(HttpClientFactory::create_client(&config).is_ok());
    }
}

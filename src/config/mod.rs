//! Configuration module for Cervantes.
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honoured by the binaries), organized by concern: backend connection and
//! default selections.

mod http_config;
mod selection_config;

pub use http_config::{DEFAULT_BASE_URL, HttpEnvConfig};
pub use selection_config::{DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, SelectionDefaults};

use anyhow::{Context, Result};
use std::env;

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub http: HttpEnvConfig,
    pub selection: SelectionDefaults,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let http = HttpEnvConfig::from_lookup(&lookup).context("Failed to load HTTP config")?;
        let selection = SelectionDefaults::from_lookup(&lookup);

        Ok(Self { http, selection })
    }
}

use thiserror::Error;

/// Failures fetching from the translation backend
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("{endpoint} returned HTTP {status}")]
    Http { endpoint: String, status: u16 },

    #[error("Request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },
}

impl FetchError {
    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::Http { endpoint, .. } | FetchError::Transport { endpoint, .. } => endpoint,
        }
    }
}

/// Errors keeping the language selects in sync
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("Unknown source language: {code}")]
    UnknownSourceLanguage { code: String },
}

/// Errors submitting a new translation request
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    #[error("Missing required inputs: {}", .fields.join(", "))]
    MissingInputs { fields: Vec<&'static str> },

    #[error("Language pair {source_code} -> {target_code} is not available")]
    UnsupportedPair {
        source_code: String,
        target_code: String,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

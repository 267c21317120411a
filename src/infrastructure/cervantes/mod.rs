//! Cervantes backend infrastructure.
//!
//! Provides [CervantesApiClient], the reqwest-backed implementation of the
//! language-pair, history and submission ports.

pub mod client;

pub use client::{CervantesApiClient, LANGUAGE_PAIRS_PATH, TRANSLATIONS_PATH};

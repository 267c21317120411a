// Language pairs and the source -> targets index
pub mod language;

// Translation requests and history records
pub mod translation;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;

// Page building blocks (options, alerts, spinner)
pub mod ui;

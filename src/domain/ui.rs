//! Page building blocks shared by every surface: select options, alert
//! banners and the loading spinner.

/// Shown for any failed call to the backend.
pub const BACKEND_UNAVAILABLE_MESSAGE: &str =
    "Uh oh - Unbabel isn't picking up the phone. Try again later, please.";

pub const MISSING_INPUTS_MESSAGE: &str = "Please submit all required inputs!";

pub const UNSUPPORTED_PAIR_MESSAGE: &str =
    "Our robots are still learning how to translate that, sorry! Try another language pair please.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Danger,
    Success,
}

impl AlertLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertLevel::Danger => "alert alert-danger",
            AlertLevel::Success => "alert alert-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub text: String,
}

pub fn create_danger_alert(text: impl Into<String>) -> Alert {
    Alert {
        level: AlertLevel::Danger,
        text: text.into(),
    }
}

pub fn create_success_alert(text: impl Into<String>) -> Alert {
    Alert {
        level: AlertLevel::Success,
        text: text.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingSpinner {
    pub id: &'static str,
    pub screen_reader_text: &'static str,
}

pub fn create_loading_spinner() -> LoadingSpinner {
    LoadingSpinner {
        id: "loading-spinner",
        screen_reader_text: "Loading...",
    }
}

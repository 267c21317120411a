//! Default selections for the language selects.

pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";
pub const DEFAULT_TARGET_LANGUAGE: &str = "es";

/// Codes pre-selected when the selects are (re)built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionDefaults {
    pub source_code: String,
    pub target_code: String,
}

impl Default for SelectionDefaults {
    fn default() -> Self {
        Self {
            source_code: DEFAULT_SOURCE_LANGUAGE.to_string(),
            target_code: DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }
}

impl SelectionDefaults {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            source_code: lookup("CERVANTES_DEFAULT_SOURCE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE_LANGUAGE.to_string()),
            target_code: lookup("CERVANTES_DEFAULT_TARGET")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string()),
        }
    }
}

use crate::domain::errors::SubmissionError;
use crate::domain::language::LanguageIndex;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used by the backend's JSON listing.
pub const BACKEND_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TranslationStatus {
    New,
    Translating,
    Completed,
    Other(String),
}

impl TranslationStatus {
    /// Pending requests are refreshed by the backend on every listing.
    pub fn is_pending(&self) -> bool {
        matches!(self, TranslationStatus::New | TranslationStatus::Translating)
    }
}

impl From<String> for TranslationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "new" => TranslationStatus::New,
            "translating" => TranslationStatus::Translating,
            "completed" => TranslationStatus::Completed,
            _ => TranslationStatus::Other(s),
        }
    }
}

impl From<TranslationStatus> for String {
    fn from(status: TranslationStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationStatus::New => write!(f, "new"),
            TranslationStatus::Translating => write!(f, "translating"),
            TranslationStatus::Completed => write!(f, "completed"),
            TranslationStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A translation request as listed by `GET /translations/?format=json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub uid: String,
    pub status: TranslationStatus,
    pub source_language: String,
    pub target_language: String,
    pub text: String,
    pub translated_text: Option<String>,
    #[serde(default)]
    pub text_length: u64,
    #[serde(with = "backend_datetime")]
    pub date_created: NaiveDateTime,
    #[serde(with = "backend_datetime")]
    pub date_updated: NaiveDateTime,
}

mod backend_datetime {
    use super::BACKEND_DATETIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.format(BACKEND_DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, BACKEND_DATETIME_FORMAT)
            .map_err(serde::de::Error::custom)
    }
}

/// Form payload for `POST /translations/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub text: String,
}

impl TranslationRequest {
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            text: text.into(),
        }
    }

    /// Form field names, matching the page's form inputs.
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("source-language", self.source_language.as_str()),
            ("target-language", self.target_language.as_str()),
            ("text", self.text.as_str()),
        ]
    }

    /// Reject empty inputs and pairs the backend does not offer.
    pub fn validate(&self, index: &LanguageIndex) -> Result<(), SubmissionError> {
        let missing: Vec<&'static str> = self
            .form_fields()
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(SubmissionError::MissingInputs { fields: missing });
        }

        if !index.supports(&self.source_language, &self.target_language) {
            return Err(SubmissionError::UnsupportedPair {
                source_code: self.source_language.clone(),
                target_code: self.target_language.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::{Language, LanguagePairRecord};

    fn index() -> LanguageIndex {
        LanguageIndex::build(&[LanguagePairRecord::new(
            Language::new("en", "English"),
            Language::new("es", "Spanish"),
        )])
    }

    #[test]
    fn test_record_deserializes_backend_listing() {
        let json = r#"{
            "uid": "uid0000001",
            "status": "completed",
            "source_language": "en",
            "target_language": "es",
            "text": "Sample text 1",
            "translated_text": "El sample text 1",
            "text_length": 16,
            "date_created": "2019-12-20 15:30:45",
            "date_updated": "2019-12-20 15:30:45"
        }"#;

        let record: TranslationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, TranslationStatus::Completed);
        assert!(!record.status.is_pending());
        assert_eq!(record.text_length, 16);
        assert_eq!(
            record.date_updated.format("%H:%M:%S").to_string(),
            "15:30:45"
        );
    }

    #[test]
    fn test_pending_and_unknown_statuses() {
        assert!(TranslationStatus::from("new".to_string()).is_pending());
        assert!(TranslationStatus::from("translating".to_string()).is_pending());

        let other = TranslationStatus::from("canceled".to_string());
        assert!(!other.is_pending());
        assert_eq!(other.to_string(), "canceled");
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let request = TranslationRequest::new("en", "", "  ");
        match request.validate(&index()) {
            Err(SubmissionError::MissingInputs { fields }) => {
                assert_eq!(fields, vec!["target-language", "text"]);
            }
            other => panic!("expected missing inputs, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_unsupported_pair() {
        let request = TranslationRequest::new("en", "fr", "Hello");
        assert!(matches!(
            request.validate(&index()),
            Err(SubmissionError::UnsupportedPair { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_supported_pair() {
        let request = TranslationRequest::new("en", "es", "Hello");
        assert!(request.validate(&index()).is_ok());
    }
}

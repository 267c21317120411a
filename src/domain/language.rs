//! Language pairs and the source → targets index that drives the selects.
//!
//! The backend serves pairs as a flat list; the page needs them grouped by
//! source language so the target select can be rebuilt from a single lookup.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A language as served by the backend (`shortname` / `name` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    #[serde(rename = "shortname")]
    pub code: String,
    #[serde(rename = "name")]
    pub display_name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }
}

/// One supported source → target pair.
///
/// Wire shape: `{"lang_pair": {"source_language": {..}, "target_language": {..}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireLanguagePair", into = "WireLanguagePair")]
pub struct LanguagePairRecord {
    pub source_language: Language,
    pub target_language: Language,
}

impl LanguagePairRecord {
    pub fn new(source_language: Language, target_language: Language) -> Self {
        Self {
            source_language,
            target_language,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireLanguagePair {
    lang_pair: WirePairBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WirePairBody {
    source_language: Language,
    target_language: Language,
}

impl From<WireLanguagePair> for LanguagePairRecord {
    fn from(wire: WireLanguagePair) -> Self {
        Self {
            source_language: wire.lang_pair.source_language,
            target_language: wire.lang_pair.target_language,
        }
    }
}

impl From<LanguagePairRecord> for WireLanguagePair {
    fn from(record: LanguagePairRecord) -> Self {
        Self {
            lang_pair: WirePairBody {
                source_language: record.source_language,
                target_language: record.target_language,
            },
        }
    }
}

/// Decode a language-pairs payload.
///
/// Anything other than an array of well-formed records decodes to no pairs
/// at all, so the selects come up empty rather than partially filled.
pub fn decode_language_pairs(payload: serde_json::Value) -> Vec<LanguagePairRecord> {
    let serde_json::Value::Array(entries) = payload else {
        warn!("Language pairs payload is not a list; using an empty index");
        return Vec::new();
    };

    let total = entries.len();
    let decoded: Result<Vec<LanguagePairRecord>, _> =
        entries.into_iter().map(serde_json::from_value).collect();

    match decoded {
        Ok(records) => records,
        Err(e) => {
            warn!(
                "Malformed language pair among {} entries ({}); using an empty index",
                total, e
            );
            Vec::new()
        }
    }
}

/// Targets reachable from one source language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageGroup {
    pub display_name: String,
    pub targets: Vec<Language>,
}

/// Source code → available targets, in order of first appearance.
///
/// Built once per page load and never refreshed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageIndex {
    groups: IndexMap<String, LanguageGroup>,
}

impl LanguageIndex {
    /// Group records by source code in a single pass.
    ///
    /// Keys keep the order in which each source code first appears and the
    /// targets keep input order. Duplicate pairs are kept as-is.
    pub fn build(records: &[LanguagePairRecord]) -> Self {
        let mut groups: IndexMap<String, LanguageGroup> = IndexMap::new();

        for record in records {
            groups
                .entry(record.source_language.code.clone())
                .or_insert_with(|| LanguageGroup {
                    display_name: record.source_language.display_name.clone(),
                    targets: Vec::new(),
                })
                .targets
                .push(record.target_language.clone());
        }

        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn contains(&self, source_code: &str) -> bool {
        self.groups.contains_key(source_code)
    }

    pub fn get(&self, source_code: &str) -> Option<&LanguageGroup> {
        self.groups.get(source_code)
    }

    /// Iterate `(source code, group)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageGroup)> {
        self.groups.iter().map(|(code, group)| (code.as_str(), group))
    }

    pub fn targets_for(&self, source_code: &str) -> Option<&[Language]> {
        self.groups.get(source_code).map(|g| g.targets.as_slice())
    }

    /// Whether `source_code → target_code` is an available pair.
    pub fn supports(&self, source_code: &str, target_code: &str) -> bool {
        self.targets_for(source_code)
            .is_some_and(|targets| targets.iter().any(|t| t.code == target_code))
    }
}

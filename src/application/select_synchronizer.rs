//! Keeps the target-language select consistent with the source-language
//! select.
//!
//! The synchronizer owns the [LanguageIndex] built from the fetched pairs and
//! rebuilds the target select from it every time the source selection
//! changes. Widgets are passed in per call so the same logic drives the
//! desktop page, the headless view models and the test doubles.

use crate::config::SelectionDefaults;
use crate::domain::errors::SyncError;
use crate::domain::language::{LanguageIndex, LanguagePairRecord};
use crate::domain::ports::SelectWidget;
use crate::domain::ui::SelectOption;
use tracing::{debug, info};

pub struct SelectSynchronizer {
    index: LanguageIndex,
    defaults: SelectionDefaults,
    armed: bool,
}

impl SelectSynchronizer {
    pub fn new(index: LanguageIndex, defaults: SelectionDefaults) -> Self {
        Self {
            index,
            defaults,
            armed: false,
        }
    }

    pub fn from_records(records: &[LanguagePairRecord], defaults: SelectionDefaults) -> Self {
        Self::new(LanguageIndex::build(records), defaults)
    }

    pub fn index(&self) -> &LanguageIndex {
        &self.index
    }

    pub fn defaults(&self) -> &SelectionDefaults {
        &self.defaults
    }

    /// Whether source changes are being followed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Rebuild the source select: one option per index key, the default
    /// source pre-selected when present.
    pub fn populate_source(&self, source: &mut impl SelectWidget) {
        source.clear();

        for (code, group) in self.index.iter() {
            source.append_option(SelectOption::new(
                code,
                group.display_name.as_str(),
                code == self.defaults.source_code,
            ));
        }

        debug!("Populated source select with {} options", self.index.len());
    }

    /// Rebuild the target select with the targets of `source_code`, the
    /// default target pre-selected when present. Only its first occurrence
    /// is marked when the backend lists the pair more than once.
    ///
    /// An unknown code leaves the target select empty.
    pub fn update_target(
        &self,
        target: &mut impl SelectWidget,
        source_code: &str,
    ) -> Result<(), SyncError> {
        target.clear();

        let targets =
            self.index
                .targets_for(source_code)
                .ok_or_else(|| SyncError::UnknownSourceLanguage {
                    code: source_code.to_string(),
                })?;

        let mut default_marked = false;
        for language in targets {
            let selected = !default_marked && language.code == self.defaults.target_code;
            default_marked |= selected;
            target.append_option(SelectOption::new(
                language.code.as_str(),
                language.display_name.as_str(),
                selected,
            ));
        }

        debug!(
            "Rebuilt target select for '{}' with {} options",
            source_code,
            targets.len()
        );
        Ok(())
    }

    /// Populate both selects, enable them and start following source
    /// changes.
    pub fn initialize(
        &mut self,
        source: &mut impl SelectWidget,
        target: &mut impl SelectWidget,
    ) -> Result<(), SyncError> {
        self.populate_source(source);

        match source.value().map(str::to_string) {
            Some(seed) => self.update_target(target, &seed)?,
            None => target.clear(),
        }

        source.set_enabled(true);
        target.set_enabled(true);
        self.armed = true;

        info!(
            "Language selects ready: {} source languages",
            self.index.len()
        );
        Ok(())
    }

    /// React to a new source selection. Returns `Ok(false)` when ignored
    /// because the selects are not initialized yet.
    pub fn on_source_change(
        &self,
        target: &mut impl SelectWidget,
        source_code: &str,
    ) -> Result<bool, SyncError> {
        if !self.armed {
            debug!("Ignoring source change to '{}' before init", source_code);
            return Ok(false);
        }

        self.update_target(target, source_code)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::Language;

    #[derive(Default)]
    struct FakeSelect {
        options: Vec<SelectOption>,
        enabled: bool,
        clears: usize,
    }

    impl SelectWidget for FakeSelect {
        fn clear(&mut self) {
            self.options.clear();
            self.clears += 1;
        }

        fn append_option(&mut self, option: SelectOption) {
            self.options.push(option);
        }

        fn options(&self) -> &[SelectOption] {
            &self.options
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    impl FakeSelect {
        fn values(&self) -> Vec<&str> {
            self.options.iter().map(|o| o.value.as_str()).collect()
        }

        fn selected(&self) -> Vec<&str> {
            self.options
                .iter()
                .filter(|o| o.selected)
                .map(|o| o.value.as_str())
                .collect()
        }
    }

    fn pair(src: (&str, &str), tgt: (&str, &str)) -> LanguagePairRecord {
        LanguagePairRecord::new(Language::new(src.0, src.1), Language::new(tgt.0, tgt.1))
    }

    fn synchronizer() -> SelectSynchronizer {
        SelectSynchronizer::from_records(
            &[
                pair(("en", "English"), ("es", "Spanish")),
                pair(("en", "English"), ("fr", "French")),
                pair(("de", "German"), ("en", "English")),
            ],
            SelectionDefaults::default(),
        )
    }

    #[test]
    fn test_populate_source_marks_default() {
        let sync = synchronizer();
        let mut source = FakeSelect::default();

        sync.populate_source(&mut source);

        assert_eq!(source.values(), vec!["en", "de"]);
        assert_eq!(source.options[0].label, "English");
        assert_eq!(source.selected(), vec!["en"]);
    }

    #[test]
    fn test_populate_source_twice_does_not_duplicate() {
        let sync = synchronizer();
        let mut source = FakeSelect::default();

        sync.populate_source(&mut source);
        let first = source.options.clone();
        sync.populate_source(&mut source);

        assert_eq!(source.options, first);
    }

    #[test]
    fn test_populate_source_without_default_selects_nothing() {
        let sync = SelectSynchronizer::from_records(
            &[pair(("de", "German"), ("en", "English"))],
            SelectionDefaults::default(),
        );
        let mut source = FakeSelect::default();

        sync.populate_source(&mut source);

        assert!(source.selected().is_empty());
        // Like a <select>, the first option is the effective value.
        assert_eq!(source.value(), Some("de"));
    }

    #[test]
    fn test_update_target_for_default_source() {
        let sync = synchronizer();
        let mut target = FakeSelect::default();

        sync.update_target(&mut target, "en").unwrap();

        assert_eq!(target.values(), vec!["es", "fr"]);
        assert_eq!(target.selected(), vec!["es"]);
    }

    #[test]
    fn test_update_target_without_default_target() {
        let sync = synchronizer();
        let mut target = FakeSelect::default();

        sync.update_target(&mut target, "de").unwrap();

        assert_eq!(target.values(), vec!["en"]);
        assert!(target.selected().is_empty());
    }

    #[test]
    fn test_update_target_duplicate_default_selected_once() {
        let sync = SelectSynchronizer::from_records(
            &[
                pair(("en", "English"), ("es", "Spanish")),
                pair(("en", "English"), ("fr", "French")),
                pair(("en", "English"), ("es", "Spanish")),
            ],
            SelectionDefaults::default(),
        );
        let mut target = FakeSelect::default();

        sync.update_target(&mut target, "en").unwrap();

        assert_eq!(target.values(), vec!["es", "fr", "es"]);
        assert_eq!(target.selected(), vec!["es"]);
        assert!(target.options[0].selected);
        assert_eq!(target.value(), Some("es"));
    }

    #[test]
    fn test_update_target_unknown_source_clears() {
        let sync = synchronizer();
        let mut target = FakeSelect::default();
        sync.update_target(&mut target, "en").unwrap();

        let result = sync.update_target(&mut target, "it");

        assert_eq!(
            result,
            Err(SyncError::UnknownSourceLanguage {
                code: "it".to_string()
            })
        );
        assert!(target.options.is_empty());
    }

    #[test]
    fn test_initialize_enables_and_arms() {
        let mut sync = synchronizer();
        let mut source = FakeSelect::default();
        let mut target = FakeSelect::default();

        assert!(!sync.is_armed());
        sync.initialize(&mut source, &mut target).unwrap();

        assert!(sync.is_armed());
        assert!(source.enabled && target.enabled);
        assert_eq!(source.value(), Some("en"));
        assert_eq!(target.values(), vec!["es", "fr"]);
        assert_eq!(target.value(), Some("es"));
    }

    #[test]
    fn test_initialize_seeds_from_first_source_when_default_missing() {
        let mut sync = SelectSynchronizer::from_records(
            &[
                pair(("pt", "Portuguese"), ("es", "Spanish")),
                pair(("de", "German"), ("en", "English")),
            ],
            SelectionDefaults::default(),
        );
        let mut source = FakeSelect::default();
        let mut target = FakeSelect::default();

        sync.initialize(&mut source, &mut target).unwrap();

        assert_eq!(target.values(), vec!["es"]);
        assert!(source.enabled && target.enabled);
    }

    #[test]
    fn test_initialize_with_empty_index() {
        let mut sync = SelectSynchronizer::from_records(&[], SelectionDefaults::default());
        let mut source = FakeSelect::default();
        let mut target = FakeSelect::default();

        sync.initialize(&mut source, &mut target).unwrap();

        assert!(source.options.is_empty());
        assert!(target.options.is_empty());
        assert!(sync.is_armed());
    }

    #[test]
    fn test_source_change_rebuilds_target_once() {
        let mut sync = synchronizer();
        let mut source = FakeSelect::default();
        let mut target = FakeSelect::default();
        sync.initialize(&mut source, &mut target).unwrap();
        let clears_before = target.clears;

        let handled = sync.on_source_change(&mut target, "de").unwrap();

        assert!(handled);
        assert_eq!(target.clears, clears_before + 1);
        assert_eq!(target.values(), vec!["en"]);
    }

    #[test]
    fn test_source_change_ignored_before_initialize() {
        let sync = synchronizer();
        let mut target = FakeSelect::default();

        let handled = sync.on_source_change(&mut target, "de").unwrap();

        assert!(!handled);
        assert_eq!(target.clears, 0);
        assert!(target.options.is_empty());
    }

    #[test]
    fn test_custom_defaults() {
        let sync = SelectSynchronizer::from_records(
            &[
                pair(("en", "English"), ("es", "Spanish")),
                pair(("en", "English"), ("fr", "French")),
                pair(("de", "German"), ("en", "English")),
            ],
            SelectionDefaults {
                source_code: "de".to_string(),
                target_code: "fr".to_string(),
            },
        );
        let mut source = FakeSelect::default();
        let mut target = FakeSelect::default();

        sync.populate_source(&mut source);
        sync.update_target(&mut target, "en").unwrap();

        assert_eq!(source.selected(), vec!["de"]);
        assert_eq!(target.selected(), vec!["fr"]);
    }
}

use crate::domain::ports::SelectWidget;
use crate::domain::ui::SelectOption;

/// Backing state for one language select.
///
/// Starts disabled and empty, like the page's selects before the language
/// pairs arrive.
#[derive(Debug, Clone, Default)]
pub struct SelectViewModel {
    pub id: &'static str,
    options: Vec<SelectOption>,
    enabled: bool,
}

impl SelectViewModel {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            options: Vec::new(),
            enabled: false,
        }
    }

    /// Mark `value` as the only selected option. Returns `true` when the
    /// effective value changed, which is what fires a change event.
    pub fn choose(&mut self, value: &str) -> bool {
        if !self.options.iter().any(|o| o.value == value) {
            return false;
        }

        let changed = self.value() != Some(value);
        for option in &mut self.options {
            option.selected = option.value == value;
        }
        changed
    }

    pub fn selected_label(&self) -> Option<&str> {
        let value = self.value()?;
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

impl SelectWidget for SelectViewModel {
    fn clear(&mut self) {
        self.options.clear();
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

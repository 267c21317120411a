pub mod alert_banner;
pub mod card;
pub mod history_panel;
pub mod language_select;

pub mod page_view_model;
pub mod select_view_model;

pub use page_view_model::{HistoryContent, PageViewModel};
pub use select_view_model::SelectViewModel;

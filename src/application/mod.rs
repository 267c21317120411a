pub mod client;
pub mod page_controller;
pub mod page_loader;
pub mod select_synchronizer;

pub use client::PageClient;
pub use page_controller::PageController;
pub use page_loader::{PageEvent, PageLoader, PageResource};
pub use select_synchronizer::SelectSynchronizer;

pub mod view_models;

#[cfg(feature = "ui")]
pub mod components;
#[cfg(feature = "ui")]
pub mod design_system;
#[cfg(feature = "ui")]
pub mod ui;

pub mod components;
pub mod ui;

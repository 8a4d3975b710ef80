//! Event handling for keyboard and mouse input.
//!
//! Handlers translate crossterm events into `Action`s, which the App then
//! applies to picker and progress state.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;

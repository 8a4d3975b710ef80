//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `picker_group` - Row of pickers with edge fade and hit regions
//! - `progress_indicator` - Segmented circular or rounded-rectangle progress
//! - `help_popup` - Help overlay with keybindings
//! - `separators` - Vertical and horizontal line separators

mod help_popup;
mod picker_group;
mod progress_indicator;
mod separators;

pub use help_popup::render_help_popup;
pub use picker_group::render_picker_group;
pub use progress_indicator::render_progress_indicator;
pub use separators::render_separator;

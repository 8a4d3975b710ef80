//! dialkit: picker and progress indicator logic for round-screen UIs.
//!
//! - `picker` maps scroll positions onto options, with endless repeating
//!   pickers, shortest-way navigation and groups with one active picker.
//! - `progress` turns progress values and weighted segments into arcs and
//!   rounded-rectangle paths.
//!
//! Both sit behind small capability seams (`ScrollableList` for the host
//! list) so they can run headless.

pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod log;
pub mod picker;
pub mod progress;
pub mod scroll;
pub mod theme;

pub use error::{DialkitError, GeometryError, PickerError, Result};

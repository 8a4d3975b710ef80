//! Pickers
//!
//! A picker centers one of a finite set of options in a scrollable list.
//! This module holds the slot/option arithmetic, the list capability it
//! runs on, groups of pickers with a single active member, saved state and
//! the accessibility surface.

mod group;
mod list;
mod saved;
mod semantics;
mod state;

pub use group::{
    GroupEvent, PickerGroup, PickerGroupItem, PickerGroupState, PickerItemConfig, SelectionChange,
};
pub use list::{ANIMATION_WINDOW, ScrollableList, VirtualList, VisibleItem};
pub use saved::{SavedPickerGroupState, SavedPickerState};
pub use semantics::{PickerSemantics, SemanticsAction, perform};
pub use state::{LARGE_NUMBER_OF_ITEMS, MAX_OPTIONS, PickerIndex, PickerState};

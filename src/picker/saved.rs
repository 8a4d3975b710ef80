//! Saved picker state.
//!
//! A picker persists as the ordered triple
//! `[number_of_options, selected_option, repeat_items]`; a group persists its
//! selected index only. Restoring builds fresh state from these values.

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

use super::group::PickerGroupState;
use super::list::{ScrollableList, VirtualList};
use super::state::PickerState;

/// Persisted form of a `PickerState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(usize, usize, bool)", try_from = "(usize, usize, bool)")]
pub struct SavedPickerState {
    pub number_of_options: usize,
    pub selected_option: usize,
    pub repeat_items: bool,
}

impl From<SavedPickerState> for (usize, usize, bool) {
    fn from(saved: SavedPickerState) -> Self {
        (saved.number_of_options, saved.selected_option, saved.repeat_items)
    }
}

impl TryFrom<(usize, usize, bool)> for SavedPickerState {
    type Error = PickerError;

    fn try_from(
        (number_of_options, selected_option, repeat_items): (usize, usize, bool),
    ) -> PickerResult<Self> {
        if number_of_options == 0 || selected_option >= number_of_options {
            return Err(PickerError::InvalidSavedState(format!(
                "option {} of {}",
                selected_option, number_of_options
            )));
        }
        Ok(Self {
            number_of_options,
            selected_option,
            repeat_items,
        })
    }
}

impl SavedPickerState {
    pub fn to_json(&self) -> PickerResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> PickerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Persisted form of a `PickerGroupState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPickerGroupState {
    pub selected_index: usize,
}

impl From<PickerGroupState> for SavedPickerGroupState {
    fn from(state: PickerGroupState) -> Self {
        Self {
            selected_index: state.selected_index,
        }
    }
}

impl From<SavedPickerGroupState> for PickerGroupState {
    fn from(saved: SavedPickerGroupState) -> Self {
        PickerGroupState::new(saved.selected_index)
    }
}

impl<L: ScrollableList> PickerState<L> {
    pub fn save(&self) -> SavedPickerState {
        SavedPickerState {
            number_of_options: self.number_of_options(),
            selected_option: self.selected_option(),
            repeat_items: self.repeat_items(),
        }
    }

    /// Rebuild a picker from its saved triple on top of a fresh host list
    pub fn restore_with_list(list: L, saved: SavedPickerState) -> PickerResult<Self> {
        PickerState::with_list(
            list,
            saved.number_of_options,
            saved.selected_option,
            saved.repeat_items,
        )
        .map_err(|e| PickerError::InvalidSavedState(e.to_string()))
    }
}

impl PickerState<VirtualList> {
    pub fn restore(saved: SavedPickerState) -> PickerResult<Self> {
        let list = VirtualList::new(0);
        Self::restore_with_list(list, saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_ordered_triple() {
        let state = PickerState::new(24, 13, true).unwrap();
        let json = state.save().to_json().unwrap();
        assert_eq!(json, "[24,13,true]");
    }

    #[test]
    fn test_restore_preserves_selection() {
        let mut state = PickerState::new(31, 3, true).unwrap();
        state.scroll_to_option(29).unwrap();
        state.set_number_of_options(30).unwrap();

        let json = state.save().to_json().unwrap();
        let restored = PickerState::restore(SavedPickerState::from_json(&json).unwrap()).unwrap();

        assert_eq!(restored.selected_option(), state.selected_option());
        assert_eq!(restored.number_of_options(), 30);
        assert!(restored.repeat_items());
    }

    #[test]
    fn test_rejects_invalid_triple() {
        assert!(SavedPickerState::from_json("[0,0,true]").is_err());
        assert!(SavedPickerState::from_json("[10,10,false]").is_err());
        assert!(SavedPickerState::from_json("[10,\"x\",false]").is_err());
    }

    #[test]
    fn test_restore_rejects_option_count_over_ceiling() {
        let saved = SavedPickerState {
            number_of_options: usize::MAX,
            selected_option: 0,
            repeat_items: true,
        };
        assert!(matches!(
            PickerState::restore(saved),
            Err(PickerError::InvalidSavedState(_))
        ));
    }

    #[test]
    fn test_group_state_round_trip() {
        let saved = SavedPickerGroupState::from(PickerGroupState::new(2));
        let json = serde_json::to_string(&saved).unwrap();
        assert_eq!(json, r#"{"selected_index":2}"#);

        let restored: SavedPickerGroupState = serde_json::from_str(&json).unwrap();
        assert_eq!(PickerGroupState::from(restored).selected_index, 2);
    }
}

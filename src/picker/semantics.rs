//! Accessibility surface of a picker.

use crate::error::PickerResult;

use super::list::ScrollableList;
use super::state::PickerState;

/// What assistive technology sees for a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSemantics {
    /// Withheld while a scroll is running so the description doesn't
    /// chatter through every intermediate option
    pub content_description: Option<String>,
    pub selected_option: usize,
    pub number_of_options: usize,
}

impl PickerSemantics {
    pub fn describe<L, F>(state: &PickerState<L>, describe_option: F) -> Self
    where
        L: ScrollableList,
        F: Fn(usize) -> String,
    {
        let selected_option = state.selected_option();
        let content_description =
            (!state.is_scroll_in_progress()).then(|| describe_option(selected_option));

        Self {
            content_description,
            selected_option,
            number_of_options: state.number_of_options(),
        }
    }
}

/// Actions assistive technology can perform on a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticsAction {
    /// Activate the picker
    Click,
    /// Move to a logical option
    ScrollToIndex(usize),
}

/// Perform an accessibility action, then report the selection.
///
/// `on_selected` only runs if the action completes; dropping the future
/// during a scroll skips it.
pub async fn perform<L, F>(
    state: &mut PickerState<L>,
    action: SemanticsAction,
    on_selected: F,
) -> PickerResult<()>
where
    L: ScrollableList,
    F: FnOnce(),
{
    if let SemanticsAction::ScrollToIndex(option) = action {
        state.animate_scroll_to_option(option).await?;
    }
    on_selected();
    Ok(())
}

//! Action enum for decoupling input handling from state changes.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Picker group ===
    /// Make the picker at this index active
    SelectPicker(usize),
    /// Activate the next picker in the row
    SelectNext,
    /// Activate the previous picker in the row
    SelectPrev,
    /// Rotary input: move the active picker by whole options, animated
    Rotate(i64),
    /// A tap landed on the picker at this index
    TapPicker(usize),
    /// Raw scroll that started over `origin` (None = outside any picker)
    Scroll { origin: Option<usize>, delta: f32 },
    /// Announce the active picker's selection in the status line
    Describe,
    /// Scroll hour and minute to the current time
    JumpToNow,

    // === Toggles ===
    ToggleHelp,
    ToggleTouchExploration,
    ToggleAutoCenter,
    /// Switch the progress track between circular and square
    ToggleShape,

    // === Progress ===
    /// Change overall progress by this amount
    AdjustProgress(f32),

    /// No action
    None,
}

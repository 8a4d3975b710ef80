//! Mouse event handling.
//!
//! Mouse events are resolved through the interaction registry, which the
//! picker group populates on each render, so taps and wheel ticks land on
//! the picker that was drawn under the pointer.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use dialkit::interaction::PickerAction;

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = f32::from(mouse.column);
    let y = f32::from(mouse.row);

    let delta = match mouse.kind {
        MouseEventKind::ScrollUp => -1.0,
        MouseEventKind::ScrollDown => 1.0,
        MouseEventKind::Down(MouseButton::Left) => {
            return match app.interactions.handle_tap(x, y) {
                PickerAction::Select(index) => Action::TapPicker(index),
                _ => Action::None,
            };
        }
        _ => return Action::None,
    };

    let origin = match app.interactions.handle_scroll(x, y) {
        PickerAction::Scroll(index) => Some(index),
        _ => None,
    };
    Action::Scroll { origin, delta }
}

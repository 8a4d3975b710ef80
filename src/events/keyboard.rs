//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::Action;

/// Progress change per `+`/`-` press
const PROGRESS_STEP: f32 = 0.05;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if app.show_help {
        return match key.code {
            KeyCode::Char('?') | KeyCode::Esc => Action::ToggleHelp,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,

        // Picker selection
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::SelectPrev,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::SelectNext,
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < app.group.len() {
                Action::SelectPicker(index)
            } else {
                Action::None
            }
        }

        // Rotary input, page keys jump further
        KeyCode::Up | KeyCode::Char('k') => Action::Rotate(-1),
        KeyCode::Down | KeyCode::Char('j') => Action::Rotate(1),
        KeyCode::PageUp => Action::Rotate(-10),
        KeyCode::PageDown => Action::Rotate(10),

        KeyCode::Char('d') => Action::Describe,
        KeyCode::Char('n') => Action::JumpToNow,

        KeyCode::Char('t') => Action::ToggleTouchExploration,
        KeyCode::Char('a') => Action::ToggleAutoCenter,
        KeyCode::Char('s') => Action::ToggleShape,

        KeyCode::Char('+') | KeyCode::Char('=') => Action::AdjustProgress(PROGRESS_STEP),
        KeyCode::Char('-') => Action::AdjustProgress(-PROGRESS_STEP),

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit::config::Config;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let app = App::new(Config::default(), 9).unwrap();
        assert_eq!(handle_key_event(&app, press(KeyCode::Up)), Action::Rotate(-1));
        assert_eq!(handle_key_event(&app, press(KeyCode::Right)), Action::SelectNext);
    }

    #[test]
    fn test_number_keys_are_bounded_by_group() {
        let app = App::new(Config::default(), 9).unwrap();
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('2'))), Action::SelectPicker(1));
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('9'))), Action::None);
    }

    #[test]
    fn test_help_swallows_other_keys() {
        let mut app = App::new(Config::default(), 9).unwrap();
        app.show_help = true;
        assert_eq!(handle_key_event(&app, press(KeyCode::Up)), Action::None);
        assert_eq!(handle_key_event(&app, press(KeyCode::Esc)), Action::ToggleHelp);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let app = App::new(Config::default(), 9).unwrap();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&app, key), Action::Quit);
    }
}

use crossterm::event::KeyEvent;

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    ToggleMode,
    ToggleHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Any key closes help
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            return keymap.pending_g_action().copied().unwrap_or(Action::None);
        }
        return Action::PendingG;
    }

    keymap.get(&binding).copied().unwrap_or(Action::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use heartbeats_core::AppConfig;

    fn app() -> App {
        App::new(AppConfig::default(), None, (160, 51))
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_default_bindings() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE), &app, &keymap),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('f'), KeyModifiers::CONTROL), &app, &keymap),
            Action::ScrollPageDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('m'), KeyModifiers::NONE), &app, &keymap),
            Action::ToggleMode
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = app();
        let keymap = Keymap::default();
        let g = key(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::JumpToTop);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = app();
        app.mode = Mode::Help;
        assert_eq!(
            handle_key_event(
                key(KeyCode::Char('q'), KeyModifiers::NONE),
                &app,
                &Keymap::default()
            ),
            Action::ExitMode
        );
    }
}

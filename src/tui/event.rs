use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C, honoured in every view.
    ForceQuit,
    Char(char),
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Polling terminal events failed: {}", e);
            return None;
        }
    }

    match event::read() {
        Ok(Event::Key(key)) => from_key(key),
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            warn!("Reading terminal event failed: {}", e);
            None
        }
    }
}

fn from_key(key: KeyEvent) -> Option<TuiEvent> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }
    debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::Char(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Enter) => Some(TuiEvent::Enter),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Tab) => Some(TuiEvent::Tab),
        (_, KeyCode::BackTab) => Some(TuiEvent::BackTab),
        (_, KeyCode::Up) => Some(TuiEvent::Up),
        (_, KeyCode::Down) => Some(TuiEvent::Down),
        (_, KeyCode::Left) => Some(TuiEvent::Left),
        (_, KeyCode::Right) => Some(TuiEvent::Right),
        (_, KeyCode::Home) => Some(TuiEvent::Home),
        (_, KeyCode::End) => Some(TuiEvent::End),
        _ => None,
    }
}

/// Maps a terminal event to a core action. `text_input_active` decides
/// whether printable keys are typed into a field or used as shortcuts.
pub fn to_action(event: TuiEvent, text_input_active: bool) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Char(c) if text_input_active => Some(Action::InsertChar(c)),
        TuiEvent::Char('q') => Some(Action::Quit),
        TuiEvent::Char('j') => Some(Action::SelectNext),
        TuiEvent::Char('k') => Some(Action::SelectPrevious),
        TuiEvent::Char(_) => None,
        TuiEvent::Backspace if text_input_active => Some(Action::DeleteBackward),
        TuiEvent::Delete if text_input_active => Some(Action::DeleteForward),
        TuiEvent::Backspace | TuiEvent::Delete => None,
        TuiEvent::Enter => Some(Action::Activate),
        TuiEvent::Escape => Some(Action::Back),
        TuiEvent::Tab | TuiEvent::BackTab => Some(Action::CycleFocus),
        TuiEvent::Up => Some(Action::SelectPrevious),
        TuiEvent::Down => Some(Action::SelectNext),
        TuiEvent::Left if text_input_active => Some(Action::CursorLeft),
        TuiEvent::Right if text_input_active => Some(Action::CursorRight),
        TuiEvent::Left | TuiEvent::Right => None,
        TuiEvent::Home if text_input_active => Some(Action::CursorHome),
        TuiEvent::End if text_input_active => Some(Action::CursorEnd),
        TuiEvent::Home => Some(Action::SelectFirst),
        TuiEvent::End => Some(Action::SelectLast),
        TuiEvent::Resize => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        assert_eq!(
            from_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert!(matches!(to_action(TuiEvent::ForceQuit, true), Some(Action::Quit)));
    }

    #[test]
    fn test_other_control_chars_are_ignored() {
        assert_eq!(from_key(press(KeyCode::Char('r'), KeyModifiers::CONTROL)), None);
        assert_eq!(
            from_key(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(TuiEvent::Char('A'))
        );
    }

    #[test]
    fn test_releases_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(from_key(release), None);
    }

    #[test]
    fn test_q_quits_only_outside_text_fields() {
        assert!(matches!(to_action(TuiEvent::Char('q'), false), Some(Action::Quit)));
        assert!(matches!(
            to_action(TuiEvent::Char('q'), true),
            Some(Action::InsertChar('q'))
        ));
    }

    #[test]
    fn test_vim_keys_move_cursor_in_lists() {
        assert!(matches!(to_action(TuiEvent::Char('j'), false), Some(Action::SelectNext)));
        assert!(matches!(
            to_action(TuiEvent::Char('k'), false),
            Some(Action::SelectPrevious)
        ));
        assert!(to_action(TuiEvent::Char('x'), false).is_none());
    }

    #[test]
    fn test_home_end_depend_on_focus() {
        assert!(matches!(to_action(TuiEvent::Home, false), Some(Action::SelectFirst)));
        assert!(matches!(to_action(TuiEvent::End, false), Some(Action::SelectLast)));
        assert!(matches!(to_action(TuiEvent::Home, true), Some(Action::CursorHome)));
        assert!(matches!(to_action(TuiEvent::End, true), Some(Action::CursorEnd)));
    }

    #[test]
    fn test_editing_keys_need_text_focus() {
        assert!(to_action(TuiEvent::Backspace, false).is_none());
        assert!(to_action(TuiEvent::Left, false).is_none());
        assert!(matches!(
            to_action(TuiEvent::Backspace, true),
            Some(Action::DeleteBackward)
        ));
        assert!(matches!(to_action(TuiEvent::Delete, true), Some(Action::DeleteForward)));
        assert!(matches!(to_action(TuiEvent::Right, true), Some(Action::CursorRight)));
    }

    #[test]
    fn test_navigation_keys() {
        assert!(matches!(to_action(TuiEvent::Enter, true), Some(Action::Activate)));
        assert!(matches!(to_action(TuiEvent::Escape, false), Some(Action::Back)));
        assert!(matches!(to_action(TuiEvent::Tab, true), Some(Action::CycleFocus)));
        assert!(matches!(to_action(TuiEvent::BackTab, true), Some(Action::CycleFocus)));
        assert!(matches!(to_action(TuiEvent::Up, true), Some(Action::SelectPrevious)));
        assert!(matches!(to_action(TuiEvent::Down, false), Some(Action::SelectNext)));
        assert!(to_action(TuiEvent::Resize, false).is_none());
    }
}

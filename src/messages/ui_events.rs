//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// The fetch button was activated
    FetchBreeds,

    // Grid scrolling
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // System
    Quit,
}

/// Convert a key event to a UiEvent
pub fn key_to_ui_event(key: KeyEvent) -> Option<UiEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UiEvent::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('f') | KeyCode::Char(' ') | KeyCode::Enter => Some(UiEvent::FetchBreeds),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::ScrollDown),
        KeyCode::PageUp => Some(UiEvent::PageUp),
        KeyCode::PageDown => Some(UiEvent::PageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_fetch_keys() {
        assert_eq!(key_to_ui_event(key(KeyCode::Char('f'))), Some(UiEvent::FetchBreeds));
        assert_eq!(key_to_ui_event(key(KeyCode::Enter)), Some(UiEvent::FetchBreeds));
        assert_eq!(key_to_ui_event(key(KeyCode::Char(' '))), Some(UiEvent::FetchBreeds));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_ui_event(key(KeyCode::Char('q'))), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(key(KeyCode::Esc)), Some(UiEvent::Quit));
        assert_eq!(
            key_to_ui_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(key_to_ui_event(key(KeyCode::Up)), Some(UiEvent::ScrollUp));
        assert_eq!(key_to_ui_event(key(KeyCode::Down)), Some(UiEvent::ScrollDown));
        assert_eq!(key_to_ui_event(key(KeyCode::PageUp)), Some(UiEvent::PageUp));
        assert_eq!(key_to_ui_event(key(KeyCode::PageDown)), Some(UiEvent::PageDown));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(key_to_ui_event(key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_ui_event(key(KeyCode::Tab)), None);
    }
}

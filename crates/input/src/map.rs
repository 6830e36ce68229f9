//! Which terminal events count as "a key was pressed".

use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// Any key press stops the animation.
///
/// Release and auto-repeat events are ignored so one physical keystroke is
/// one interrupt, on terminals that report releases too.
pub fn is_interrupt(event: &Event) -> bool {
    matches!(event, Event::Key(key) if is_press(key))
}

fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_any_pressed_key_interrupts() {
        assert!(is_interrupt(&key(KeyCode::Char('q'), KeyEventKind::Press)));
        assert!(is_interrupt(&key(KeyCode::Enter, KeyEventKind::Press)));
        assert!(is_interrupt(&key(KeyCode::Esc, KeyEventKind::Press)));
        assert!(is_interrupt(&Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        ))));
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        assert!(!is_interrupt(&key(KeyCode::Char('a'), KeyEventKind::Release)));
        assert!(!is_interrupt(&key(KeyCode::Char('a'), KeyEventKind::Repeat)));
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        assert!(!is_interrupt(&Event::Resize(80, 24)));
        assert!(!is_interrupt(&Event::FocusGained));
    }
}

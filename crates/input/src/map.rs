//! Which terminal events count as "stop".

use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// Any key press stops the simulation.
///
/// Releases and auto-repeats are ignored so a single press is not counted
/// twice on terminals that report them. Ctrl-C arrives here as an ordinary
/// key because raw mode disables the signal.
pub fn is_stop_key(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// Classify a terminal event. Resize, focus, mouse and paste events are ignored.
pub fn is_stop_event(event: &Event) -> bool {
    match event {
        Event::Key(key) => is_stop_key(*key),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn any_press_stops() {
        assert!(is_stop_key(KeyEvent::from(KeyCode::Char('q'))));
        assert!(is_stop_key(KeyEvent::from(KeyCode::Enter)));
        assert!(is_stop_key(KeyEvent::from(KeyCode::Char(' '))));
        assert!(is_stop_key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn release_and_repeat_do_not_stop() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let key = KeyEvent {
                code: KeyCode::Char('x'),
                modifiers: KeyModifiers::NONE,
                kind,
                state: KeyEventState::NONE,
            };
            assert!(!is_stop_key(key));
        }
    }

    #[test]
    fn non_key_events_are_ignored() {
        assert!(!is_stop_event(&Event::Resize(80, 24)));
        assert!(!is_stop_event(&Event::FocusLost));
        assert!(is_stop_event(&Event::Key(KeyEvent::from(KeyCode::Esc))));
    }
}

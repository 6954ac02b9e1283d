//! Key mapping from terminal events to player intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a single key press asks the ship to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Thrust one step; each delta is in `{-1, 0, 1}`
    Thrust { row_delta: i8, col_delta: i8 },
    Fire,
}

/// Map keyboard input to player intents.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    let thrust = |row_delta, col_delta| Some(Intent::Thrust { row_delta, col_delta });
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            thrust(-1, 0)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            thrust(1, 0)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            thrust(0, -1)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            thrust(0, 1)
        }

        KeyCode::Char(' ') => Some(Intent::Fire),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn thrust(row_delta: i8, col_delta: i8) -> Option<Intent> {
        Some(Intent::Thrust { row_delta, col_delta })
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), thrust(-1, 0));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), thrust(1, 0));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), thrust(0, -1));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), thrust(0, 1));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('W'))), thrust(-1, 0));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('j'))), thrust(1, 0));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), thrust(0, -1));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('L'))), thrust(0, 1));
    }

    #[test]
    fn test_fire_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Intent::Fire)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}

//! Key mapping from terminal events to input actions.

use crate::types::{Direction, InputAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to input actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(InputAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(InputAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(InputAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(InputAction::Move(Direction::Down))
        }

        // Game
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputAction::Flip),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputAction::Submit),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(InputAction::NewGame),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(InputAction::Resume),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Restart),

        // Rules
        KeyCode::Char('?') | KeyCode::Char('i') | KeyCode::Char('I') => {
            Some(InputAction::ToggleRules)
        }
        KeyCode::Esc => Some(InputAction::CloseRules),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(InputAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(InputAction::Move(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(InputAction::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(InputAction::Move(Direction::Down))
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(InputAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(InputAction::Move(Direction::Down))
        );
    }

    #[test]
    fn test_game_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputAction::Flip)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(InputAction::Flip)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(InputAction::Submit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(InputAction::NewGame)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(InputAction::Resume)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(InputAction::Restart)
        );
    }

    #[test]
    fn test_rules_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('?'))),
            Some(InputAction::ToggleRules)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(InputAction::CloseRules)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}

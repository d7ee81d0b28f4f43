//! Key mapping from terminal events to input events.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Discrete input delivered to the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the game
    Quit,
    /// A game command
    Action(GameAction),
    /// The terminal changed size; redraw everything
    Resize,
}

/// Map a key press to an input event.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Some(InputEvent::Quit),

        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => GameAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => GameAction::MoveRight,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => GameAction::MoveDown,

        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => GameAction::RotateCw,
        KeyCode::Char('z') | KeyCode::Char('Z') => GameAction::RotateCcw,

        KeyCode::Char('r') | KeyCode::Char('R') => GameAction::Restart,

        _ => return None,
    };
    Some(InputEvent::Action(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn action(code: KeyCode) -> Option<InputEvent> {
        map_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(action(KeyCode::Left), Some(InputEvent::Action(GameAction::MoveLeft)));
        assert_eq!(action(KeyCode::Right), Some(InputEvent::Action(GameAction::MoveRight)));
        assert_eq!(action(KeyCode::Down), Some(InputEvent::Action(GameAction::MoveDown)));
        assert_eq!(
            action(KeyCode::Char('A')),
            Some(InputEvent::Action(GameAction::MoveLeft))
        );
        assert_eq!(
            action(KeyCode::Char('s')),
            Some(InputEvent::Action(GameAction::MoveDown))
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            action(KeyCode::Char('x')),
            Some(InputEvent::Action(GameAction::RotateCw))
        );
        assert_eq!(action(KeyCode::Up), Some(InputEvent::Action(GameAction::RotateCw)));
        assert_eq!(
            action(KeyCode::Char('z')),
            Some(InputEvent::Action(GameAction::RotateCcw))
        );
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(
            action(KeyCode::Char('r')),
            Some(InputEvent::Action(GameAction::Restart))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action(KeyCode::Char('q')), Some(InputEvent::Quit));
        assert_eq!(action(KeyCode::Esc), Some(InputEvent::Quit));
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
        assert_eq!(action(KeyCode::Char('c')), None);
        assert_eq!(action(KeyCode::Char(' ')), None);
    }
}

//! Key mapping from terminal events to game events.

use crate::types::GameEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game events.
pub fn handle_key_event(key: KeyEvent) -> Option<GameEvent> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameEvent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameEvent::MoveRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameEvent::MoveUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameEvent::MoveDown)
        }

        // Hold / place
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameEvent::Activate),

        // Return the held run
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => Some(GameEvent::Cancel),

        // Meta
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameEvent::NewGame),
        KeyCode::Char('?') | KeyCode::F(1) => Some(GameEvent::ToggleHelp),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

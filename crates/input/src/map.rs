//! Key mapping from terminal events to game actions.
//!
//! The letter mapping is case-sensitive; everything unrecognized is ignored
//! without error. Arrow keys alias the letters.

use blockfall_types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a keyboard event to a game action.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') => Some(GameAction::Rotate),
        _ => None,
    }
}

/// Whether the event asks to leave the game.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

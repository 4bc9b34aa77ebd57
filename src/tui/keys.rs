//! Keyboard mapping for the terminal adapter.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::Operator;
use crate::input::InputEvent;

/// What a key press asks the adapter to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an event to the engine.
    Input(InputEvent),
    /// Leave the calculator.
    Quit,
}

/// Map a terminal key event to an adapter action. Unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }
    let action = match key.code {
        KeyCode::Char(c @ ('0'..='9' | '.')) => KeyAction::Input(InputEvent::Digit(c)),
        KeyCode::Char(c @ ('+' | '-' | '*' | '/')) => {
            KeyAction::Input(InputEvent::Operator(Operator::from_key(c)?))
        }
        KeyCode::Char('=') | KeyCode::Enter => KeyAction::Input(InputEvent::Compute),
        KeyCode::Backspace => KeyAction::Input(InputEvent::Delete),
        KeyCode::Esc => KeyAction::Input(InputEvent::Clear),
        KeyCode::Char('q') => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}

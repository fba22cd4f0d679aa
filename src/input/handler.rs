use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Command),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Command::Up),
            KeyCode::Down => KeyAction::Steer(Command::Down),
            KeyCode::Left => KeyAction::Steer(Command::Left),
            KeyCode::Right => KeyAction::Steer(Command::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Command::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Command::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Command::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Command::Right),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

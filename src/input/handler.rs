use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Command;

const ARROW_LEFT: u32 = 37;
const ARROW_UP: u32 = 38;
const ARROW_RIGHT: u32 = 39;
const ARROW_DOWN: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// A key code the game has a binding for
    GameKey(u32),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Raw key code for a terminal key, using the browser keyboard numbering
    /// the game's key table is written against.
    pub fn key_code(&self, key: KeyEvent) -> Option<u32> {
        match key.code {
            KeyCode::Left => Some(ARROW_LEFT),
            KeyCode::Up => Some(ARROW_UP),
            KeyCode::Right => Some(ARROW_RIGHT),
            KeyCode::Down => Some(ARROW_DOWN),
            // Only letters and the speed keys; punctuation like '%' would
            // otherwise alias the arrow codes.
            KeyCode::Char(c) if c.is_ascii_alphabetic() || c == '+' || c == '-' => Some(c as u32),
            _ => None,
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            _ => self
                .key_code(key)
                .filter(|&code| Command::from_key_code(code).is_some())
                .map(KeyAction::GameKey)
                .unwrap_or(KeyAction::None),
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{InputEvent, Operator};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator button
    Press(InputEvent),
    /// Switch between light and night mode
    ToggleTheme,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Enter => KeyAction::Press(InputEvent::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(InputEvent::AllClear),
            _ => KeyAction::None,
        }
    }

    fn char_action(c: char) -> KeyAction {
        let event = match c {
            '0' => InputEvent::Zero,
            '1'..='9' => match InputEvent::digit(c as u8 - b'0') {
                Ok(event) => event,
                Err(_) => return KeyAction::None,
            },
            '.' | ',' => InputEvent::DecimalPoint,
            '+' => InputEvent::Operator(Operator::Add),
            '-' => InputEvent::Operator(Operator::Subtract),
            '*' | 'x' => InputEvent::Operator(Operator::Multiply),
            '/' => InputEvent::Operator(Operator::Divide),
            '=' => InputEvent::Equals,
            '%' => InputEvent::Percentage,
            'n' | '_' => InputEvent::ToggleSign,
            'c' | 'C' => InputEvent::AllClear,
            't' => return KeyAction::ToggleTheme,
            'q' => return KeyAction::Quit,
            _ => return KeyAction::None,
        };
        KeyAction::Press(event)
    }
}

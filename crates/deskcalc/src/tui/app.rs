//! TUI application state

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::config::{AppConfig, SymbolSet, Theme};
use crate::core::{CalculatorEngine, DisplayState, InputEvent};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    engine: CalculatorEngine,
    symbols: SymbolSet,
    theme: Theme,
    keypad: Keypad,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    /// Creates an app using the theme and glyphs from `config`
    #[must_use]
    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            symbols: config.symbols,
            theme: config.theme,
            keypad: Keypad::new(&config.symbols),
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the current theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches between light and night mode
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::info!(theme = ?self.theme, "theme changed");
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a calculator button and highlights it on the keypad
    pub fn press(&mut self, event: InputEvent) {
        self.engine.dispatch(event);
        self.keypad.highlight(event);
    }

    /// The two display lines
    #[must_use]
    pub fn display(&self) -> DisplayState {
        self.engine.display(&self.symbols)
    }

    /// Applies a keyboard action
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(event) => self.press(event),
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Presses the keypad button under a mouse click, if any
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        let event = self
            .keypad
            .hit_test(keypad_area, x, y)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.event);
        if let Some(event) = event {
            self.press(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.display().entry_line, "0");
        assert_eq!(app.display().expression_line, None);
        assert_eq!(app.theme(), Theme::Light);
        assert!(!app.should_quit());
        assert!(app.keypad().pressed().is_none());
    }

    #[test]
    fn test_app_with_config() {
        let config = AppConfig::new()
            .with_theme(Theme::Dark)
            .with_symbols(SymbolSet::Ascii);
        let mut app = CalculatorApp::with_config(&config);
        assert_eq!(app.theme(), Theme::Dark);
        for event in InputEvent::parse_sequence("6 * 7 =").unwrap() {
            app.press(event);
        }
        assert_eq!(app.display().expression_line.as_deref(), Some("6 * 7"));
    }

    #[test]
    fn test_press_highlights_key() {
        let mut app = CalculatorApp::new();
        app.press(InputEvent::digit(8).unwrap());
        assert_eq!(app.keypad().pressed().unwrap().label, "8");
        assert_eq!(app.engine().operand1(), 8.0);
    }

    #[test]
    fn test_handle_actions() {
        let mut app = CalculatorApp::new();
        app.handle(KeyAction::Press(InputEvent::digit(3).unwrap()));
        app.handle(KeyAction::ToggleTheme);
        app.handle(KeyAction::None);
        assert_eq!(app.display().entry_line, "3");
        assert_eq!(app.theme(), Theme::Dark);
        app.handle(KeyAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_click_presses_button() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 22, 12);
        // Row 1 col 0 is "7"
        app.click(area, 2, 3);
        assert_eq!(app.display().entry_line, "7");
        // Outside the grid does nothing
        app.click(area, 40, 40);
        assert_eq!(app.display().entry_line, "7");
    }
}

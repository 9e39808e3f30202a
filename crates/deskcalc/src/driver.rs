//! Calculator drivers
//!
//! A driver is anything that can receive button presses and report the two
//! display lines. Scenarios are written once against [`CalculatorDriver`]
//! and replayed on the bare engine or the terminal front-end.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::{
    CalculatorEngine, DisplayState, InputEvent, OperatorSymbols, UnicodeSymbols,
};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use deskcalc::prelude::*;
///
/// fn percent_of<D: CalculatorDriver>(driver: &mut D) {
///     driver.press_keys("2 0 + 1 0 %").unwrap();
///     assert_eq!(driver.entry_line(), "22");
///     assert_eq!(driver.expression_line().as_deref(), Some("20 + 10%"));
/// }
///
/// percent_of(&mut EngineDriver::new());
/// ```
pub trait CalculatorDriver {
    /// Presses one button
    fn press(&mut self, event: InputEvent);

    /// Gets the main display line
    fn entry_line(&self) -> String;

    /// Gets the expression line, if one is showing
    fn expression_line(&self) -> Option<String>;

    /// Presses the all-clear button
    fn clear(&mut self) {
        self.press(InputEvent::AllClear);
    }

    /// Presses each button in order
    fn press_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
        Self: Sized,
    {
        for event in events {
            self.press(event);
        }
    }

    /// Parses a whitespace-separated key sequence and presses it
    fn press_keys(&mut self, keys: &str) -> crate::core::CalcResult<()>
    where
        Self: Sized,
    {
        let events = InputEvent::parse_sequence(keys)?;
        self.press_all(events);
        Ok(())
    }

    /// Both display lines
    fn display(&self) -> DisplayState {
        DisplayState {
            entry_line: self.entry_line(),
            expression_line: self.expression_line(),
        }
    }
}

/// Driver over a bare engine and a glyph table
#[derive(Debug)]
pub struct EngineDriver<S = UnicodeSymbols> {
    engine: CalculatorEngine,
    symbols: S,
}

impl Default for EngineDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineDriver {
    /// Creates a driver rendering typographic glyphs
    #[must_use]
    pub fn new() -> Self {
        Self::with_symbols(UnicodeSymbols)
    }
}

impl<S: OperatorSymbols> EngineDriver<S> {
    /// Creates a driver rendering with `symbols`
    #[must_use]
    pub fn with_symbols(symbols: S) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            symbols,
        }
    }

    /// Returns a reference to the underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}

impl<S: OperatorSymbols> CalculatorDriver for EngineDriver<S> {
    fn press(&mut self, event: InputEvent) {
        self.engine.dispatch(event);
    }

    fn entry_line(&self) -> String {
        self.engine.entry_line().to_string()
    }

    fn expression_line(&self) -> Option<String> {
        self.engine.expression_line(&self.symbols)
    }
}

/// Engine handle for hosts with more than one thread
///
/// Every dispatch holds the lock for the whole transition and the display
/// read that follows it, so presses are applied one at a time.
#[derive(Debug, Clone, Default)]
pub struct SharedCalculator {
    engine: Arc<Mutex<CalculatorEngine>>,
}

impl SharedCalculator {
    /// Creates a handle to a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one press and returns the resulting display
    pub fn dispatch<S: OperatorSymbols + ?Sized>(
        &self,
        event: InputEvent,
        symbols: &S,
    ) -> DisplayState {
        let mut engine = self.lock();
        engine.dispatch(event);
        engine.display(symbols)
    }

    /// Reads the display without pressing anything
    pub fn display<S: OperatorSymbols + ?Sized>(&self, symbols: &S) -> DisplayState {
        self.lock().display(symbols)
    }

    // Transitions never panic midway, so a poisoned engine is still consistent.
    fn lock(&self) -> MutexGuard<'_, CalculatorEngine> {
        self.engine
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::InputEvent;
    use crate::tui::CalculatorApp;

    /// Driver over the terminal application state
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver around an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: InputEvent) {
            self.app.press(event);
        }

        fn entry_line(&self) -> String {
            self.app.display().entry_line
        }

        fn expression_line(&self) -> Option<String> {
            self.app.display().expression_line
        }
    }
}

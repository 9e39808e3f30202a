//! deskcalc - desk calculator input engine
//!
//! Interprets button presses (digits, operators, decimal point, sign toggle,
//! percentage, clear, equals) into a running calculation and the two lines a
//! calculator screen shows. One pending operation at a time, folded left to
//! right, the way a desk calculator works.
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! # fn main() -> CalcResult<()> {
//! let mut engine = CalculatorEngine::new();
//! engine.input_digit(Digit::new(3)?);
//! engine.input_operator(Operator::Add);
//! engine.input_digit(Digit::new(4)?);
//! engine.equals();
//!
//! let display = engine.display(&UnicodeSymbols);
//! assert_eq!(display.entry_line, "7");
//! assert_eq!(display.expression_line.as_deref(), Some("3 + 4"));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

pub use config::{AppConfig, SymbolSet, Theme, Verbosity};
pub use core::{CalcError, CalcResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AppConfig, SymbolSet, Theme};
    pub use crate::core::{
        format_display_value, AsciiSymbols, CalcError, CalcResult, CalculatorEngine, Completion,
        Digit, DigitKey, DisplayState, InputEvent, Operator, OperatorSymbols, UnicodeSymbols,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver, SharedCalculator};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

//! Core calculator module
//!
//! The engine itself is total: every button press is a valid transition and
//! arithmetic follows IEEE-754. Errors only arise at the edges, when key
//! tokens are parsed or when the host loads configuration.

pub mod engine;
mod entry;
pub mod event;
pub mod format;
mod operations;

pub use engine::{CalculatorEngine, Completion, DisplayState};
pub use entry::EntryBuffer;
pub use event::{Digit, DigitKey, InputEvent, KEY_TOKENS};
pub use format::format_display_value;
pub use operations::{AsciiSymbols, Operator, OperatorSymbols, UnicodeSymbols};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised outside the engine's state machine
#[derive(Debug, Error)]
pub enum CalcError {
    /// A key token did not name any calculator button
    #[error("Unknown key: {token}")]
    UnknownKey {
        /// The offending token
        token: String,
    },

    /// A digit outside 1..=9 (zero has its own events)
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(token: impl Into<String>) -> Self {
        Self::UnknownKey {
            token: token.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

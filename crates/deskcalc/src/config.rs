//! Application configuration

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::{AsciiSymbols, CalcError, CalcResult, Operator, OperatorSymbols, UnicodeSymbols};

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Informational output
    Verbose,
    /// Every computation
    Debug,
    /// Every key press and transition
    Trace,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// The `EnvFilter` directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Screen colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background
    #[default]
    Light,
    /// Night mode
    Dark,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Indicator for the theme button: a moon offers night mode, a sun leaves it
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Which operator glyphs the display uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SymbolSet {
    /// `+ − × ÷`
    #[default]
    Unicode,
    /// `+ - * /`
    Ascii,
}

static UNICODE: UnicodeSymbols = UnicodeSymbols;
static ASCII: AsciiSymbols = AsciiSymbols;

impl OperatorSymbols for SymbolSet {
    fn symbol(&self, op: Operator) -> &str {
        match self {
            Self::Unicode => UNICODE.symbol(op),
            Self::Ascii => ASCII.symbol(op),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log verbosity
    pub verbosity: Verbosity,
    /// Screen colour scheme
    pub theme: Theme,
    /// Operator glyphs
    pub symbols: SymbolSet,
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a JSON configuration file; missing fields take their defaults
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CalcError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set operator glyphs
    #[must_use]
    pub const fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.symbols = symbols;
        self
    }
}

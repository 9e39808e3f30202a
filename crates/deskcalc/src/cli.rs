//! CLI command definitions using clap

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::config::{AppConfig, SymbolSet, Theme, Verbosity};
use crate::core::{CalcResult, CalculatorEngine, DisplayState, InputEvent, KEY_TOKENS};

/// deskcalc: a desk calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Operator glyphs on the expression line
    #[arg(long, value_enum, global = true)]
    pub symbols: Option<SymbolSet>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the configuration: file first, then flags on top
    pub fn app_config(&self) -> CalcResult<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if self.verbose > 0 || self.quiet {
            config = config.with_verbosity(Verbosity::from_flags(self.verbose, self.quiet));
        }
        if let Some(symbols) = self.symbols {
            config = config.with_symbols(symbols);
        }
        if let Commands::Run(RunArgs {
            theme: Some(theme), ..
        }) = &self.command
        {
            config = config.with_theme(*theme);
        }
        Ok(config)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keys and print the display
    Eval(EvalArgs),

    /// Start the interactive terminal calculator
    Run(RunArgs),

    /// List accepted key tokens
    Keys,
}

/// Arguments for `eval`
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Key tokens, e.g. `2 0 + 1 0 %`
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for `run`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Colour scheme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Write logs to this file instead of the screen
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Output format for `eval`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Two plain lines
    #[default]
    Text,
    /// One JSON object per display
    Json,
}

#[derive(Serialize)]
struct Step<'a> {
    key: Option<&'a InputEvent>,
    #[serde(flatten)]
    display: &'a DisplayState,
}

/// Replays key tokens and writes the display
pub fn run_eval<W: Write>(args: &EvalArgs, config: &AppConfig, out: &mut W) -> CalcResult<()> {
    let events = args
        .keys
        .iter()
        .map(|token| token.parse())
        .collect::<CalcResult<Vec<InputEvent>>>()?;

    let mut engine = CalculatorEngine::new();
    for event in &events {
        engine.dispatch(*event);
        if args.trace {
            write_display(out, args.format, Some(event), &engine.display(&config.symbols))?;
        }
    }
    if !args.trace {
        write_display(out, args.format, None, &engine.display(&config.symbols))?;
    }
    Ok(())
}

fn write_display<W: Write>(
    out: &mut W,
    format: OutputFormat,
    key: Option<&InputEvent>,
    display: &DisplayState,
) -> CalcResult<()> {
    match format {
        OutputFormat::Text => {
            if let Some(key) = key {
                write!(out, "{:>3} | ", key.to_string())?;
            }
            match &display.expression_line {
                Some(expression) => writeln!(out, "{} ({expression})", display.entry_line)?,
                None => writeln!(out, "{}", display.entry_line)?,
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &Step { key, display })?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes the key token table
pub fn run_keys<W: Write>(out: &mut W) -> CalcResult<()> {
    for (tokens, meaning) in KEY_TOKENS {
        writeln!(out, "{tokens:<12} {meaning}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let config = cli.app_config().unwrap();
        let Commands::Eval(eval_args) = &cli.command else {
            panic!("expected eval");
        };
        let mut out = Vec::new();
        run_eval(eval_args, &config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_eval_text() {
        assert_eq!(eval(&["deskcalc", "eval", "3", "+", "4", "="]), "7 (3 + 4)\n");
    }

    #[test]
    fn test_eval_without_expression() {
        assert_eq!(eval(&["deskcalc", "eval", "1", ".", "5", "+/-"]), "-1.5\n");
    }

    #[test]
    fn test_eval_ascii_symbols() {
        assert_eq!(
            eval(&["deskcalc", "--symbols", "ascii", "eval", "6", "x", "7", "="]),
            "42 (6 * 7)\n"
        );
    }

    #[test]
    fn test_eval_subtract_token() {
        assert_eq!(eval(&["deskcalc", "eval", "9", "-", "4", "="]), "5 (9 − 4)\n");
    }

    #[test]
    fn test_eval_trace() {
        let out = eval(&["deskcalc", "eval", "--trace", "2", "+", "2", "="]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  2 | 2");
        assert_eq!(lines[3], "  = | 4 (2 + 2)");
    }

    #[test]
    fn test_eval_json() {
        let out = eval(&["deskcalc", "eval", "--format", "json", "2", "0", "+", "1", "0", "%"]);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["entry_line"], "22");
        assert_eq!(value["expression_line"], "20 + 10%");
        assert!(value["key"].is_null());
    }

    #[test]
    fn test_eval_unknown_key() {
        let cli = Cli::try_parse_from(["deskcalc", "eval", "1", "sqrt"]).unwrap();
        let Commands::Eval(args) = &cli.command else {
            panic!("expected eval");
        };
        let err = run_eval(args, &AppConfig::default(), &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Unknown key: sqrt");
    }

    #[test]
    fn test_app_config_from_flags() {
        let cli = Cli::try_parse_from(["deskcalc", "-vv", "run", "--theme", "dark"]).unwrap();
        let config = cli.app_config().unwrap();
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.symbols, SymbolSet::Unicode);
    }

    #[test]
    fn test_keys_table() {
        let mut out = Vec::new();
        run_keys(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), KEY_TOKENS.len());
        assert!(text.contains("all clear"));
    }

    #[test]
    fn test_eval_requires_keys() {
        assert!(Cli::try_parse_from(["deskcalc", "eval"]).is_err());
    }
}

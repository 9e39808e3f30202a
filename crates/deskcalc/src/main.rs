//! deskcalc: desk calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! deskcalc eval 2 0 + 1 0 %      # Replay keys, print the display
//! deskcalc eval --trace 3 + 4 =  # Print the display after every key
//! deskcalc run --theme dark      # Interactive calculator
//! deskcalc keys                  # List key tokens
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use deskcalc::cli::{run_eval, run_keys, Cli, Commands};
use deskcalc::{logging, CalcResult};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CalcResult<()> {
    let cli = Cli::parse();
    let config = cli.app_config()?;

    match &cli.command {
        Commands::Eval(args) => {
            logging::init(config.verbosity, None)?;
            run_eval(args, &config, &mut io::stdout().lock())
        }
        Commands::Keys => run_keys(&mut io::stdout().lock()),
        Commands::Run(args) => {
            // Logging to stderr would draw over the screen
            if let Some(path) = &args.log_file {
                logging::init(config.verbosity, Some(path))?;
            }
            run_interactive(&config)
        }
    }
}

#[cfg(feature = "tui")]
fn run_interactive(config: &deskcalc::AppConfig) -> CalcResult<()> {
    deskcalc::tui::run(config)
}

#[cfg(not(feature = "tui"))]
fn run_interactive(_config: &deskcalc::AppConfig) -> CalcResult<()> {
    Err(deskcalc::CalcError::config(
        "terminal UI not enabled. Rebuild with --features tui",
    ))
}

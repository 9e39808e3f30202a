//! Tracing subscriber setup for the binary

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::core::{CalcError, CalcResult};

/// Builds the event filter: `RUST_LOG` wins, otherwise the verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| verbosity_filter(verbosity))
}

/// The event filter for a verbosity level, ignoring the environment
#[must_use]
pub fn verbosity_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::new(verbosity.filter_directive())
}

/// Installs the global subscriber
///
/// Logs go to stderr, or to `log_file` when the terminal UI owns the screen.
pub fn init(verbosity: Verbosity, log_file: Option<&Path>) -> CalcResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| CalcError::config(format!("cannot install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filter_levels() {
        let cases = [
            (Verbosity::Quiet, "error"),
            (Verbosity::Normal, "warn"),
            (Verbosity::Verbose, "info"),
            (Verbosity::Debug, "debug"),
            (Verbosity::Trace, "trace"),
        ];
        for (verbosity, expected) in cases {
            assert_eq!(verbosity_filter(verbosity).to_string(), expected);
        }
    }

    #[test]
    fn test_init_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deskcalc.log");
        // Only one global subscriber per process; a second init reports an error
        let first = init(Verbosity::Trace, Some(&path));
        assert!(path.exists());
        if first.is_ok() {
            assert!(matches!(
                init(Verbosity::Trace, Some(&path)),
                Err(CalcError::Config { .. })
            ));
        }
    }
}

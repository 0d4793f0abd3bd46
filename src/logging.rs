//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so command output on stdout
//! stays clean for scripting.

use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Store mutations and other info events.
    Verbose,
    /// Everything, including storage writes.
    Trace,
}

impl Verbosity {
    /// Pick a verbosity from `-q` and the number of `-v` flags.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    #[must_use]
    pub fn to_level(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `verbosity`.
/// Calling this more than once is harmless.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("crewboard={}", verbosity.to_level());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .without_time(),
    );

    let _ = subscriber.try_init();
}

//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the level passed on the command line.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// No subscriber is installed; used while the TUI owns the terminal
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Pick a target: a log file always wins, otherwise stderr unless the
    /// terminal is taken over
    #[must_use]
    pub const fn select(log_file: Option<&'a Path>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if owns_terminal => Self::Disabled,
            None => Self::Stderr,
        }
    }
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'")),
    }
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter, the log file cannot be
/// created, or a subscriber is already installed.
pub fn init_tracing(level: &str, target: LogTarget<'_>) -> Result<()> {
    let registry = tracing_subscriber::registry();

    match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter(level)?)
            .try_init()?,
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(env_filter(level)?)
                .try_init()?;
        }
    }

    tracing::trace!("tracing initialized");
    Ok(())
}

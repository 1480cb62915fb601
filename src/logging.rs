//! Tracing subscriber initialization for the wa-checkout binary.
//!
//! Level priority, highest first: `RUST_LOG`, then `-v` (debug) / `-q`
//! (error), then the default `warn`.
//!
//! One-shot commands log to stderr. The TUI owns the terminal, so it only
//! logs when `--log-file` is given.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub const fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::DEBUG,
        }
    }
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(verbosity.level().into()))
}

/// Install the global subscriber. Call once, before loading config.
pub fn init_subscriber(verbosity: Verbosity, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = build_env_filter(verbosity);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
                .try_init()?;
        }
        None if interactive => {}
        None => {
            let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).with_ansi(use_ansi))
                .try_init()?;
        }
    }

    Ok(())
}

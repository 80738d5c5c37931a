//! Logging infrastructure for docpath.
//!
//! The library reports diagnostics through the `log` facade. This module
//! provides a stderr backend for it with three coarse verbosity levels, so
//! binaries can turn library diagnostics on without pulling in a full
//! logging stack.

use std::env;
use std::fmt;
use std::str::FromStr;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::Error;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "DOCPATH_LOG_MODE";

/// How much the stderr logger lets through.
///
/// Variants are ordered by how much they print, so `Quiet < Verbose`.
///
/// ```
/// use docpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!("Verbose".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// Nothing at all.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Every record, trace included.
    Verbose,
}

impl LogLevel {
    /// Name accepted by `DOCPATH_LOG_MODE`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }

    /// The `log` crate filter corresponding to this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Quiet, Self::Normal, Self::Verbose]
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation {
                field: LOG_MODE_ENV.to_string(),
                message: format!("unknown log mode '{s}' (expected quiet, normal or verbose)"),
            })
    }
}

/// A stderr backend for the `log` facade.
///
/// # Examples
///
/// ```
/// use docpath::{Logger, LogLevel};
/// use log::Level;
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.accepts(Level::Error));
/// assert!(!logger.accepts(Level::Debug));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a record at `level` would be written.
    #[must_use]
    pub fn accepts(&self, level: Level) -> bool {
        level <= self.level.filter()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.accepts(metadata.level())
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Resolves the log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet; verbose wins if both are set)
/// 2. `DOCPATH_LOG_MODE` environment variable
/// 3. Default (Normal)
#[must_use]
pub fn resolve_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LogLevel::Normal)
}

/// Installs the stderr logger as the global `log` backend.
///
/// Only the first call installs a backend; later calls just adjust the
/// maximum level. Returns the level in effect.
///
/// # Examples
///
/// ```
/// use docpath::{init_logger, LogLevel};
///
/// let level = init_logger(false, true);
/// assert_eq!(level, LogLevel::Quiet);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = resolve_level(verbose, quiet);

    let installed = log::set_boxed_logger(Box::new(Logger::new(level)));
    log::set_max_level(level.filter());

    // Tests and embedding applications may have installed a backend already.
    if let Err(err) = installed {
        log::debug!("keeping existing logger ({err}); level set to {level}");
    }

    level
}

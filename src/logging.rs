//! Log verbosity and the logger handle
//!
//! Severities keep the classic numeric scale (lower is more detailed) so the
//! verbosity arithmetic stays `default - step * count`, clamped at DEBUG.
//! The resulting [`Logger`] owns its own dispatcher instead of installing a
//! process-wide subscriber; callers run code inside [`Logger::in_scope`].

use std::fmt;

use tracing::Dispatch;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::context::Environment;
use crate::settings::{LOGGING_DEFAULT_LEVEL, LOGGING_LEVEL_STEP};

/// Minimum severity a logger emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
}

impl Severity {
    /// The most detailed severity; verbosity never goes below it
    pub const FINEST: Severity = Severity::Debug;

    /// Step `default` down one level per `-v`, never finer than [`Severity::FINEST`].
    pub fn from_verbosity(default: Severity, verbose: u8) -> Self {
        let lowered = u32::from(default.value())
            .saturating_sub(u32::from(verbose) * u32::from(LOGGING_LEVEL_STEP));
        Self::from_value(lowered.max(u32::from(Self::FINEST.value())))
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    fn from_value(value: u32) -> Self {
        match value {
            0..=10 => Severity::Debug,
            11..=20 => Severity::Info,
            21..=30 => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Equivalent `tracing` filter
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Severity::Debug => LevelFilter::DEBUG,
            Severity::Info => LevelFilter::INFO,
            Severity::Warning => LevelFilter::WARN,
            Severity::Error => LevelFilter::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Logger handle produced from a verbosity count.
#[derive(Clone)]
pub struct Logger {
    severity: Severity,
    dispatch: Dispatch,
}

impl Logger {
    /// Logger writing to stderr, colored only when stderr is a terminal
    pub fn configure(verbose: u8, env: &Environment) -> Self {
        Self::with_writer(verbose, std::io::stderr, env.stderr_isatty)
    }

    pub fn with_writer<W>(verbose: u8, writer: W, ansi: bool) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let severity = Severity::from_verbosity(LOGGING_DEFAULT_LEVEL, verbose);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(severity.level_filter())
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(true)
            .finish();

        Self {
            severity,
            dispatch: Dispatch::new(subscriber),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Run `f` with this logger as the current thread's default dispatcher
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

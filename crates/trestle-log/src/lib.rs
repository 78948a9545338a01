//! Leveled console logging with ANSI styling and a raw-output fallback.
//!
//! A [`Logger`] writes one line per message, styled by severity, filtered by
//! a threshold level, and directed at any `Write` sink (stdout by default).
//! Pre-formatted text — a rendered table, a diff, anything multi-line — goes
//! through [`Logger::output`] untouched: no re-wrapping, no re-coloring.
//!
//! # Example
//!
//! ```rust
//! use trestle_log::{Level, Logger, OutputMode};
//!
//! let mut logger = Logger::new();
//! logger.set_level(Level::Debug).set_output_mode(OutputMode::Text);
//!
//! logger.info("starting up");
//! logger.debug("verbose detail");
//! ```

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use console::{Style, Term};
use thiserror::Error;

/// Message severity, ordered from most to least verbose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Diagnostic detail, hidden by default.
    Debug,
    /// Routine progress messages (the default threshold).
    Info,
    /// Something unexpected but recoverable.
    Warn,
    /// An operation failed.
    Error,
    /// The application cannot continue.
    Critical,
}

impl Level {
    fn style(self) -> Style {
        match self {
            Level::Debug | Level::Info => Style::new().dim(),
            Level::Warn => Style::new().yellow(),
            Level::Error => Style::new().red(),
            Level::Critical => Style::new().red().bold(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Critical => "critical",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown log level '{0}'")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "critical" => Ok(Level::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Controls whether log lines carry ANSI styling.
///
/// `Text` is the raw-output preference for piped or captured output: the
/// message text alone, no escape codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Detect terminal color support automatically.
    #[default]
    Auto,
    /// Always emit ANSI styling.
    Term,
    /// Never emit ANSI styling.
    Text,
}

impl OutputMode {
    /// Resolve the mode to a concrete color decision.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

/// A leveled line logger over any `Write` sink.
///
/// Messages below the threshold level are suppressed entirely. Sink write
/// failures are swallowed: logging never takes the application down.
pub struct Logger {
    level: Level,
    mode: OutputMode,
    sink: Box<dyn Write + Send>,
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// A logger writing to stdout at the `Info` threshold.
    pub fn new() -> Self {
        Logger::with_sink(io::stdout())
    }

    /// A logger writing to the given sink at the `Info` threshold.
    pub fn with_sink<W: Write + Send + 'static>(sink: W) -> Self {
        Logger {
            level: Level::Info,
            mode: OutputMode::default(),
            sink: Box::new(sink),
        }
    }

    /// Set the threshold; messages below it are dropped.
    pub fn set_level(&mut self, level: Level) -> &mut Self {
        self.level = level;
        self
    }

    /// The current threshold level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Set the styling mode.
    pub fn set_output_mode(&mut self, mode: OutputMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Log one message at the given level.
    pub fn log(&mut self, level: Level, message: &str) {
        if level < self.level {
            return;
        }
        let line = if self.mode.should_use_color() {
            format!("{}\n", level.style().force_styling(true).apply_to(message))
        } else {
            format!("{message}\n")
        };
        self.emit(&line);
    }

    /// Log at `Debug` level.
    pub fn debug(&mut self, message: &str) {
        self.log(Level::Debug, message);
    }

    /// Log at `Info` level.
    pub fn info(&mut self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Log at `Warn` level.
    pub fn warn(&mut self, message: &str) {
        self.log(Level::Warn, message);
    }

    /// Log at `Error` level.
    pub fn error(&mut self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Log at `Critical` level.
    pub fn critical(&mut self, message: &str) {
        self.log(Level::Critical, message);
    }

    /// Write an error and its source chain, one line per cause, unstyled.
    pub fn log_error(&mut self, error: &dyn std::error::Error) {
        let mut text = format!("{error}\n");
        let mut source = error.source();
        while let Some(cause) = source {
            text.push_str(&format!("caused by: {cause}\n"));
            source = cause.source();
        }
        self.emit(&text);
    }

    /// Write pre-formatted text exactly as given.
    ///
    /// The text is not leveled, styled, wrapped, or terminated; what goes in
    /// is what reaches the sink. This is the hand-off point for rendered
    /// tables and other already-shaped output.
    pub fn output(&mut self, text: &str) {
        self.emit(text);
    }

    fn emit(&mut self, text: &str) {
        let _ = self.sink.write_all(text.as_bytes());
        let _ = self.sink.flush();
    }
}

//! The leveled console logger.
//!
//! A [`Logger`] holds a resolved [`Style`], a debug flag and two sinks. Each
//! per-level method formats one line and writes it immediately: `err` goes to
//! the error sink, everything else to the output sink. Whether a line carries
//! icons and colors is decided once, at construction, from the output sink's
//! terminal state.

mod builder;
mod choice;
mod facade;
mod format;

use std::fmt::Display;
use std::io;

use console::Term;

pub use builder::LoggerBuilder;
pub use choice::StyleChoice;

use crate::level::{Level, Target};
use crate::output::{Decoration, OutputMode};
use crate::sink::Sink;
use crate::style::{default_preset, Style, StyleError};
use format::{format_line, render_message};

/// Prints leveled, optionally decorated messages.
///
/// # Example
///
/// ```rust,no_run
/// use termlog::Logger;
///
/// let logger = Logger::new(true, "cli")?;
/// logger.log("resolving dependencies")?;
/// logger.ok("build finished")?;
/// logger.err("upload failed")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Logger<S = Term> {
    debug: bool,
    style: Style,
    is_tty: bool,
    decoration: Decoration,
    out: S,
    err: S,
}

impl Logger<Term> {
    /// Creates a logger writing to stdout and stderr.
    ///
    /// `style` is a preset name or a [`Style`]; names resolve against the
    /// built-in presets with no overrides.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyle`] if a named style is not registered.
    pub fn new(debug: bool, style: impl Into<StyleChoice>) -> Result<Self, StyleError> {
        Self::builder().debug(debug).style(style).build()
    }

    pub fn builder() -> LoggerBuilder<Term> {
        LoggerBuilder::new()
    }
}

impl Default for Logger<Term> {
    fn default() -> Self {
        Logger::from_parts(
            false,
            default_preset().clone(),
            OutputMode::Auto,
            Decoration::FULL,
            Term::stdout(),
            Term::stderr(),
        )
    }
}

impl<S: Sink> Logger<S> {
    /// Assembles a logger from an already-resolved style.
    ///
    /// `allowed` holds the color/icon switches; they take effect only when
    /// `mode` resolves to decorated output for the output sink.
    pub(crate) fn from_parts(
        debug: bool,
        style: Style,
        mode: OutputMode,
        allowed: Decoration,
        out: S,
        err: S,
    ) -> Self {
        let is_tty = out.is_terminal();
        let decoration = Decoration::resolve(mode.resolve(is_tty), allowed.color, allowed.icons);
        Self {
            debug,
            style,
            is_tty,
            decoration,
            out,
            err,
        }
    }

    /// Whether `log`-level messages are printed.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Whether the output sink was a terminal at construction.
    pub fn is_tty(&self) -> bool {
        self.is_tty
    }

    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    /// Formats the line `level` would print for `message`.
    ///
    /// Returns `None` when the level is suppressed (`log` outside debug mode).
    pub fn line(&self, level: Level, message: impl Display) -> Option<String> {
        if level.is_debug_only() && !self.debug {
            return None;
        }
        let message = render_message(message);
        Some(format_line(self.style.spec(level), &message, self.decoration))
    }

    /// Formats and writes one message at `level`.
    ///
    /// # Errors
    ///
    /// Propagates the sink's I/O error.
    pub fn write(&self, level: Level, message: impl Display) -> io::Result<()> {
        let Some(line) = self.line(level, message) else {
            return Ok(());
        };
        match level.target() {
            Target::Out => self.out.write_line(&line),
            Target::Err => self.err.write_line(&line),
        }
    }

    /// Debug output; a no-op unless the logger is in debug mode.
    pub fn log(&self, message: impl Display) -> io::Result<()> {
        self.write(Level::Log, message)
    }

    pub fn info(&self, message: impl Display) -> io::Result<()> {
        self.write(Level::Info, message)
    }

    pub fn ok(&self, message: impl Display) -> io::Result<()> {
        self.write(Level::Ok, message)
    }

    pub fn warn(&self, message: impl Display) -> io::Result<()> {
        self.write(Level::Warn, message)
    }

    /// Writes to the error sink.
    pub fn err(&self, message: impl Display) -> io::Result<()> {
        self.write(Level::Err, message)
    }
}

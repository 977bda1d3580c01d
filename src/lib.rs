//! # termlog
//!
//! Leveled console logging with icons, colors and automatic terminal detection.
//!
//! A [`Logger`] prints one line per call at five levels: `log`, `info`, `ok`,
//! `warn` and `err`. When standard output is an interactive terminal, lines
//! carry the level's icon and color; when output is piped or redirected, only
//! the label and message are printed. Errors go to standard error, everything
//! else to standard output. `log` is debug chatter and prints only when the
//! logger is in debug mode.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use termlog::Logger;
//!
//! let logger = Logger::new(false, "cli")?;
//! logger.info("fetching index")?;
//! logger.ok("42 packages up to date")?;
//! logger.warn("cache is stale")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Styles
//!
//! A [`Style`] holds an icon, a label and a color for every level. Built-in
//! presets (`default`, `classic`, `minimal`, `cli`, `emoji`, `plain`) live in
//! [`StyleRegistry::builtin`]. Individual fields are patched with
//! `<level>_<field>` overrides, which always produce a new style:
//!
//! ```rust
//! use termlog::{get_style, Level};
//!
//! let style = get_style("cli", [("warn_icon", "⚡"), ("warn_label", "[heads-up]")])?;
//! assert_eq!(style.spec(Level::Warn).color, "208");
//! # Ok::<(), termlog::StyleError>(())
//! ```
//!
//! Unknown style names and malformed overrides are errors, reported when the
//! style is resolved rather than when a message is written.
//!
//! ## Output modes
//!
//! [`OutputMode::Auto`] (the default) decorates only when the output sink is a
//! terminal. [`OutputMode::Term`] and [`OutputMode::Text`] force the choice,
//! and [`LoggerBuilder::color`] / [`LoggerBuilder::icons`] switch each
//! decoration off independently.
//!
//! ## The `log` facade
//!
//! A logger can back the `log` crate's macros via [`Logger::install`].

mod config;
mod level;
mod logger;
mod output;
mod sink;
pub mod style;

pub use config::{LoggerConfig, DEBUG_ENV};
pub use level::{Level, ParseLevelError, Target};
pub use logger::{Logger, LoggerBuilder, StyleChoice};
pub use output::{Decoration, OutputMode};
pub use sink::{Capture, Sink};
pub use style::{get_style, LevelSpec, Style, StyleError, StyleRegistry, DEFAULT_STYLE};

//! Fluent logger construction.

use console::Term;

use super::choice::StyleChoice;
use super::Logger;
use crate::output::{Decoration, OutputMode};
use crate::sink::Sink;
use crate::style::{StyleError, StyleRegistry};

/// Builder for [`Logger`].
///
/// Defaults: debug off, the `default` preset, [`OutputMode::Auto`], color and
/// icons enabled, writing to stdout and stderr.
///
/// # Example
///
/// ```rust
/// use termlog::{Capture, Logger, OutputMode};
///
/// let out = Capture::new();
/// let logger = Logger::builder()
///     .debug(true)
///     .style("cli")
///     .override_field("ok_label", "[done]")
///     .mode(OutputMode::Text)
///     .sinks(out.clone(), Capture::new())
///     .build()
///     .unwrap();
///
/// logger.ok("deployed").unwrap();
/// assert_eq!(out.contents(), "[done] deployed\n");
/// ```
#[derive(Debug, Clone)]
pub struct LoggerBuilder<S = Term> {
    debug: bool,
    style: StyleChoice,
    overrides: Vec<(String, String)>,
    registry: Option<StyleRegistry>,
    mode: OutputMode,
    use_color: bool,
    use_icons: bool,
    out: S,
    err: S,
}

impl LoggerBuilder<Term> {
    /// Creates a builder targeting stdout and stderr.
    pub fn new() -> Self {
        Self {
            debug: false,
            style: StyleChoice::default(),
            overrides: Vec::new(),
            registry: None,
            mode: OutputMode::Auto,
            use_color: true,
            use_icons: true,
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }
}

impl Default for LoggerBuilder<Term> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sink> LoggerBuilder<S> {
    /// Enables `log`-level output.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Selects a preset by name or supplies a resolved style.
    pub fn style(mut self, style: impl Into<StyleChoice>) -> Self {
        self.style = style.into();
        self
    }

    /// Adds one `<level>_<field>` override, applied on top of the style.
    pub fn override_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Adds several overrides at once.
    pub fn overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.overrides
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Resolves style names against `registry` instead of the built-in presets.
    pub fn registry(mut self, registry: StyleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Allows colors when decorating. Has no effect on plain output.
    pub fn color(mut self, enabled: bool) -> Self {
        self.use_color = enabled;
        self
    }

    /// Allows icons when decorating. Has no effect on plain output.
    pub fn icons(mut self, enabled: bool) -> Self {
        self.use_icons = enabled;
        self
    }

    /// Replaces the output and error sinks.
    pub fn sinks<T: Sink>(self, out: T, err: T) -> LoggerBuilder<T> {
        LoggerBuilder {
            debug: self.debug,
            style: self.style,
            overrides: self.overrides,
            registry: self.registry,
            mode: self.mode,
            use_color: self.use_color,
            use_icons: self.use_icons,
            out,
            err,
        }
    }

    /// Resolves the style and reads the output sink's terminal state.
    ///
    /// # Errors
    ///
    /// Returns a [`StyleError`] if the style name is unknown or an override
    /// is invalid.
    pub fn build(self) -> Result<Logger<S>, StyleError> {
        let resolved = match &self.registry {
            Some(registry) => self.style.resolve(registry)?,
            None => self.style.resolve(StyleRegistry::builtin())?,
        };
        let style = resolved.with_overrides(self.overrides)?;

        let allowed = Decoration {
            color: self.use_color,
            icons: self.use_icons,
        };
        Ok(Logger::from_parts(
            self.debug,
            style,
            self.mode,
            allowed,
            self.out,
            self.err,
        ))
    }
}

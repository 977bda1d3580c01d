//! In-memory logger configuration.
//!
//! [`LoggerConfig`] is a plain data description of a logger that can be
//! deserialized from whatever settings structure a host program already has.
//! All fields are optional.
//!
//! # Example
//!
//! ```rust
//! use termlog::{Capture, Level, LoggerConfig};
//!
//! let config: LoggerConfig = serde_json::from_value(serde_json::json!({
//!     "style": "cli",
//!     "overrides": { "warn_label": "[careful]" },
//!     "mode": "text"
//! }))
//! .unwrap();
//!
//! let out = Capture::new();
//! let logger = config.build_with_sinks(out.clone(), Capture::new()).unwrap();
//! logger.warn("low disk").unwrap();
//! assert_eq!(out.contents(), "[careful] low disk\n");
//! ```

use std::collections::BTreeMap;

use console::Term;
use serde::{Deserialize, Serialize};

use crate::logger::{Logger, LoggerBuilder};
use crate::output::OutputMode;
use crate::sink::Sink;
use crate::style::{StyleError, DEFAULT_STYLE};

/// Environment variable read by [`LoggerConfig::with_env_debug`].
pub const DEBUG_ENV: &str = "DEBUG_LOGS";

/// Serializable logger settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub debug: bool,
    /// Preset name.
    pub style: String,
    /// `<level>_<field>` overrides applied on top of the preset.
    pub overrides: BTreeMap<String, String>,
    pub mode: OutputMode,
    pub color: bool,
    pub icons: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            style: DEFAULT_STYLE.to_string(),
            overrides: BTreeMap::new(),
            mode: OutputMode::Auto,
            color: true,
            icons: true,
        }
    }
}

impl LoggerConfig {
    /// Turns debug on if `DEBUG_LOGS` is `1`, `true` or `yes` (any case).
    ///
    /// An already-enabled debug flag stays enabled.
    pub fn with_env_debug(mut self) -> Self {
        let from_env = std::env::var(DEBUG_ENV)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);
        self.debug = self.debug || from_env;
        self
    }

    /// Converts into a builder targeting stdout and stderr.
    pub fn into_builder(self) -> LoggerBuilder<Term> {
        LoggerBuilder::new()
            .debug(self.debug)
            .style(self.style)
            .overrides(self.overrides)
            .mode(self.mode)
            .color(self.color)
            .icons(self.icons)
    }

    /// Builds a logger writing to stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns a [`StyleError`] for an unknown style or invalid override.
    pub fn build(self) -> Result<Logger<Term>, StyleError> {
        self.into_builder().build()
    }

    /// Builds a logger writing to the given sinks.
    pub fn build_with_sinks<S: Sink>(self, out: S, err: S) -> Result<Logger<S>, StyleError> {
        self.into_builder().sinks(out, err).build()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::sink::Capture;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert!(!config.debug);
        assert_eq!(config.style, "default");
        assert!(config.color && config.icons);
    }

    #[test]
    fn test_empty_object_deserializes_to_default() {
        let config: LoggerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<LoggerConfig, _> = serde_json::from_str(r#"{"colour": false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_applies_everything() {
        let config = LoggerConfig {
            debug: true,
            style: "minimal".to_string(),
            overrides: BTreeMap::from([("log_label".to_string(), "dbg".to_string())]),
            mode: OutputMode::Term,
            color: false,
            icons: true,
        };
        let out = Capture::new();
        let logger = config.build_with_sinks(out.clone(), Capture::new()).unwrap();
        logger.log("tick").unwrap();

        assert_eq!(logger.style().spec(Level::Log).label, "dbg");
        assert_eq!(out.contents(), "• dbg tick\n");
    }

    #[test]
    fn test_build_reports_bad_style() {
        let config = LoggerConfig {
            style: "nope".to_string(),
            ..LoggerConfig::default()
        };
        assert!(matches!(
            config.build_with_sinks(Capture::new(), Capture::new()),
            Err(StyleError::UnknownStyle { .. })
        ));
    }

    #[test]
    fn test_is_truthy() {
        for value in ["1", "true", "TRUE", "Yes", " yes "] {
            assert!(is_truthy(value), "{value:?}");
        }
        for value in ["", "0", "false", "no", "on"] {
            assert!(!is_truthy(value), "{value:?}");
        }
    }

    #[test]
    #[serial]
    fn test_env_debug_enables() {
        std::env::set_var(DEBUG_ENV, "true");
        let config = LoggerConfig::default().with_env_debug();
        std::env::remove_var(DEBUG_ENV);
        assert!(config.debug);
    }

    #[test]
    #[serial]
    fn test_env_debug_absent_keeps_flag() {
        std::env::remove_var(DEBUG_ENV);
        assert!(!LoggerConfig::default().with_env_debug().debug);

        let explicit = LoggerConfig {
            debug: true,
            ..LoggerConfig::default()
        };
        assert!(explicit.with_env_debug().debug);
    }

    #[test]
    #[serial]
    fn test_env_debug_falsy_value() {
        std::env::set_var(DEBUG_ENV, "0");
        let config = LoggerConfig::default().with_env_debug();
        std::env::remove_var(DEBUG_ENV);
        assert!(!config.debug);
    }
}

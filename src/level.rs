//! Message levels and the stream each one is routed to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named category of message.
///
/// The set is closed: every [`Style`](crate::Style) carries a spec for each
/// of these five levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Debug chatter, printed only when the logger runs in debug mode.
    Log,
    Info,
    Ok,
    Warn,
    Err,
}

/// Which standard stream a level writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Out,
    Err,
}

impl Level {
    /// All levels, in declaration order.
    pub const ALL: [Level; 5] = [Level::Log, Level::Info, Level::Ok, Level::Warn, Level::Err];

    /// The lowercase name used in override keys and configuration.
    pub fn name(self) -> &'static str {
        match self {
            Level::Log => "log",
            Level::Info => "info",
            Level::Ok => "ok",
            Level::Warn => "warn",
            Level::Err => "err",
        }
    }

    /// Errors go to stderr so they stay visible when stdout is redirected.
    pub fn target(self) -> Target {
        match self {
            Level::Err => Target::Err,
            _ => Target::Out,
        }
    }

    /// Whether output at this level is suppressed outside debug mode.
    pub fn is_debug_only(self) -> bool {
        self == Level::Log
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level '{0}' (expected one of: log, info, ok, warn, err)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Level, ParseLevelError> {
        Level::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

//! Style resolution errors.

/// Error returned when a style cannot be resolved.
///
/// These are configuration errors: they surface when a style is looked up or
/// a logger is built, never when a message is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The requested style name is not registered.
    #[error("unknown style '{name}' (available: {})", available.join(", "))]
    UnknownStyle { name: String, available: Vec<String> },

    /// An override key does not name a known `<level>_<field>` pair.
    #[error("invalid style override '{key}' (expected <level>_<field>, e.g. warn_icon)")]
    InvalidOverride { key: String },

    /// A color override contains a token the terminal styler does not understand.
    #[error("invalid color '{value}' for override '{key}'")]
    InvalidColor { key: String, value: String },
}

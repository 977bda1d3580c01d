//! Style selection at logger construction.

use crate::style::{Style, StyleError, StyleRegistry, DEFAULT_STYLE};

/// Either a preset name to resolve or an already-built style.
///
/// Lets constructors accept `"cli"` and a [`Style`] value alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleChoice {
    /// A name looked up in a [`StyleRegistry`].
    Named(String),
    /// A style used as-is.
    Resolved(Style),
}

impl StyleChoice {
    /// Resolves to a concrete style.
    ///
    /// Named choices are looked up in `registry`; resolved styles are returned
    /// unchanged.
    pub fn resolve(self, registry: &StyleRegistry) -> Result<Style, StyleError> {
        match self {
            StyleChoice::Named(name) => registry.get_style(&name),
            StyleChoice::Resolved(style) => Ok(style),
        }
    }
}

impl Default for StyleChoice {
    fn default() -> Self {
        StyleChoice::Named(DEFAULT_STYLE.to_string())
    }
}

impl From<&str> for StyleChoice {
    fn from(name: &str) -> Self {
        StyleChoice::Named(name.to_string())
    }
}

impl From<String> for StyleChoice {
    fn from(name: String) -> Self {
        StyleChoice::Named(name)
    }
}

impl From<Style> for StyleChoice {
    fn from(style: Style) -> Self {
        StyleChoice::Resolved(style)
    }
}

impl From<&Style> for StyleChoice {
    fn from(style: &Style) -> Self {
        StyleChoice::Resolved(style.clone())
    }
}

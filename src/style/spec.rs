//! Per-level display specs and complete styles.

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// The icon, label and color used for one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub icon: String,
    pub label: String,
    /// A dotted color string; see [`crate::style::is_valid_color`].
    pub color: String,
}

impl LevelSpec {
    pub fn new(icon: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            color: color.into(),
        }
    }
}

/// A field of a [`LevelSpec`], as named in override keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Icon,
    Label,
    Color,
}

impl Field {
    pub(crate) fn parse(s: &str) -> Option<Field> {
        match s {
            "icon" => Some(Field::Icon),
            "label" => Some(Field::Label),
            "color" => Some(Field::Color),
            _ => None,
        }
    }
}

/// A complete, named set of level specs.
///
/// Every level has a spec, so lookups cannot fail. Styles are immutable:
/// [`Style::with_field`] returns a modified copy.
///
/// # Example
///
/// ```rust
/// use termlog::{Level, LevelSpec, Style};
///
/// let style = Style::new(
///     "project",
///     LevelSpec::new("·", "[debug]", "dim"),
///     LevelSpec::new("i", "[info]", "cyan"),
///     LevelSpec::new("+", "[done]", "green"),
///     LevelSpec::new("!", "[careful]", "yellow"),
///     LevelSpec::new("x", "[failed]", "red.bold"),
/// );
/// assert_eq!(style.spec(Level::Ok).label, "[done]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    name: String,
    log: LevelSpec,
    info: LevelSpec,
    ok: LevelSpec,
    warn: LevelSpec,
    err: LevelSpec,
}

impl Style {
    pub fn new(
        name: impl Into<String>,
        log: LevelSpec,
        info: LevelSpec,
        ok: LevelSpec,
        warn: LevelSpec,
        err: LevelSpec,
    ) -> Self {
        Self {
            name: name.into(),
            log,
            info,
            ok,
            warn,
            err,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the spec for `level`.
    pub fn spec(&self, level: Level) -> &LevelSpec {
        match level {
            Level::Log => &self.log,
            Level::Info => &self.info,
            Level::Ok => &self.ok,
            Level::Warn => &self.warn,
            Level::Err => &self.err,
        }
    }

    /// Returns a copy of this style under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Style {
        Style {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with one field of one level replaced.
    pub fn with_field(&self, level: Level, field: Field, value: impl Into<String>) -> Style {
        let mut style = self.clone();
        let spec = style.spec_mut(level);
        let value = value.into();
        match field {
            Field::Icon => spec.icon = value,
            Field::Label => spec.label = value,
            Field::Color => spec.color = value,
        }
        style
    }

    fn spec_mut(&mut self, level: Level) -> &mut LevelSpec {
        match level {
            Level::Log => &mut self.log,
            Level::Info => &mut self.info,
            Level::Ok => &mut self.ok,
            Level::Warn => &mut self.warn,
            Level::Err => &mut self.err,
        }
    }
}

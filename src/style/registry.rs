//! Named style presets.
//!
//! [`StyleRegistry`] maps names to complete [`Style`]s and resolves a name
//! plus optional overrides into a fresh style. The built-in presets live in a
//! lazily-built table that is never mutated after creation; projects that want
//! their own presets build a registry on top of it with
//! [`StyleRegistry::with_builtins`] and [`StyleRegistry::add`].
//!
//! # Built-in presets
//!
//! | Name      | Icons          | Labels             | Colors        |
//! |-----------|----------------|--------------------|---------------|
//! | `default` | symbol emoji   | `[Log]`, `[OK]`... | yes           |
//! | `classic` | none           | `[LOG]`, `[OK]`... | yes           |
//! | `minimal` | single glyphs  | none               | yes           |
//! | `cli`     | arrows, marks  | `[step]`, `[ok]`...| yes           |
//! | `emoji`   | pictographs    | `[Log]`, `[OK]`... | yes           |
//! | `plain`   | none           | `[Log]`, `[OK]`... | none          |

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::error::StyleError;
use super::spec::{LevelSpec, Style};

/// Name of the preset used when no style is requested.
pub const DEFAULT_STYLE: &str = "default";

const DIM: &str = "dim";
const GRAY: &str = "black.bright";
const GREEN: &str = "green";
const BLUE: &str = "blue";
const CYAN: &str = "cyan";
const ORANGE: &str = "208";
const RED: &str = "red";

static BUILTIN: Lazy<StyleRegistry> = Lazy::new(|| {
    StyleRegistry::new()
        .add(default_style())
        .add(classic_style())
        .add(minimal_style())
        .add(cli_style())
        .add(emoji_style())
        .add(plain_style())
});

fn default_style() -> Style {
    Style::new(
        DEFAULT_STYLE,
        LevelSpec::new("•", "[Log]", DIM),
        LevelSpec::new("ℹ️", "[Info]", BLUE),
        LevelSpec::new("✅", "[OK]", GREEN),
        LevelSpec::new("⚠️", "[Warn]", ORANGE),
        LevelSpec::new("❌", "[Error]", RED),
    )
}

fn classic_style() -> Style {
    Style::new(
        "classic",
        LevelSpec::new("", "[LOG]", DIM),
        LevelSpec::new("", "[INFO]", BLUE),
        LevelSpec::new("", "[OK]", GREEN),
        LevelSpec::new("", "[WARN]", ORANGE),
        LevelSpec::new("", "[ERR]", RED),
    )
}

fn minimal_style() -> Style {
    Style::new(
        "minimal",
        LevelSpec::new("•", "", GRAY),
        LevelSpec::new("i", "", GRAY),
        LevelSpec::new("✓", "", GREEN),
        LevelSpec::new("!", "", ORANGE),
        LevelSpec::new("x", "", RED),
    )
}

fn cli_style() -> Style {
    Style::new(
        "cli",
        LevelSpec::new("›", "[step]", DIM),
        LevelSpec::new("ℹ", "[info]", CYAN),
        LevelSpec::new("✔", "[ok]", GREEN),
        LevelSpec::new("▲", "[warn]", ORANGE),
        LevelSpec::new("✖", "[error]", RED),
    )
}

fn emoji_style() -> Style {
    Style::new(
        "emoji",
        LevelSpec::new("📝", "[Log]", DIM),
        LevelSpec::new("🧠", "[Info]", BLUE),
        LevelSpec::new("✅", "[OK]", GREEN),
        LevelSpec::new("⚠️", "[Warn]", ORANGE),
        LevelSpec::new("💥", "[Error]", RED),
    )
}

fn plain_style() -> Style {
    Style::new(
        "plain",
        LevelSpec::new("", "[Log]", ""),
        LevelSpec::new("", "[Info]", ""),
        LevelSpec::new("", "[OK]", ""),
        LevelSpec::new("", "[Warn]", ""),
        LevelSpec::new("", "[Error]", ""),
    )
}

/// A set of named styles.
///
/// # Example
///
/// ```rust
/// use termlog::{Level, StyleRegistry};
///
/// let registry = StyleRegistry::with_builtins()
///     .add(StyleRegistry::builtin().get("cli").unwrap().renamed("deploy"));
///
/// let style = registry
///     .get_style_with("deploy", [("warn_label", "[hold]")])
///     .unwrap();
/// assert_eq!(style.spec(Level::Warn).label, "[hold]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: BTreeMap<String, Style>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared table of built-in presets.
    pub fn builtin() -> &'static StyleRegistry {
        &BUILTIN
    }

    /// Creates a registry pre-populated with the built-in presets.
    pub fn with_builtins() -> Self {
        BUILTIN.clone()
    }

    /// Adds a style under its own name, replacing any style of the same name.
    pub fn add(mut self, style: Style) -> Self {
        self.styles.insert(style.name().to_string(), style);
        self
    }

    /// Returns the stored style for `name`, if registered.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Resolves `name` into a style with no overrides.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyle`] if `name` is not registered.
    pub fn get_style(&self, name: &str) -> Result<Style, StyleError> {
        self.lookup(name).cloned()
    }

    /// Resolves `name` and applies `overrides` to a copy of the preset.
    ///
    /// Override keys have the form `<level>_<field>`, e.g. `warn_icon`,
    /// `err_label` or `ok_color`. The stored preset is never modified.
    ///
    /// # Errors
    ///
    /// - [`StyleError::UnknownStyle`] if `name` is not registered
    /// - [`StyleError::InvalidOverride`] if a key names no level/field pair
    /// - [`StyleError::InvalidColor`] if a color override cannot be parsed
    pub fn get_style_with<I, K, V>(&self, name: &str, overrides: I) -> Result<Style, StyleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.lookup(name)?.with_overrides(overrides)
    }

    fn lookup(&self, name: &str) -> Result<&Style, StyleError> {
        self.styles
            .get(name)
            .ok_or_else(|| StyleError::UnknownStyle {
                name: name.to_string(),
                available: self.styles.keys().cloned().collect(),
            })
    }
}

/// Resolves a built-in preset with optional overrides.
///
/// Shorthand for [`StyleRegistry::builtin`] followed by
/// [`StyleRegistry::get_style_with`].
///
/// # Example
///
/// ```rust
/// use termlog::{get_style, Level};
///
/// let style = get_style("cli", [("warn_icon", "!")]).unwrap();
/// assert_eq!(style.spec(Level::Warn).icon, "!");
/// assert_eq!(style.spec(Level::Warn).label, "[warn]");
/// ```
pub fn get_style<I, K, V>(name: &str, overrides: I) -> Result<Style, StyleError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    StyleRegistry::builtin().get_style_with(name, overrides)
}

/// The built-in default preset.
pub fn default_preset() -> &'static Style {
    // The builtin table always registers DEFAULT_STYLE.
    &BUILTIN.styles[DEFAULT_STYLE]
}

//! Sparse per-field patches applied on top of a preset.

use super::color::is_valid_color;
use super::error::StyleError;
use super::spec::{Field, Style};
use crate::level::Level;

/// Splits an override key such as `warn_icon` into its level and field.
fn parse_key(key: &str) -> Result<(Level, Field), StyleError> {
    let invalid = || StyleError::InvalidOverride {
        key: key.to_string(),
    };
    let (level, field) = key.split_once('_').ok_or_else(invalid)?;
    let level = level.parse::<Level>().map_err(|_| invalid())?;
    let field = Field::parse(field).ok_or_else(invalid)?;
    Ok((level, field))
}

/// Applies `overrides` to a copy of `base`.
///
/// Every key is validated before the result is returned, so a bad key never
/// yields a partially patched style.
fn apply<I, K, V>(base: &Style, overrides: I) -> Result<Style, StyleError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut style = base.clone();
    for (key, value) in overrides {
        let key = key.as_ref();
        let (level, field) = parse_key(key)?;
        let value = value.into();
        if field == Field::Color && !is_valid_color(&value) {
            return Err(StyleError::InvalidColor {
                key: key.to_string(),
                value,
            });
        }
        style = style.with_field(level, field, value);
    }
    Ok(style)
}

impl Style {
    /// Returns a copy with `overrides` applied.
    ///
    /// Keys have the form `<level>_<field>`, e.g. `warn_icon` or `err_color`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidOverride`] for an unknown key and
    /// [`StyleError::InvalidColor`] for an unparseable color value.
    pub fn with_overrides<I, K, V>(&self, overrides: I) -> Result<Style, StyleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        apply(self, overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LevelSpec;

    fn base() -> Style {
        Style::new(
            "base",
            LevelSpec::new(".", "[log]", "dim"),
            LevelSpec::new("i", "[info]", "blue"),
            LevelSpec::new("+", "[ok]", "green"),
            LevelSpec::new("!", "[warn]", "yellow"),
            LevelSpec::new("x", "[err]", "red"),
        )
    }

    #[test]
    fn test_parse_key_valid() {
        assert_eq!(parse_key("warn_icon"), Ok((Level::Warn, Field::Icon)));
        assert_eq!(parse_key("err_color"), Ok((Level::Err, Field::Color)));
        assert_eq!(parse_key("log_label"), Ok((Level::Log, Field::Label)));
    }

    #[test]
    fn test_parse_key_unknown_level() {
        assert!(matches!(
            parse_key("error_icon"),
            Err(StyleError::InvalidOverride { key }) if key == "error_icon"
        ));
    }

    #[test]
    fn test_parse_key_unknown_field() {
        assert!(parse_key("warn_glyph").is_err());
    }

    #[test]
    fn test_parse_key_without_separator() {
        assert!(parse_key("warn").is_err());
        assert!(parse_key("").is_err());
    }

    #[test]
    fn test_apply_patches_only_named_fields() {
        let style = apply(&base(), [("warn_icon", "▲"), ("warn_label", "[careful]")]).unwrap();

        assert_eq!(style.spec(Level::Warn).icon, "▲");
        assert_eq!(style.spec(Level::Warn).label, "[careful]");
        assert_eq!(style.spec(Level::Warn).color, "yellow");
        assert_eq!(style.spec(Level::Err), base().spec(Level::Err));
    }

    #[test]
    fn test_apply_empty_is_identity() {
        let none: [(&str, &str); 0] = [];
        assert_eq!(apply(&base(), none).unwrap(), base());
    }

    #[test]
    fn test_apply_rejects_bad_color() {
        let err = apply(&base(), [("ok_color", "chartreuse")]).unwrap_err();
        assert_eq!(
            err,
            StyleError::InvalidColor {
                key: "ok_color".to_string(),
                value: "chartreuse".to_string(),
            }
        );
    }

    #[test]
    fn test_apply_accepts_empty_color() {
        let style = apply(&base(), [("err_color", "")]).unwrap();
        assert_eq!(style.spec(Level::Err).color, "");
    }
}

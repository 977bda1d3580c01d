//! Color identifiers and how they are painted.
//!
//! A color is a dotted `console` style string: a foreground name
//! (`"green"`), a 256-palette index (`"208"`), attributes (`"dim"`,
//! `"bold"`) and modifiers (`"bright"`) joined by dots, e.g.
//! `"black.bright"` or `"red.bold"`. The empty string means "no color".

use console::Style as TermStyle;

/// Returns true if every dotted token of `color` is understood by `console`.
///
/// A token counts as understood when `console` turns it into a non-empty
/// style; tokens it silently drops (`crimson`, `on_dim`) are rejected.
pub fn is_valid_color(color: &str) -> bool {
    if color.is_empty() {
        return true;
    }
    color
        .split('.')
        .all(|token| TermStyle::from_dotted_str(token) != TermStyle::new())
}

/// Wraps `text` in the escape sequences for `color`, followed by a reset.
///
/// Styling is forced: whether to decorate at all is decided by the caller.
/// An empty color leaves the text untouched.
pub fn paint(color: &str, text: &str) -> String {
    if color.is_empty() {
        return text.to_string();
    }
    TermStyle::from_dotted_str(color)
        .force_styling(true)
        .apply_to(text)
        .to_string()
}

//! Line formatting.

use std::fmt::{Display, Write};

use crate::output::Decoration;
use crate::style::{paint, LevelSpec};

/// Appended when a message's `Display` impl reports an error.
pub(crate) const UNFORMATTABLE: &str = "<unformattable>";

/// Renders `message`, keeping any partial output if its `Display` impl fails.
pub(crate) fn render_message(message: impl Display) -> String {
    let mut text = String::new();
    if write!(text, "{message}").is_err() {
        text.push_str(UNFORMATTABLE);
    }
    text
}

/// Builds the line for one message, without the trailing newline.
///
/// Decorated lines read `<icon> <color><label> <message><reset>`; plain lines
/// read `<label> <message>`. Empty icons, labels and colors drop out along
/// with their separating space.
pub(crate) fn format_line(spec: &LevelSpec, message: &str, decoration: Decoration) -> String {
    let label = spec.label.trim();
    let body = if label.is_empty() {
        message.to_string()
    } else {
        format!("{label} {message}")
    };

    let body = if decoration.color {
        paint(&spec.color, &body)
    } else {
        body
    };

    if decoration.icons && !spec.icon.is_empty() {
        format!("{} {body}", spec.icon)
    } else {
        body
    }
}

//! Output mode selection and the decoration it resolves to.

use serde::{Deserialize, Serialize};

/// Controls whether lines are decorated with icons and colors.
///
/// - `Auto`: decorate only when the output sink is an interactive terminal
/// - `Term`: always decorate, even when piped
/// - `Text`: never decorate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
}

impl OutputMode {
    /// Resolves the mode against the sink's terminal state.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            OutputMode::Auto => is_terminal,
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

/// Which decorations are applied to each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoration {
    pub color: bool,
    pub icons: bool,
}

impl Decoration {
    /// No icons, no escapes.
    pub const PLAIN: Decoration = Decoration {
        color: false,
        icons: false,
    };

    /// Both icons and colors.
    pub const FULL: Decoration = Decoration {
        color: true,
        icons: true,
    };

    /// Combines terminal state with the per-feature switches.
    pub fn resolve(tty: bool, use_color: bool, use_icons: bool) -> Self {
        Self {
            color: tty && use_color,
            icons: tty && use_icons,
        }
    }
}

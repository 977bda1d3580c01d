//! Style system: per-level specs, named presets and overrides.
//!
//! This module provides:
//!
//! - [`LevelSpec`]: icon, label and color for one level
//! - [`Style`]: a complete, immutable set of level specs
//! - [`StyleRegistry`]: named presets and override resolution
//! - [`StyleError`]: errors from style resolution

mod color;
mod error;
mod overrides;
mod registry;
mod spec;

pub use color::{is_valid_color, paint};
pub use error::StyleError;
pub use registry::{default_preset, get_style, StyleRegistry, DEFAULT_STYLE};
pub use spec::{Field, LevelSpec, Style};

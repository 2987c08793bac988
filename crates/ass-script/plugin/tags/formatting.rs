//! Basic text formatting tags
//!
//! - `b`: bold, `0`/`1` or a font weight such as `700`
//! - `i`: italic
//! - `u`: underline
//! - `s`: strikeout
//!
//! Each takes one optional integer; without it the style's value is restored.

use crate::plugin::{ParamSpec, TagSchema, ValueKind};

/// On, off or a font weight
const WEIGHT: &[ParamSpec] = &[ParamSpec::optional("weight", ValueKind::Int)];
/// On or off
const STATE: &[ParamSpec] = &[ParamSpec::optional("state", ValueKind::Int)];

/// Bold (`\b`)
pub static BOLD: TagSchema = TagSchema::bare("Bold", "b", WEIGHT);

/// Italic (`\i`)
pub static ITALIC: TagSchema = TagSchema::bare("Italic", "i", STATE);

/// Underline (`\u`)
pub static UNDERLINE: TagSchema = TagSchema::bare("Underline", "u", STATE);

/// Strikeout (`\s`)
pub static STRIKEOUT: TagSchema = TagSchema::bare("StrikeOut", "s", STATE);

/// All basic formatting schemas
pub static SCHEMAS: [&TagSchema; 4] = [&BOLD, &ITALIC, &UNDERLINE, &STRIKEOUT];

//! Alignment and wrapping tags: `an` (numpad), `a` (legacy) and `q`

use crate::plugin::{ParamSpec, TagSchema, ValueKind};

/// Numpad alignment (`\an1`..`\an9`)
pub static ALIGN: TagSchema = TagSchema::bare(
    "Align",
    "an",
    &[ParamSpec::optional("side", ValueKind::Int)],
);

/// Legacy SSA alignment (`\a`)
pub static ALIGN_LEGACY: TagSchema = TagSchema::bare(
    "AlignLegacy",
    "a",
    &[ParamSpec::optional("side", ValueKind::Int)],
);

/// Wrap style (`\q0`..`\q3`)
pub static WRAP_STYLE: TagSchema = TagSchema::bare(
    "WrapStyle",
    "q",
    &[ParamSpec::optional("style", ValueKind::Int)],
);

/// Every schema in this module
pub static SCHEMAS: [&TagSchema; 3] = [&ALIGN, &ALIGN_LEGACY, &WRAP_STYLE];

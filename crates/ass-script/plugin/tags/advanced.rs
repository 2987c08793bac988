//! Border, shadow and edge blur tags
//!
//! `bord`, `shad` and their per-axis forms take one real size. `be` and
//! `blur` take a real strength.

use crate::plugin::{ParamSpec, TagSchema, ValueKind};

/// One optional size in pixels
const SIZE: &[ParamSpec] = &[ParamSpec::optional("size", ValueKind::Real)];
/// One optional blur strength
const STRENGTH: &[ParamSpec] = &[ParamSpec::optional("strength", ValueKind::Real)];

/// Border width (`\bord`)
pub static BORDER: TagSchema = TagSchema::bare("Border", "bord", SIZE);
/// Horizontal border width (`\xbord`)
pub static BORDER_X: TagSchema = TagSchema::bare("BorderX", "xbord", SIZE);
/// Vertical border width (`\ybord`)
pub static BORDER_Y: TagSchema = TagSchema::bare("BorderY", "ybord", SIZE);
/// Shadow depth (`\shad`)
pub static SHADOW: TagSchema = TagSchema::bare("Shadow", "shad", SIZE);
/// Horizontal shadow offset (`\xshad`)
pub static SHADOW_X: TagSchema = TagSchema::bare("ShadowX", "xshad", SIZE);
/// Vertical shadow offset (`\yshad`)
pub static SHADOW_Y: TagSchema = TagSchema::bare("ShadowY", "yshad", SIZE);

/// Edge blur (`\be`)
pub static BLUR_EDGES: TagSchema = TagSchema::bare("BlurEdges", "be", STRENGTH);

/// Gaussian blur (`\blur`)
pub static BLUR: TagSchema = TagSchema::bare("Blur", "blur", STRENGTH);

/// Every schema in this module
pub static SCHEMAS: [&TagSchema; 8] = [
    &BORDER,
    &BORDER_X,
    &BORDER_Y,
    &SHADOW,
    &SHADOW_X,
    &SHADOW_Y,
    &BLUR_EDGES,
    &BLUR,
];

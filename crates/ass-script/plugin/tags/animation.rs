//! Fade tags
//!
//! `fad(in,out)` is the two-argument fade; `fade` is the seven-argument
//! alpha/time form. Animated `\t(...)` transforms are not decoded.

use crate::plugin::{ParamSpec, TagSchema, ValueKind};

/// Simple fade in/out in milliseconds
pub static FADE_SIMPLE: TagSchema = TagSchema::parenthesized(
    "Fad",
    "fad",
    &[
        ParamSpec::required("fade_in", ValueKind::Int),
        ParamSpec::required("fade_out", ValueKind::Int),
    ],
);

/// Complex fade: three alphas and four times
pub static FADE: TagSchema = TagSchema::parenthesized(
    "Fade",
    "fade",
    &[
        ParamSpec::required("a1", ValueKind::Int),
        ParamSpec::required("a2", ValueKind::Int),
        ParamSpec::required("a3", ValueKind::Int),
        ParamSpec::required("t1", ValueKind::Int),
        ParamSpec::required("t2", ValueKind::Int),
        ParamSpec::required("t3", ValueKind::Int),
        ParamSpec::required("t4", ValueKind::Int),
    ],
);

/// Every schema in this module
pub static SCHEMAS: [&TagSchema; 2] = [&FADE_SIMPLE, &FADE];

//! Positioning tags: `pos`, `move` and `org`

use crate::plugin::{ParamSpec, TagSchema, ValueKind};

/// One required point
const POINT: &[ParamSpec] = &[
    ParamSpec::required("x", ValueKind::Real),
    ParamSpec::required("y", ValueKind::Real),
];

/// Absolute position (`\pos(x,y)`)
pub static POSITION: TagSchema = TagSchema::parenthesized("Position", "pos", POINT);

/// Linear movement with optional start and end times in milliseconds
pub static MOVE: TagSchema = TagSchema::parenthesized(
    "Move",
    "move",
    &[
        ParamSpec::required("x1", ValueKind::Real),
        ParamSpec::required("y1", ValueKind::Real),
        ParamSpec::required("x2", ValueKind::Real),
        ParamSpec::required("y2", ValueKind::Real),
        ParamSpec::optional("t1", ValueKind::Int),
        ParamSpec::optional("t2", ValueKind::Int),
    ],
);

/// Rotation origin (`\org(x,y)`)
pub static ORIGIN: TagSchema = TagSchema::parenthesized("Origin", "org", POINT);

/// Every schema in this module
pub static SCHEMAS: [&TagSchema; 3] = [&POSITION, &MOVE, &ORIGIN];

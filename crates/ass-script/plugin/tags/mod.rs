//! Standard override tag schemas, grouped by purpose
//!
//! - [`formatting`] - bold, italic, underline, strikeout
//! - [`advanced`] - border, shadow and blur
//! - [`font`] - font name, size and encoding
//! - [`transform`] - scale, spacing, rotation and shear
//! - [`color`] - colors and alpha
//! - [`alignment`] - `\an`, `\a` and `\q`
//! - [`karaoke`] - `\k`, `\kf`, `\K`, `\ko`
//! - [`position`] - `\pos`, `\move`, `\org`
//! - [`animation`] - `\fad` and `\fade`
//! - [`clipping`] - `\clip` and `\iclip`
//! - [`misc`] - `\r` and `\p`

use super::TagSchema;

pub mod advanced;
pub mod alignment;
pub mod animation;
pub mod clipping;
pub mod color;
pub mod font;
pub mod formatting;
pub mod karaoke;
pub mod misc;
pub mod position;
pub mod transform;

/// Every standard schema in authoring order
pub fn standard_schemas() -> impl Iterator<Item = &'static TagSchema> {
    formatting::SCHEMAS
        .iter()
        .chain(advanced::SCHEMAS.iter())
        .chain(font::SCHEMAS.iter())
        .chain(transform::SCHEMAS.iter())
        .chain(color::SCHEMAS.iter())
        .chain(alignment::SCHEMAS.iter())
        .chain(karaoke::SCHEMAS.iter())
        .chain(position::SCHEMAS.iter())
        .chain(animation::SCHEMAS.iter())
        .chain(clipping::SCHEMAS.iter())
        .chain(misc::SCHEMAS.iter())
        .copied()
}

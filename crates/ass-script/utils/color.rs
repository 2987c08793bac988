//! ASS color scalar
//!
//! Colors are written as `&H` followed by up to eight hex digits in
//! `AABBGGRR` order, optionally closed by a trailing `&`. The alpha byte is
//! inverted (`00` is opaque) and is omitted from output when it is zero.
//!
//! # Example
//!
//! ```rust
//! use ass_script::utils::Color;
//!
//! let blue = Color::parse("&HFF0000&")?;
//! assert_eq!(blue.blue(), 0xFF);
//! assert_eq!(blue.to_string(), "&HFF0000");
//! assert_eq!(blue.to_tag_string(), "&HFF0000&");
//! # Ok::<(), ass_script::utils::CoreError>(())
//! ```

use super::errors::{invalid_color, CoreError};
use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Packed `AABBGGRR` color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Color(u32);

impl Color {
    /// Opaque white, the default primary fill
    pub const WHITE: Self = Self(0x00FF_FFFF);

    /// Opaque black, the default outline and shadow
    pub const BLACK: Self = Self(0x0000_0000);

    /// Wrap a raw `AABBGGRR` value
    #[must_use]
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// Build from channels; `alpha` uses ASS inversion (0 = opaque)
    #[must_use]
    pub const fn from_channels(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(
            (alpha as u32) << 24 | (blue as u32) << 16 | (green as u32) << 8 | red as u32,
        )
    }

    /// Raw `AABBGGRR` value
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Alpha, `0` is opaque
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Blue channel
    #[must_use]
    pub const fn blue(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Red channel
    #[must_use]
    pub const fn red(self) -> u8 {
        self.0 as u8
    }

    /// Parse `&HBBGGRR`, `&HAABBGGRR`, either with optional trailing `&`
    ///
    /// The `&H` prefix may be lowercase or absent. Between one and eight hex
    /// digits are accepted; shorter values are zero-extended on the left.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidColor`] when the body is empty, longer than
    /// eight digits or contains a non-hex character.
    pub fn parse(src: &str) -> Result<Self, CoreError> {
        let trimmed = src.trim();
        let body = trimmed
            .strip_prefix("&H")
            .or_else(|| trimmed.strip_prefix("&h"))
            .unwrap_or(trimmed);
        let body = body.strip_suffix('&').unwrap_or(body);

        if body.is_empty() || body.len() > 8 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid_color(src));
        }

        u32::from_str_radix(body, 16)
            .map(Self)
            .map_err(|_| invalid_color(src))
    }

    /// Field form: `&H`, alpha byte only when non-zero, six uppercase digits
    #[must_use]
    pub fn to_ass_string(self) -> String {
        let alpha = self.alpha();
        if alpha == 0 {
            format!("&H{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            format!("&H{alpha:02X}{:06X}", self.0 & 0x00FF_FFFF)
        }
    }

    /// Override-tag form, the field form closed by `&`
    #[must_use]
    pub fn to_tag_string(self) -> String {
        let mut out = self.to_ass_string();
        out.push('&');
        out
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ass_string())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

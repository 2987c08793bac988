//! Scalars and helpers shared by the parser and the tag registry
//!
//! Holds the two typed scalars of the format ([`Color`] and [`Timestamp`]),
//! the value-level error types and a couple of small decoding helpers.
//!
//! # Example
//!
//! ```rust
//! use ass_script::utils::{parse_numeric, Color, Timestamp};
//!
//! assert_eq!(parse_numeric::<f64>(" 3.5 ")?, 3.5);
//! assert_eq!(Timestamp::parse("0:00:01.50")?.as_millis(), 1500);
//! assert_eq!(Color::parse("&HFFFFFF")?, Color::WHITE);
//! # Ok::<(), ass_script::utils::CoreError>(())
//! ```

use core::fmt;

pub mod color;
pub mod errors;
pub mod hashers;
pub mod time;

pub use color::Color;
pub use errors::{CoreError, PluginError};
pub use hashers::{create_hash_map, create_hash_map_with_capacity};
pub use time::Timestamp;

/// Parse a numeric field after trimming surrounding whitespace
///
/// # Errors
///
/// Returns [`CoreError::InvalidNumeric`] if the string cannot be parsed as
/// the target numeric type.
pub fn parse_numeric<T>(value_str: &str) -> Result<T, CoreError>
where
    T: core::str::FromStr,
    T::Err: fmt::Display,
{
    value_str
        .trim()
        .parse()
        .map_err(|e| errors::invalid_numeric(value_str, &format!("{e}")))
}

/// Render a real number the way script files write it
///
/// Integral values drop the fractional part (`100`, not `100.0`); other
/// values use the shortest representation that parses back identically.
#[must_use]
pub fn format_real(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numeric_trims() {
        assert_eq!(parse_numeric::<i32>(" -12 ").unwrap(), -12);
        assert_eq!(parse_numeric::<f64>("1.25").unwrap(), 1.25);
    }

    #[test]
    fn parse_numeric_reports_value() {
        let err = parse_numeric::<i32>("12px").unwrap_err();
        assert!(matches!(err, CoreError::InvalidNumeric(ref msg) if msg.contains("12px")));
    }

    #[test]
    fn reals_render_without_trailing_zero() {
        assert_eq!(format_real(100.0), "100");
        assert_eq!(format_real(3.5), "3.5");
        assert_eq!(format_real(-0.25), "-0.25");
    }
}

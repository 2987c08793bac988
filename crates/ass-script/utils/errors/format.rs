//! Constructors for format-level value errors
//!
//! Keeps the wording of color, numeric and time failures in one place so the
//! diagnostics produced by different decoders read the same.

use super::CoreError;
use core::fmt;

/// Create a color format error
///
/// # Examples
///
/// ```rust
/// use ass_script::utils::errors::{invalid_color, CoreError};
///
/// let error = invalid_color("&Hxyz");
/// assert!(matches!(error, CoreError::InvalidColor(_)));
/// ```
pub fn invalid_color<T: fmt::Display>(format: T) -> CoreError {
    CoreError::InvalidColor(format.to_string())
}

/// Create a numeric parsing error with value and reason
pub fn invalid_numeric<T: fmt::Display>(value: T, reason: &str) -> CoreError {
    CoreError::InvalidNumeric(format!("'{value}': {reason}"))
}

/// Create a time format error with value and reason
pub fn invalid_time<T: fmt::Display>(time: T, reason: &str) -> CoreError {
    CoreError::InvalidTime(format!("'{time}': {reason}"))
}

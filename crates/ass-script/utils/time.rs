//! Event timestamp scalar
//!
//! Timestamps are written `H:MM:SS.cc`. Fractional digits are read as a
//! decimal fraction of a second, so `.5`, `.50` and `.500` all mean 500 ms.
//! The value is kept in milliseconds and rendered back with two-digit
//! centiseconds; precision below a centisecond is dropped on output.

use super::errors::{invalid_time, CoreError};
use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Point in time on the script timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Timestamp {
    /// Milliseconds since the start
    millis: u32,
}

impl Timestamp {
    /// Zero, the start of the timeline
    pub const ZERO: Self = Self { millis: 0 };

    /// Timestamp from milliseconds
    #[must_use]
    pub const fn from_millis(millis: u32) -> Self {
        Self { millis }
    }

    /// Milliseconds since the start
    #[must_use]
    pub const fn as_millis(self) -> u32 {
        self.millis
    }

    /// Whole centiseconds, the unit the file format stores
    #[must_use]
    pub const fn as_centis(self) -> u32 {
        self.millis / 10
    }

    /// Parse `H:MM:SS` with an optional `.fraction`
    ///
    /// Hours are unbounded; minutes and seconds must be below 60.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTime`] for a wrong number of fields,
    /// non-digit characters or out-of-range minutes and seconds.
    pub fn parse(src: &str) -> Result<Self, CoreError> {
        let trimmed = src.trim();
        let mut fields = trimmed.split(':');
        let (Some(hours), Some(minutes), Some(rest), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid_time(src, "expected H:MM:SS.cc"));
        };

        let (seconds, fraction) = rest.split_once('.').unwrap_or((rest, ""));

        let hours = digits(hours).ok_or_else(|| invalid_time(src, "invalid hours"))?;
        let minutes = digits(minutes).ok_or_else(|| invalid_time(src, "invalid minutes"))?;
        let seconds = digits(seconds).ok_or_else(|| invalid_time(src, "invalid seconds"))?;

        if minutes >= 60 {
            return Err(invalid_time(src, "minutes must be < 60"));
        }
        if seconds >= 60 {
            return Err(invalid_time(src, "seconds must be < 60"));
        }

        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_time(src, "invalid fraction"));
        }
        let mut millis_part = 0;
        let mut scale = 100;
        for b in fraction.bytes().take(3) {
            millis_part += u32::from(b - b'0') * scale;
            scale /= 10;
        }

        hours
            .checked_mul(3_600_000)
            .and_then(|h| h.checked_add(minutes * 60_000 + seconds * 1000 + millis_part))
            .map(Self::from_millis)
            .ok_or_else(|| invalid_time(src, "out of range"))
    }
}

/// ASCII digits only, no sign
fn digits(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let centis = self.as_centis();
        let hours = centis / 360_000;
        let minutes = (centis / 6_000) % 60;
        let seconds = (centis / 100) % 60;
        let cs = centis % 100;
        write!(f, "{hours}:{minutes:02}:{seconds:02}.{cs:02}")
    }
}

impl FromStr for Timestamp {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ass_times() {
        assert_eq!(Timestamp::parse("0:00:00.00").unwrap().as_millis(), 0);
        assert_eq!(Timestamp::parse("0:00:01.00").unwrap().as_millis(), 1000);
        assert_eq!(Timestamp::parse("0:01:00.00").unwrap().as_millis(), 60_000);
        assert_eq!(Timestamp::parse("1:00:00.00").unwrap().as_millis(), 3_600_000);
        assert_eq!(Timestamp::parse("0:01:30.50").unwrap().as_millis(), 90_500);
    }

    #[test]
    fn fraction_is_decimal() {
        let half = Timestamp::from_millis(500);
        assert_eq!(Timestamp::parse("0:00:00.5").unwrap(), half);
        assert_eq!(Timestamp::parse("0:00:00.50").unwrap(), half);
        assert_eq!(Timestamp::parse("0:00:00.500").unwrap(), half);
        assert_eq!(Timestamp::parse("0:00:00.123456").unwrap().as_millis(), 123);
        assert_eq!(Timestamp::parse("0:00:07").unwrap().as_millis(), 7000);
    }

    #[test]
    fn parse_ass_times_invalid() {
        assert!(Timestamp::parse("invalid").is_err());
        assert!(Timestamp::parse("0:00").is_err());
        assert!(Timestamp::parse("0:00:00:00").is_err());
        assert!(Timestamp::parse("0:60:00.00").is_err());
        assert!(Timestamp::parse("0:00:60.00").is_err());
        assert!(Timestamp::parse("0:00:0x.00").is_err());
        assert!(Timestamp::parse("0:00:00.1a").is_err());
        assert!(Timestamp::parse("-1:00:00.00").is_err());
    }

    #[test]
    fn format_ass_times() {
        assert_eq!(Timestamp::ZERO.to_string(), "0:00:00.00");
        assert_eq!(Timestamp::from_millis(1000).to_string(), "0:00:01.00");
        assert_eq!(Timestamp::from_millis(90_500).to_string(), "0:01:30.50");
        assert_eq!(Timestamp::from_millis(36_000_000).to_string(), "10:00:00.00");
    }

    #[test]
    fn sub_centisecond_precision_truncates() {
        assert_eq!(Timestamp::from_millis(1_239).to_string(), "0:00:01.23");
    }

    #[test]
    fn two_digit_text_round_trips() {
        for text in ["0:00:05.17", "1:23:45.67", "0:59:59.99"] {
            assert_eq!(Timestamp::parse(text).unwrap().to_string(), text);
        }
    }
}

//! Section identification for ASS scripts

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Section a body line belongs to
///
/// # Examples
///
/// ```rust
/// use ass_script::parser::ast::SectionType;
///
/// assert_eq!(SectionType::from_title("v4+ styles"), Some(SectionType::Styles));
/// assert_eq!(SectionType::from_title("Fonts"), None);
/// assert_eq!(SectionType::Events.header(), "[Events]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SectionType {
    /// `[Script Info]`
    ScriptInfo,
    /// `[V4+ Styles]`, also accepted as `[V4 Styles]`
    Styles,
    /// `[Events]`
    Events,
}

impl SectionType {
    /// Match a bracketed title, ignoring ASCII case and outer whitespace
    #[must_use]
    pub fn from_title(title: &str) -> Option<Self> {
        let title = title.trim();
        if title.eq_ignore_ascii_case("Script Info") {
            Some(Self::ScriptInfo)
        } else if title.eq_ignore_ascii_case("V4+ Styles") || title.eq_ignore_ascii_case("V4 Styles")
        {
            Some(Self::Styles)
        } else if title.eq_ignore_ascii_case("Events") {
            Some(Self::Events)
        } else {
            None
        }
    }

    /// Canonical title without brackets
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ScriptInfo => "Script Info",
            Self::Styles => "V4+ Styles",
            Self::Events => "Events",
        }
    }

    /// Header line as written to output
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::ScriptInfo => "[Script Info]",
            Self::Styles => "[V4+ Styles]",
            Self::Events => "[Events]",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Title of a section header line, if `line` is one
///
/// A header is a line whose left-trimmed form starts with `[`. The title
/// runs to the first `]`, or to the end of the line when it is missing.
#[must_use]
pub fn header_title(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix('[')?;
    Some(rest.split_once(']').map_or(rest.trim_end(), |(title, _)| title))
}

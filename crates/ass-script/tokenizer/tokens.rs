//! Token types for event text tokenization
//!
//! Tokens borrow from the text being tokenized. A [`TextToken::Literal`] is
//! still in its escaped form; a [`TextToken::Group`] is the content between
//! `{` and `}` without the braces.

use core::fmt;

/// One piece of an event text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextToken<'a> {
    /// Text outside braces, not yet unescaped
    Literal(&'a str),
    /// Content of a `{...}` override group
    Group(&'a str),
}

impl fmt::Display for TextToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.write_str(s),
            Self::Group(s) => write!(f, "{{{s}}}"),
        }
    }
}

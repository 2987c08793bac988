//! Escaping of literal event text
//!
//! | text                       | written as |
//! |----------------------------|------------|
//! | line feed                  | `\N`       |
//! | no-break space U+00A0      | `\h`       |
//! | line separator U+2028      | `\n`       |
//! | `\` before `N`, `n`, `h`, `{` | `\{}`   |
//!
//! The last row keeps a literal backslash from being read as the start of
//! an escape: the empty `{}` group splits the two characters apart and is
//! dropped on the way back in. Braces themselves have no escaped form.

/// Soft line break, written `\n`
pub const SOFT_BREAK: char = '\u{2028}';

/// Hard space, written `\h`
pub const HARD_SPACE: char = '\u{00A0}';

/// Convert logical text into its serialized form
///
/// # Example
///
/// ```rust
/// use ass_script::tokenizer::escape;
///
/// assert_eq!(escape("one\ntwo"), "one\\Ntwo");
/// assert_eq!(escape("C:\\Notes"), "C:\\{}Notes");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => out.push_str("\\N"),
            HARD_SPACE => out.push_str("\\h"),
            SOFT_BREAK => out.push_str("\\n"),
            '\\' if matches!(chars.peek(), Some('N' | 'n' | 'h' | '{')) => out.push_str("\\{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Convert serialized text back into logical text
///
/// Exact inverse of [`escape`] for text without braces.
///
/// # Example
///
/// ```rust
/// use ass_script::tokenizer::unescape;
///
/// assert_eq!(unescape("one\\Ntwo"), "one\ntwo");
/// assert_eq!(unescape("C:\\{}Notes"), "C:\\Notes");
/// ```
#[must_use]
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find('\\') {
        out.push_str(&rest[..at]);
        let tail = &rest[at + 1..];
        rest = if let Some(after) = tail.strip_prefix('N') {
            out.push('\n');
            after
        } else if let Some(after) = tail.strip_prefix('n') {
            out.push(SOFT_BREAK);
            after
        } else if let Some(after) = tail.strip_prefix('h') {
            out.push(HARD_SPACE);
            after
        } else if let Some(after) = tail.strip_prefix("{}") {
            out.push('\\');
            after
        } else {
            out.push('\\');
            tail
        };
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_breaks_and_spaces() {
        assert_eq!(escape("a\nb"), "a\\Nb");
        assert_eq!(escape("a\u{a0}b"), "a\\hb");
        assert_eq!(escape("a\u{2028}b"), "a\\nb");
        assert_eq!(escape("plain text, kept"), "plain text, kept");
    }

    #[test]
    fn protects_backslash_before_escape_letters() {
        assert_eq!(escape("\\N"), "\\{}N");
        assert_eq!(escape("\\n"), "\\{}n");
        assert_eq!(escape("\\h"), "\\{}h");
        assert_eq!(escape("\\x"), "\\x");
        assert_eq!(escape("end\\"), "end\\");
    }

    #[test]
    fn backslash_before_line_feed() {
        assert_eq!(escape("\\\n"), "\\\\N");
        assert_eq!(unescape("\\\\N"), "\\\n");
    }

    #[test]
    fn unescape_inverts() {
        for text in ["a\nb", "\\N", "x\\\\N", "\u{a0}\u{2028}", "tail\\", "\\\\"] {
            assert_eq!(unescape(&escape(text)), text, "{text:?}");
        }
    }

    #[test]
    fn unknown_escapes_pass_through() {
        assert_eq!(unescape("\\q"), "\\q");
        assert_eq!(unescape("\\"), "\\");
    }
}

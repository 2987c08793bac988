//! Brace-aware tokenizer for event text
//!
//! Splits a `Text` field into literal runs and `{...}` override groups. A
//! group ends at the first `}` after its `{`, so an inner `{` is plain group
//! content. A `{` with no closing brace is literal text. Empty literal runs
//! are not produced.
//!
//! # Example
//!
//! ```rust
//! use ass_script::tokenizer::{TextToken, TextTokenizer};
//!
//! let tokens: Vec<_> = TextTokenizer::new("{\\an8}Hello{\\i1}!").collect();
//! assert_eq!(
//!     tokens,
//!     [
//!         TextToken::Group("\\an8"),
//!         TextToken::Literal("Hello"),
//!         TextToken::Group("\\i1"),
//!         TextToken::Literal("!"),
//!     ]
//! );
//! ```

pub mod escape;
pub mod tokens;

pub use escape::{escape, unescape, HARD_SPACE, SOFT_BREAK};
pub use tokens::TextToken;

/// Iterator over the tokens of one text field
#[derive(Debug, Clone)]
pub struct TextTokenizer<'a> {
    /// Text being tokenized
    source: &'a str,
    /// Byte offset of the next token
    position: usize,
}

impl<'a> TextTokenizer<'a> {
    /// Tokenizer positioned at the start of `source`
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Unconsumed part of the source
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

impl<'a> Iterator for TextTokenizer<'a> {
    type Item = TextToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }

        if let Some(open) = rest.find('{') {
            if let Some(close) = rest[open + 1..].find('}') {
                if open > 0 {
                    self.position += open;
                    return Some(TextToken::Literal(&rest[..open]));
                }
                let content = &rest[1..=close];
                self.position += close + 2;
                return Some(TextToken::Group(content));
            }
        }

        self.position = self.source.len();
        Some(TextToken::Literal(rest))
    }
}

/// Collect all tokens of `source`
#[must_use]
pub fn tokenize(source: &str) -> Vec<TextToken<'_>> {
    TextTokenizer::new(source).collect()
}

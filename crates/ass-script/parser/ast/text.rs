//! Event text with decoded override codes
//!
//! An [`OverrideText`] is the `Text` column of an event split into literal
//! runs, typed [`Directive`]s and brace comments. Literal runs are stored
//! unescaped; serialization escapes them again and wraps consecutive
//! directives in a single `{...}` block.
//!
//! # Example
//!
//! ```rust
//! use ass_script::parser::ast::{OverrideText, TextElement};
//!
//! let text = OverrideText::parse("{\\an8\\fs30}Hello, world!")?;
//! assert_eq!(text.elements().len(), 3);
//! assert_eq!(text.plain_text(), "Hello, world!");
//! assert_eq!(text.dump(), "{\\an8\\fs30}Hello, world!");
//! # Ok::<(), ass_script::utils::CoreError>(())
//! ```

use crate::plugin::{Directive, TagRegistry};
use crate::tokenizer::{escape, unescape, TextToken, TextTokenizer};
use crate::utils::CoreError;
use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One element of an event text
///
/// Braces have no escaped form. A literal holding `{` or `}`, or a comment
/// holding `}` or `\`, serializes as written and may read back as
/// different elements once a group follows it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TextElement {
    /// Displayed text, unescaped
    Literal(String),
    /// Override tag
    Directive(Directive),
    /// Text inside braces before the first backslash
    Comment(String),
}

/// Ordered sequence of text elements
///
/// Adjacent literal runs are always merged and empty runs dropped, so two
/// texts that serialize identically compare equal.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OverrideText {
    /// Normalized elements
    elements: Vec<TextElement>,
}

impl OverrideText {
    /// Empty text
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Build from elements, normalizing literal runs
    ///
    /// Elements are taken as given; see [`TextElement`] for the characters
    /// that do not survive a dump and re-parse.
    #[must_use]
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = TextElement>,
    {
        let mut text = Self::new();
        for element in elements {
            text.push(element);
        }
        text
    }

    /// Parse with the standard tag registry
    ///
    /// # Errors
    ///
    /// Returns the first failure among the override codes: an unknown code,
    /// a missing required parameter or an undecodable argument.
    pub fn parse(source: &str) -> Result<Self, CoreError> {
        Self::parse_with(source, TagRegistry::standard())
    }

    /// Parse resolving override codes through `registry`
    ///
    /// # Errors
    ///
    /// Same as [`OverrideText::parse`].
    pub fn parse_with(source: &str, registry: &TagRegistry) -> Result<Self, CoreError> {
        let mut text = Self::new();
        for token in TextTokenizer::new(source) {
            match token {
                TextToken::Literal(raw) => text.push_literal(&unescape(raw)),
                TextToken::Group(content) => {
                    let mut codes = content.split('\\');
                    if let Some(comment) = codes.next().filter(|c| !c.is_empty()) {
                        text.push(TextElement::Comment(comment.to_string()));
                    }
                    for code in codes.filter(|c| !c.is_empty()) {
                        text.push(TextElement::Directive(registry.resolve(code)?));
                    }
                }
            }
        }
        Ok(text)
    }

    /// Append an element, merging it into a preceding literal run
    pub fn push(&mut self, element: TextElement) {
        match element {
            TextElement::Literal(run) => self.push_literal(&run),
            other => self.elements.push(other),
        }
    }

    /// Append displayed text
    pub fn push_literal(&mut self, run: &str) {
        if run.is_empty() {
            return;
        }
        if let Some(TextElement::Literal(last)) = self.elements.last_mut() {
            last.push_str(run);
        } else {
            self.elements.push(TextElement::Literal(run.to_string()));
        }
    }

    /// Elements in order
    #[must_use]
    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }

    /// Whether there are no elements at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Directives in order of appearance
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.elements.iter().filter_map(|element| match element {
            TextElement::Directive(d) => Some(d),
            _ => None,
        })
    }

    /// Displayed text with every directive and comment removed
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|element| match element {
                TextElement::Literal(run) => Some(run.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Serialize to the escaped, brace-grouped field form
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut in_group = false;
        for element in &self.elements {
            match element {
                TextElement::Literal(run) => {
                    if in_group {
                        out.push('}');
                        in_group = false;
                    }
                    out.push_str(&escape(run));
                }
                TextElement::Directive(directive) => {
                    if !in_group {
                        out.push('{');
                        in_group = true;
                    }
                    out.push('\\');
                    out.push_str(&directive.encode());
                }
                TextElement::Comment(comment) => {
                    if in_group {
                        out.push('}');
                    }
                    out.push('{');
                    out.push_str(comment);
                    in_group = true;
                }
            }
        }
        if in_group {
            out.push('}');
        }
        out
    }
}

impl fmt::Display for OverrideText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

impl From<&str> for OverrideText {
    /// Plain text with no override codes
    fn from(run: &str) -> Self {
        let mut text = Self::new();
        text.push_literal(run);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::tags::{
        alignment::ALIGN, font::FONT_SIZE, formatting::BOLD, formatting::ITALIC,
    };
    use crate::plugin::Value;
    use pretty_assertions::assert_eq;

    fn directive(schema: &'static crate::plugin::TagSchema, value: Value) -> TextElement {
        TextElement::Directive(Directive::with_values(schema, [value]).unwrap())
    }

    #[test]
    fn consecutive_directives_share_one_group() {
        let text = OverrideText::from_elements([
            directive(&BOLD, Value::Int(1)),
            directive(&ITALIC, Value::Int(1)),
            TextElement::Literal("hello".into()),
        ]);
        assert_eq!(text.dump(), "{\\b1\\i1}hello");
    }

    #[test]
    fn decodes_alignment_and_size() {
        let text = OverrideText::parse("{\\an8\\fs30}Hello, world!").unwrap();
        assert_eq!(
            text.elements(),
            &[
                directive(&ALIGN, Value::Int(8)),
                directive(&FONT_SIZE, Value::Real(30.0)),
                TextElement::Literal("Hello, world!".into()),
            ]
        );
    }

    #[test]
    fn groups_reopen_after_literals() {
        let source = "{\\b1}bold{\\b0} plain {\\i1}";
        let text = OverrideText::parse(source).unwrap();
        assert_eq!(text.dump(), source);
    }

    #[test]
    fn separate_groups_are_joined() {
        let text = OverrideText::parse("{\\b1}{\\i1}x").unwrap();
        assert_eq!(text.dump(), "{\\b1\\i1}x");
    }

    #[test]
    fn comments_are_kept() {
        let text = OverrideText::parse("{note}a{\\b1}{second\\i1}b").unwrap();
        assert_eq!(
            text.elements()[0],
            TextElement::Comment("note".into())
        );
        assert_eq!(text.dump(), "{note}a{\\b1}{second\\i1}b");
    }

    #[test]
    fn empty_codes_are_skipped() {
        let text = OverrideText::parse("{\\\\b1\\}x").unwrap();
        assert_eq!(text.directives().count(), 1);
        assert_eq!(text.dump(), "{\\b1}x");
    }

    #[test]
    fn escapes_round_trip() {
        let source = "line one\\Nline\\htwo\\nsoft C:\\{}Notes";
        let text = OverrideText::parse(source).unwrap();
        assert_eq!(text.plain_text(), "line one\nline\u{a0}two\u{2028}soft C:\\Notes");
        assert_eq!(text.dump(), source);
    }

    #[test]
    fn empty_group_merges_literals() {
        let text = OverrideText::parse("a{}b").unwrap();
        assert_eq!(text.elements(), &[TextElement::Literal("ab".into())]);
    }

    #[test]
    fn unknown_code_fails_whole_text() {
        let err = OverrideText::parse("{\\zz9}x").unwrap_err();
        assert_eq!(err, CoreError::UnknownCode("zz9".into()));
    }

    #[test]
    fn transform_is_not_decoded() {
        assert!(OverrideText::parse("{\\t(0,500,\\fs40)}x").is_err());
    }

    #[test]
    fn braces_in_literals_only_survive_without_a_following_group() {
        let stray = OverrideText::parse("a}b{c").unwrap();
        assert_eq!(stray.plain_text(), "a}b{c");
        assert_eq!(OverrideText::parse(&stray.dump()).unwrap(), stray);

        let opened = OverrideText::from_elements([
            TextElement::Literal("a{".into()),
            directive(&BOLD, Value::Int(1)),
        ]);
        assert_eq!(opened.dump(), "a{{\\b1}");
        assert_eq!(
            OverrideText::parse(&opened.dump()).unwrap().elements(),
            &[
                TextElement::Literal("a".into()),
                TextElement::Comment("{".into()),
                directive(&BOLD, Value::Int(1)),
            ]
        );
    }

    #[test]
    fn empty_text() {
        let text = OverrideText::parse("").unwrap();
        assert!(text.is_empty());
        assert_eq!(text.dump(), "");
    }
}

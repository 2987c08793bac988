//! ASS script parser module
//!
//! Classifies each input line as a section header, a blank line or a body
//! line and forwards body lines to the table of the active section. Parsing
//! never fails: every problem becomes a [`ParseIssue`] stamped with its
//! 1-based source line, and the offending unit is skipped.
//!
//! # Example
//!
//! ```rust
//! use ass_script::parser::Document;
//!
//! let script_text = "\
//! [Script Info]
//! Title: Example
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello World!
//! ";
//!
//! let (document, issues) = Document::parse(script_text);
//! assert!(issues.is_empty());
//! assert_eq!(document.script_info.title.as_deref(), Some("Example"));
//! assert_eq!(document.events.len(), 1);
//! ```

pub mod ast;
pub mod errors;
pub mod options;
pub mod table;

pub use ast::{EventItem, OverrideText, ScriptInfo, SectionType, StyleItem};
pub use errors::{IssueCategory, IssueSeverity, ParseIssue};
pub use options::DumpFlags;
pub use table::{Decoded, FormatDeclaration, RecordTable};

use crate::plugin::TagRegistry;
use ast::header_title;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Parsed script: one metadata record and the two record tables
///
/// Sections are always written in the order metadata, styles, events,
/// whatever their order in the source.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Document {
    /// `[Script Info]` key/value pairs
    pub script_info: ScriptInfo,
    /// `[V4+ Styles]` table
    pub styles: RecordTable<StyleItem>,
    /// `[Events]` table
    pub events: RecordTable<EventItem>,
}

impl Document {
    /// Empty document with default metadata
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole script with the standard tag registry
    ///
    /// Returns the document together with every diagnostic raised.
    #[must_use]
    pub fn parse(text: &str) -> (Self, Vec<ParseIssue>) {
        Parser::new().parse(text)
    }

    /// Serialize with the canonical layout
    #[must_use]
    pub fn dump(&self) -> (Vec<String>, Vec<ParseIssue>) {
        self.dump_with(DumpFlags::default())
    }

    /// Serialize with the given layout
    ///
    /// Unset record attributes are written as empty columns and reported
    /// as [`IssueCategory::Missing`] errors.
    #[tracing::instrument(skip_all, fields(flags = flags.bits()))]
    #[must_use]
    pub fn dump_with(&self, flags: DumpFlags) -> (Vec<String>, Vec<ParseIssue>) {
        let sections = [
            self.script_info
                .dump(SectionType::ScriptInfo.header(), flags),
            self.styles.dump(SectionType::Styles.header(), flags),
            self.events.dump(SectionType::Events.header(), flags),
        ];

        let mut lines = Vec::new();
        let mut issues = Vec::new();
        for (index, (section_lines, section_issues)) in sections.into_iter().enumerate() {
            if index > 0 && flags.contains(DumpFlags::SECTION_SEPARATOR) {
                lines.push(String::new());
            }
            lines.extend(section_lines);
            issues.extend(section_issues);
        }
        tracing::debug!(lines = lines.len(), issues = issues.len(), "dumped document");
        (lines, issues)
    }

    /// Serialize to a single string, one `\n`-terminated line per entry
    #[must_use]
    pub fn dump_string(&self) -> (String, Vec<ParseIssue>) {
        let (lines, issues) = self.dump();
        let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        (out, issues)
    }
}

/// Line-at-a-time script parser
///
/// Holds the document being built, the active section and the diagnostics
/// raised so far. Use [`Parser::with_registry`] to decode event text with a
/// registry that carries extra tags.
///
/// # Example
///
/// ```rust
/// use ass_script::parser::Parser;
///
/// let mut parser = Parser::new();
/// parser.parse_line("[V4+ Styles]");
/// parser.parse_line("Format: Name, Fontname");
/// parser.parse_line("Style: Default,Arial");
/// let (document, issues) = parser.finish();
/// assert!(issues.is_empty());
/// assert_eq!(document.styles.items()[0].fontname.as_deref(), Some("Arial"));
/// ```
#[derive(Debug)]
pub struct Parser<'r> {
    /// Tags event text is resolved against
    registry: &'r TagRegistry,
    /// Document built so far
    document: Document,
    /// Section the next body line belongs to
    section: SectionType,
    /// 1-based number of the last line fed
    line: usize,
    /// Diagnostics collected so far
    issues: Vec<ParseIssue>,
}

impl Parser<'static> {
    /// Parser using the standard tag registry
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(TagRegistry::standard())
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Parser<'r> {
    /// Parser decoding event text against `registry`
    #[must_use]
    pub fn with_registry(registry: &'r TagRegistry) -> Self {
        Self {
            registry,
            document: Document::default(),
            section: SectionType::ScriptInfo,
            line: 0,
            issues: Vec::new(),
        }
    }

    /// Parse a whole script and finish
    #[tracing::instrument(skip_all, fields(bytes = text.len()))]
    #[must_use]
    pub fn parse(mut self, text: &str) -> (Document, Vec<ParseIssue>) {
        self.feed(text);
        let (document, issues) = self.finish();
        tracing::debug!(
            styles = document.styles.len(),
            events = document.events.len(),
            issues = issues.len(),
            "parsed document"
        );
        (document, issues)
    }

    /// Consume a chunk of complete lines
    ///
    /// `\r\n` endings are accepted, and a UTF-8 byte order mark is dropped
    /// from the very first line.
    pub fn feed(&mut self, text: &str) {
        let text = if self.line == 0 {
            text.strip_prefix('\u{feff}').unwrap_or(text)
        } else {
            text
        };
        for line in text.lines() {
            self.parse_line(line);
        }
    }

    /// Consume one line without its terminator
    pub fn parse_line(&mut self, text: &str) {
        self.line += 1;
        let text = text.strip_suffix('\r').unwrap_or(text);
        if text.trim().is_empty() {
            return;
        }

        if let Some(title) = header_title(text) {
            match SectionType::from_title(title) {
                Some(section) => {
                    tracing::debug!(line = self.line, %section, "entering section");
                    self.section = section;
                }
                None => {
                    tracing::debug!(line = self.line, title, "ignoring unknown section");
                }
            }
            return;
        }

        let issues = match self.section {
            SectionType::ScriptInfo => self.document.script_info.parse_line(text),
            SectionType::Styles => self.document.styles.parse_line(text, self.registry),
            SectionType::Events => self.document.events.parse_line(text, self.registry),
        };
        let line = self.line;
        self.issues
            .extend(issues.into_iter().map(|issue| issue.with_line(line)));
    }

    /// Section body lines are currently routed to
    #[must_use]
    pub const fn section(&self) -> SectionType {
        self.section
    }

    /// Diagnostics raised so far
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Document built so far
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Finish parsing, returning the document and all diagnostics
    #[must_use]
    pub fn finish(self) -> (Document, Vec<ParseIssue>) {
        (self.document, self.issues)
    }
}

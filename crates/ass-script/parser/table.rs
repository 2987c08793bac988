//! Declared-format record tables
//!
//! Style and event sections share one layout: a `Format:` line naming the
//! columns, then data lines whose comma-separated values are decoded
//! positionally against it. [`RecordTable`] implements that once, generic
//! over a [`Record`] type that supplies the attribute vocabulary and the
//! per-attribute decoders.
//!
//! The last declared column absorbs any surplus commas, so an event `Text`
//! may contain commas freely.

use crate::parser::{IssueCategory, ParseIssue};
use crate::parser::options::DumpFlags;
use crate::plugin::TagRegistry;
use crate::utils::{create_hash_map, CoreError};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Column name from a table's fixed vocabulary
pub trait Attribute: Copy + Eq + fmt::Debug + 'static {
    /// Every attribute in canonical order
    const ALL: &'static [Self];

    /// Canonical spelling
    fn name(self) -> &'static str;

    /// Look up a name, ignoring ASCII case
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|attr| attr.name().eq_ignore_ascii_case(name))
    }
}

/// Outcome of decoding one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// The raw text was stored as written
    Exact,
    /// The raw text was out of range and the attribute's default was stored
    Substituted,
}

/// Row type of a [`RecordTable`]
pub trait Record: Default + Clone {
    /// Column vocabulary
    type Attr: Attribute;

    /// Noun used in diagnostics, e.g. `style`
    const NOUN: &'static str;

    /// Column order used when a table is dumped without a `Format:` line
    const DEFAULT_FORMAT: &'static [Self::Attr];

    /// Fresh record for a data line title, `None` if the title is not an item
    fn classify(title: &str) -> Option<Self>;

    /// Title to write before this record's values
    fn title(&self) -> &'static str;

    /// Decode one column into the record
    ///
    /// # Errors
    ///
    /// Returns the reason the raw text is not a valid value for `attr`.
    fn decode_field(
        &mut self,
        attr: Self::Attr,
        raw: &str,
        registry: &TagRegistry,
    ) -> Result<Decoded, CoreError>;

    /// Encode one column, `None` when the attribute is unset
    fn encode_field(&self, attr: Self::Attr) -> Option<String>;

    /// Columns whose raw text is passed on without trimming
    fn keeps_whitespace(_attr: Self::Attr) -> bool {
        false
    }
}

/// Ordered, duplicate-free list of columns from a `Format:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDeclaration<A: Attribute> {
    /// Declared columns
    columns: Vec<A>,
}

impl<A: Attribute> FormatDeclaration<A> {
    /// Declaration from columns
    ///
    /// # Errors
    ///
    /// Returns the first attribute that appears twice.
    pub fn new(columns: Vec<A>) -> Result<Self, A> {
        let mut seen = create_hash_map::<&'static str, ()>();
        for attr in &columns {
            if seen.insert(attr.name(), ()).is_some() {
                return Err(*attr);
            }
        }
        Ok(Self { columns })
    }

    /// Parse the body of a `Format:` line
    ///
    /// # Errors
    ///
    /// Returns a schema issue naming the first unknown or repeated attribute.
    pub fn parse(body: &str, noun: &str) -> Result<Self, ParseIssue> {
        let mut columns = Vec::new();
        for token in body.split(',') {
            let token = token.trim();
            let attr = A::from_name(token).ok_or_else(|| {
                ParseIssue::error(
                    IssueCategory::Schema,
                    format!("unknown {noun} attribute `{token}`"),
                )
            })?;
            columns.push(attr);
        }
        Self::new(columns).map_err(|dup| {
            ParseIssue::error(
                IssueCategory::Schema,
                format!("duplicate {noun} attribute `{}`", dup.name()),
            )
        })
    }

    /// Canonical order of the vocabulary
    #[must_use]
    pub fn canonical(columns: &[A]) -> Self {
        Self {
            columns: columns.to_vec(),
        }
    }

    /// Columns in declared order
    #[must_use]
    pub fn columns(&self) -> &[A] {
        &self.columns
    }

    /// Number of columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no column is declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// `Format:` line in canonical spelling
    #[must_use]
    pub fn render(&self, flags: DumpFlags) -> String {
        let names: Vec<&str> = self.columns.iter().map(|attr| attr.name()).collect();
        format!(
            "Format{}{}",
            flags.title_separator(),
            names.join(flags.format_separator())
        )
    }
}

#[cfg(feature = "serde")]
impl<A: Attribute> Serialize for FormatDeclaration<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.columns.iter().map(|attr| attr.name()))
    }
}

/// Section body of declared-format records
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "R: Serialize")))]
pub struct RecordTable<R: Record> {
    /// Latest valid `Format:` line
    format: Option<FormatDeclaration<R::Attr>>,
    /// Records in source order
    items: Vec<R>,
}

impl<R: Record> Default for RecordTable<R> {
    fn default() -> Self {
        Self {
            format: None,
            items: Vec::new(),
        }
    }
}

impl<R: Record> RecordTable<R> {
    /// Empty table with no declaration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current column declaration
    #[must_use]
    pub const fn format(&self) -> Option<&FormatDeclaration<R::Attr>> {
        self.format.as_ref()
    }

    /// Replace the column declaration; existing records are kept
    pub fn set_format(&mut self, format: FormatDeclaration<R::Attr>) {
        self.format = Some(format);
    }

    /// Records in source order
    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Append a record
    pub fn push(&mut self, item: R) {
        self.items.push(item);
    }

    /// Iterate over the records
    pub fn iter(&self) -> core::slice::Iter<'_, R> {
        self.items.iter()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume one body line of the section
    ///
    /// Never fails; every problem is returned as an issue and the line, or
    /// the rest of its record, is skipped.
    pub fn parse_line(&mut self, text: &str, registry: &TagRegistry) -> Vec<ParseIssue> {
        let Some((title, body)) = text.split_once(':') else {
            return vec![ParseIssue::error(
                IssueCategory::Syntax,
                format!("fail to parse `{text}` as {}", R::NOUN),
            )];
        };
        let title = title.trim();

        if title.eq_ignore_ascii_case("Format") {
            return match FormatDeclaration::parse(body, R::NOUN) {
                Ok(format) => {
                    self.format = Some(format);
                    Vec::new()
                }
                Err(issue) => vec![issue],
            };
        }

        let Some(mut record) = R::classify(title) else {
            return vec![ParseIssue::warning(
                IssueCategory::Schema,
                format!("unknown {} line `{title}` skipped", R::NOUN),
            )];
        };

        let Some(format) = &self.format else {
            return vec![ParseIssue::error(
                IssueCategory::Schema,
                format!("Format line is missing before {} `{title}`", R::NOUN),
            )];
        };

        let body = body.trim_start();
        let count = format.len();
        let values: Vec<&str> = body.splitn(count, ',').collect();
        if values.len() < count {
            return vec![ParseIssue::error(
                IssueCategory::Shape,
                format!(
                    "{} line has {} columns but Format declares {count}",
                    R::NOUN,
                    values.len()
                ),
            )];
        }

        let mut issues = Vec::new();
        for (&attr, raw) in format.columns().iter().zip(values) {
            let raw = if R::keeps_whitespace(attr) {
                raw
            } else {
                raw.trim()
            };
            match record.decode_field(attr, raw, registry) {
                Ok(Decoded::Exact) => {}
                Ok(Decoded::Substituted) => issues.push(ParseIssue::warning(
                    IssueCategory::Value,
                    format!(
                        "`{raw}` is out of range for {} attribute `{}`, using `{}`",
                        R::NOUN,
                        attr.name(),
                        record.encode_field(attr).unwrap_or_default()
                    ),
                )),
                Err(err) => {
                    issues.push(ParseIssue::error(
                        err.category(),
                        format!(
                            "could not parse `{raw}` as {} attribute `{}`: {err}",
                            R::NOUN,
                            attr.name()
                        ),
                    ));
                    break;
                }
            }
        }
        self.items.push(record);
        issues
    }

    /// Serialize as header, `Format:` line and one line per record
    ///
    /// Unset attributes are reported and written as empty columns.
    #[must_use]
    pub fn dump(&self, header: &str, flags: DumpFlags) -> (Vec<String>, Vec<ParseIssue>) {
        let mut lines = vec![header.to_string()];
        let mut issues = Vec::new();

        let fallback;
        let format = match &self.format {
            Some(format) => format,
            None if self.items.is_empty() => return (lines, issues),
            None => {
                fallback = FormatDeclaration::canonical(R::DEFAULT_FORMAT);
                &fallback
            }
        };

        lines.push(format.render(flags));
        for item in &self.items {
            let values: Vec<String> = format
                .columns()
                .iter()
                .map(|&attr| {
                    item.encode_field(attr).unwrap_or_else(|| {
                        issues.push(ParseIssue::error(
                            IssueCategory::Missing,
                            format!("{} attribute `{}` not specified", R::NOUN, attr.name()),
                        ));
                        String::new()
                    })
                })
                .collect();
            lines.push(format!(
                "{}{}{}",
                item.title(),
                flags.title_separator(),
                values.join(",")
            ));
        }
        (lines, issues)
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordTable<R> {
    type Item = &'a R;
    type IntoIter = core::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

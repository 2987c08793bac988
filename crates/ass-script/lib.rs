//! # ass-script
//!
//! Parser and serializer for Advanced `SubStation` Alpha (ASS) subtitle
//! scripts. A script is read into a [`Document`] holding the metadata
//! section, the style table and the event table; event text is decoded
//! further into typed override tags. Writing the document back produces the
//! same line sequence for well-formed input.
//!
//! ## Features
//!
//! - **Recovering parser**: malformed lines become [`ParseIssue`]s, never errors
//! - **Declared formats**: style and event columns follow each table's `Format:` line
//! - **Typed override tags**: `{\an8\fs30}` decodes into directives with typed arguments
//! - **Extensible registry**: extra tags can be registered (`plugins` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_script::Document;
//!
//! let script_text = "\
//! [Script Info]
//! Title: Example
//!
//! [V4+ Styles]
//! Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
//! Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,{\\an8}Hello World!
//! ";
//!
//! let (document, issues) = Document::parse(script_text);
//! assert!(issues.is_empty());
//!
//! let text = document.events.items()[0].text.as_ref().unwrap();
//! assert_eq!(text.plain_text(), "Hello World!");
//!
//! let (lines, issues) = document.dump();
//! assert!(issues.is_empty());
//! assert_eq!(lines[0], "[Script Info]");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod parser;
pub mod plugin;
pub mod tokenizer;
pub mod utils;

pub use parser::{Document, DumpFlags, IssueCategory, IssueSeverity, ParseIssue, Parser};
pub use parser::ast::{EventItem, OverrideText, ScriptInfo, StyleItem, TextElement};
pub use plugin::{Directive, TagRegistry, TagSchema, Value};
pub use utils::{Color, CoreError, PluginError, Timestamp};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for value-level operations, using the crate's `CoreError`
///
/// # Examples
///
/// ```rust
/// use ass_script::{Color, Result};
///
/// fn primary(src: &str) -> Result<Color> {
///     Color::parse(src)
/// }
///
/// assert_eq!(primary("&HFF0000&")?.blue(), 0xFF);
/// # Ok::<(), ass_script::CoreError>(())
/// ```
pub type Result<T> = core::result::Result<T, CoreError>;

//! Parse issue types for recoverable problems
//!
//! Parsing and dumping never fail as a whole. Every problem is recorded as a
//! [`ParseIssue`] and the offending unit (a line, a record field, a column on
//! output) is skipped or left empty.

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Issue severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum IssueSeverity {
    /// Input was unusual but nothing was lost
    Warning,

    /// Some input was dropped or some output left empty
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// What kind of problem an issue describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum IssueCategory {
    /// Line has no recognizable `Title: body` structure
    Syntax,

    /// Name outside a fixed vocabulary, or a required declaration is absent
    Schema,

    /// Field text could not be decoded as its declared type
    Value,

    /// Data line has fewer columns than the declaration
    Shape,

    /// Value needed for output or a required parameter is unset
    Missing,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::Schema => write!(f, "schema"),
            Self::Value => write!(f, "value"),
            Self::Shape => write!(f, "shape"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// Recoverable problem found while parsing or dumping
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ParseIssue {
    /// Issue severity level
    pub severity: IssueSeverity,

    /// Issue category for filtering
    pub category: IssueCategory,

    /// Human-readable message
    pub message: String,

    /// Source line (1-based) for parse issues; `None` for dump issues
    pub line: Option<usize>,
}

impl ParseIssue {
    /// Create new parse issue without location
    #[must_use]
    pub const fn new(severity: IssueSeverity, category: IssueCategory, message: String) -> Self {
        Self {
            severity,
            category,
            message,
            line: None,
        }
    }

    /// Create warning-level issue
    #[must_use]
    pub const fn warning(category: IssueCategory, message: String) -> Self {
        Self::new(IssueSeverity::Warning, category, message)
    }

    /// Create error-level issue
    #[must_use]
    pub const fn error(category: IssueCategory, message: String) -> Self {
        Self::new(IssueSeverity::Error, category, message)
    }

    /// Attach the source line the issue was found on
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Whether some input or output was lost
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }

    /// Format issue for display to users
    #[must_use]
    pub fn format_for_display(&self) -> String {
        match self.line {
            Some(line) => format!(
                "{}: {} at line {}: {}",
                self.severity, self.category, line, self.message
            ),
            None => format!("{}: {}: {}", self.severity, self.category, self.message),
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_for_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_display_matches_levels() {
        assert_eq!(IssueSeverity::Warning.to_string(), "warn");
        assert_eq!(IssueSeverity::Error.to_string(), "error");
    }

    #[test]
    fn display_with_line() {
        let issue = ParseIssue::error(IssueCategory::Shape, "too few columns".into()).with_line(7);
        assert_eq!(
            issue.format_for_display(),
            "error: shape at line 7: too few columns"
        );
        assert!(issue.is_error());
    }

    #[test]
    fn display_without_line() {
        let issue = ParseIssue::warning(IssueCategory::Schema, "unknown key".into());
        assert_eq!(issue.to_string(), "warn: schema: unknown key");
        assert!(!issue.is_error());
    }
}

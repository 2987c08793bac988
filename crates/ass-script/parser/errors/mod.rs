//! Diagnostics collected while parsing and dumping scripts

mod parse_issue;

pub use parse_issue::{IssueCategory, IssueSeverity, ParseIssue};

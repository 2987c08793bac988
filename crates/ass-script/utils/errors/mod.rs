//! Error types shared by the scalar decoders and the tag registry
//!
//! # Examples
//!
//! ```rust
//! use ass_script::utils::errors::{CoreError, PluginError};
//! use ass_script::parser::IssueCategory;
//!
//! let err = CoreError::invalid_color("nothex");
//! assert_eq!(err.category(), IssueCategory::Value);
//!
//! let dup = PluginError::DuplicatePrefix("b".into());
//! assert_eq!(dup.to_string(), "override tag prefix `\\b` is already registered");
//! ```

mod core;
mod format;

pub use self::core::{CoreError, Result};
pub use format::{invalid_color, invalid_numeric, invalid_time};

use thiserror::Error;

/// Failure to extend a tag registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    /// Another schema already owns this prefix
    #[error("override tag prefix `\\{0}` is already registered")]
    DuplicatePrefix(String),

    /// Schemas need a non-empty prefix to be resolvable
    #[error("override tag prefix must not be empty")]
    EmptyPrefix,
}

impl CoreError {
    /// Create color error from invalid format
    pub fn invalid_color<T: ::core::fmt::Display>(format: T) -> Self {
        format::invalid_color(format)
    }
}

//! Core value-level error type
//!
//! `CoreError` describes why a single scalar, enumeration or override code
//! could not be decoded. It never escapes a document parse on its own: the
//! record table and the text engine wrap it into a [`ParseIssue`] whose
//! category is chosen by [`CoreError::category`].
//!
//! [`ParseIssue`]: crate::parser::ParseIssue

use crate::parser::errors::IssueCategory;
use thiserror::Error;

/// Failure to decode a single value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Color literal is not `&H` followed by hex digits
    #[error("invalid color `{0}`")]
    InvalidColor(String),

    /// Numeric field could not be parsed
    #[error("invalid numeric value: {0}")]
    InvalidNumeric(String),

    /// Timestamp is not `H:MM:SS.cc`
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Value outside a closed enumeration
    #[error("`{value}` is not a valid {kind}")]
    InvalidEnumValue {
        /// Enumeration name, e.g. `Alignment`
        kind: &'static str,
        /// Offending raw value
        value: String,
    },

    /// Override sub-code matches no registered tag prefix
    #[error("unknown override code `\\{0}`")]
    UnknownCode(String),

    /// Required override parameter was absent
    #[error("parameter `{param}` of `\\{tag}` must be specified")]
    MissingParameter {
        /// Tag prefix
        tag: &'static str,
        /// Parameter name from the schema
        param: &'static str,
    },

    /// Override parameter present but not decodable as its declared kind
    #[error("parameter `{param}` of `\\{tag}` has invalid value `{value}`: {reason}")]
    InvalidArgument {
        /// Tag prefix
        tag: &'static str,
        /// Parameter name from the schema
        param: &'static str,
        /// Raw token
        value: String,
        /// Underlying decode failure
        reason: String,
    },
}

impl CoreError {
    /// Diagnostic category a failure of this kind is reported under
    ///
    /// Unknown codes are schema problems and absent required parameters are
    /// missing-data problems; everything else is a value problem.
    #[must_use]
    pub const fn category(&self) -> IssueCategory {
        match self {
            Self::UnknownCode(_) => IssueCategory::Schema,
            Self::MissingParameter { .. } => IssueCategory::Missing,
            Self::InvalidColor(_)
            | Self::InvalidNumeric(_)
            | Self::InvalidTime(_)
            | Self::InvalidEnumValue { .. }
            | Self::InvalidArgument { .. } => IssueCategory::Value,
        }
    }

    /// Shorthand for an [`InvalidEnumValue`](Self::InvalidEnumValue) error
    pub fn invalid_enum<T: core::fmt::Display>(kind: &'static str, value: T) -> Self {
        Self::InvalidEnumValue {
            kind,
            value: value.to_string(),
        }
    }
}

/// Result alias for value-level decoding
pub type Result<T> = core::result::Result<T, CoreError>;

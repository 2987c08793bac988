//! Override tag schemas and the prefix registry that resolves them
//!
//! Every override code (`\b1`, `\pos(10,20)`, `\1c&HFF&`) is described by a
//! static [`TagSchema`]: its prefix, whether arguments are parenthesized and
//! a typed parameter list. A [`TagRegistry`] holds schemas ordered by
//! descending prefix length so that `\fscx120` resolves to `fscx` rather
//! than `fs`, and `\xbord3` to `xbord` rather than a shorter tag.
//!
//! ## Example
//!
//! ```rust
//! use ass_script::plugin::{TagRegistry, Value};
//!
//! let registry = TagRegistry::standard();
//! let directive = registry.resolve("xbord3.5")?;
//! assert_eq!(directive.prefix(), "xbord");
//! assert_eq!(directive.get("size"), Some(&Value::Real(3.5)));
//! # Ok::<(), ass_script::utils::CoreError>(())
//! ```
//!
//! Vendor tags can be added on top of the standard set with the `plugins`
//! feature:
//!
//! ```rust
//! # #[cfg(feature = "plugins")]
//! # {
//! use ass_script::plugin::{ParamSpec, TagRegistry, TagSchema, ValueKind};
//!
//! static WOBBLE: TagSchema =
//!     TagSchema::bare("Wobble", "wobble", &[ParamSpec::required("amount", ValueKind::Real)]);
//!
//! let mut registry = TagRegistry::standard().clone();
//! registry.register(&WOBBLE).unwrap();
//! assert_eq!(registry.resolve("wobble2").unwrap().name(), "Wobble");
//! # }
//! ```

use crate::utils::{create_hash_map_with_capacity, CoreError, PluginError};
use ahash::RandomState;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod directive;
pub mod tags;

pub use directive::{Directive, Value};

/// How a tag's arguments are written after its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketStyle {
    /// Single argument directly after the prefix, e.g. `\fs20`
    Bare,
    /// Comma-separated arguments in parentheses, e.g. `\pos(10,20)`
    Parenthesized,
}

/// Type of a single tag parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Signed integer
    Int,
    /// Real number
    Real,
    /// Raw text, kept verbatim
    Text,
    /// `&H...&` color literal
    Color,
}

/// One declared parameter of a tag schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamSpec {
    /// Parameter name, used by [`Directive::get`]
    pub name: &'static str,
    /// Decoded type
    pub kind: ValueKind,
    /// Whether the parameter must be present
    pub required: bool,
}

impl ParamSpec {
    /// Parameter that must be present
    #[must_use]
    pub const fn required(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// Parameter that may be omitted
    #[must_use]
    pub const fn optional(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Static description of one override tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSchema {
    /// Human-readable tag name
    pub name: &'static str,
    /// Literal prefix following the backslash
    pub prefix: &'static str,
    /// Argument syntax
    pub bracket: BracketStyle,
    /// Ordered parameter list
    pub params: &'static [ParamSpec],
}

impl TagSchema {
    /// Schema whose single argument follows the prefix directly
    #[must_use]
    pub const fn bare(name: &'static str, prefix: &'static str, params: &'static [ParamSpec]) -> Self {
        Self {
            name,
            prefix,
            bracket: BracketStyle::Bare,
            params,
        }
    }

    /// Schema whose arguments are written in parentheses
    #[must_use]
    pub const fn parenthesized(
        name: &'static str,
        prefix: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            prefix,
            bracket: BracketStyle::Parenthesized,
            params,
        }
    }

    /// Position of a parameter by name
    #[must_use]
    pub fn param_index(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }
}

/// Registry of the built-in tags, built on first use
static STANDARD: Lazy<TagRegistry> = Lazy::new(|| {
    let mut registry = TagRegistry::empty();
    for schema in tags::standard_schemas() {
        // Standard prefixes are unique; a clash here would be a table bug
        if let Err(err) = registry.insert(schema) {
            tracing::error!(%err, "standard tag table contains a duplicate prefix");
        }
    }
    registry
});

/// Prefix-ordered collection of tag schemas
///
/// Schemas are kept sorted by descending prefix length; among equal lengths
/// the insertion order is preserved. Resolution walks that order and takes
/// the first prefix that the sub-code starts with.
#[derive(Debug, Clone)]
pub struct TagRegistry {
    /// Schemas, longest prefix first
    schemas: Vec<&'static TagSchema>,
    /// Exact prefix to index into `schemas`
    by_prefix: HashMap<&'static str, usize, RandomState>,
}

impl TagRegistry {
    /// Registry with no tags at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            schemas: Vec::new(),
            by_prefix: create_hash_map_with_capacity(64),
        }
    }

    /// Shared registry of the standard override tags
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Add a vendor tag schema
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::DuplicatePrefix`] if a schema with the same
    /// prefix is already registered and [`PluginError::EmptyPrefix`] for a
    /// schema without a prefix.
    #[cfg(feature = "plugins")]
    pub fn register(&mut self, schema: &'static TagSchema) -> Result<(), PluginError> {
        self.insert(schema)
    }

    /// Insert keeping longer prefixes first
    fn insert(&mut self, schema: &'static TagSchema) -> Result<(), PluginError> {
        if schema.prefix.is_empty() {
            return Err(PluginError::EmptyPrefix);
        }
        if self.by_prefix.contains_key(schema.prefix) {
            return Err(PluginError::DuplicatePrefix(schema.prefix.to_string()));
        }

        let len = schema.prefix.len();
        let at = self
            .schemas
            .iter()
            .position(|existing| existing.prefix.len() < len)
            .unwrap_or(self.schemas.len());
        self.schemas.insert(at, schema);
        self.reindex();
        Ok(())
    }

    /// Rebuild the prefix index after an insertion
    fn reindex(&mut self) {
        self.by_prefix.clear();
        for (index, schema) in self.schemas.iter().enumerate() {
            self.by_prefix.insert(schema.prefix, index);
        }
    }

    /// Schema registered under exactly this prefix
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&'static TagSchema> {
        self.by_prefix.get(prefix).map(|&index| self.schemas[index])
    }

    /// Schema whose prefix is the longest literal prefix of `subcode`
    #[must_use]
    pub fn lookup(&self, subcode: &str) -> Option<&'static TagSchema> {
        self.schemas
            .iter()
            .copied()
            .find(|schema| subcode.starts_with(schema.prefix))
    }

    /// Decode one backslash-separated sub-code into a directive
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownCode`] when no prefix matches, otherwise
    /// whatever argument decoding reports.
    pub fn resolve(&self, subcode: &str) -> Result<Directive, CoreError> {
        let Some(schema) = self.lookup(subcode) else {
            return Err(CoreError::UnknownCode(subcode.to_string()));
        };
        tracing::trace!(subcode, tag = schema.prefix, "resolved override code");
        Directive::decode(schema, &subcode[schema.prefix.len()..])
    }

    /// Schemas in resolution order
    pub fn schemas(&self) -> impl Iterator<Item = &'static TagSchema> + '_ {
        self.schemas.iter().copied()
    }

    /// Number of registered schemas
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether no schema is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHORT: TagSchema =
        TagSchema::bare("Short", "zz", &[ParamSpec::optional("v", ValueKind::Int)]);
    static LONG: TagSchema =
        TagSchema::bare("Long", "zzz", &[ParamSpec::optional("v", ValueKind::Int)]);

    #[test]
    fn resolution_order_is_by_descending_length() {
        let lengths: Vec<usize> = TagRegistry::standard()
            .schemas()
            .map(|s| s.prefix.len())
            .collect();
        assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn insertion_keeps_longest_first() {
        let mut registry = TagRegistry::empty();
        registry.insert(&SHORT).unwrap();
        registry.insert(&LONG).unwrap();
        assert_eq!(registry.lookup("zzz1").unwrap().name, "Long");
        assert_eq!(registry.lookup("zz1").unwrap().name, "Short");
        assert_eq!(registry.get("zz").unwrap().name, "Short");
    }

    #[test]
    fn duplicate_prefix_is_rejected() {
        let mut registry = TagRegistry::empty();
        registry.insert(&SHORT).unwrap();
        assert_eq!(
            registry.insert(&SHORT),
            Err(PluginError::DuplicatePrefix("zz".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn standard_contains_every_prefix_once() {
        let registry = TagRegistry::standard();
        assert_eq!(registry.len(), tags::standard_schemas().count());
        for prefix in ["b", "xbord", "fs+", "1c", "alpha", "K", "iclip", "p"] {
            assert!(registry.get(prefix).is_some(), "missing {prefix}");
        }
    }

    #[test]
    fn unknown_code_fails() {
        let err = TagRegistry::standard().resolve("zzz").unwrap_err();
        assert_eq!(err, CoreError::UnknownCode("zzz".to_string()));
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = TagRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.resolve("b1").is_err());
    }
}

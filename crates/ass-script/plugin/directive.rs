//! Decoded override tag instances
//!
//! A [`Directive`] pairs a static [`TagSchema`] with one optional typed
//! [`Value`] per declared parameter. Decoding follows the schema's bracket
//! style; encoding writes the shortest form that decodes back to the same
//! directive.

use super::{BracketStyle, TagSchema, ValueKind};
use crate::utils::{format_real, parse_numeric, Color, CoreError};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Typed parameter value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Value {
    /// Whole number, e.g. `\an8`
    Int(i64),
    /// Decimal number, written without a trailing `.0`
    Real(f64),
    /// Free text such as a font name or a vector drawing
    Text(String),
    /// `&H..&` color or alpha
    Color(Color),
}

impl Value {
    /// Kind this value satisfies
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Real(_) => ValueKind::Real,
            Self::Text(_) => ValueKind::Text,
            Self::Color(_) => ValueKind::Color,
        }
    }

    /// Decode one argument token
    fn decode(kind: ValueKind, token: &str) -> Result<Self, CoreError> {
        Ok(match kind {
            ValueKind::Int => Self::Int(parse_numeric(token)?),
            ValueKind::Real => Self::Real(parse_numeric(token)?),
            ValueKind::Text => Self::Text(token.to_string()),
            ValueKind::Color => Self::Color(Color::parse(token)?),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Real(v) => f.write_str(&format_real(*v)),
            Self::Text(v) => f.write_str(v),
            Self::Color(v) => f.write_str(&v.to_tag_string()),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<Color> for Value {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// One override tag with its decoded arguments
#[derive(Debug, Clone)]
pub struct Directive {
    /// Tag definition
    schema: &'static TagSchema,
    /// One slot per schema parameter
    args: Vec<Option<Value>>,
}

impl Directive {
    /// Build a directive from positional arguments
    ///
    /// Missing trailing arguments are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingParameter`] when a required parameter is
    /// unset and [`CoreError::InvalidArgument`] when a value has the wrong
    /// kind or there are more arguments than parameters.
    pub fn new(schema: &'static TagSchema, args: Vec<Option<Value>>) -> Result<Self, CoreError> {
        if args.len() > schema.params.len() {
            return Err(CoreError::InvalidArgument {
                tag: schema.prefix,
                param: "",
                value: format!("{} arguments", args.len()),
                reason: format!("at most {} accepted", schema.params.len()),
            });
        }

        let mut args = args;
        args.resize(schema.params.len(), None);

        for (spec, arg) in schema.params.iter().zip(&args) {
            match arg {
                None if spec.required => {
                    return Err(CoreError::MissingParameter {
                        tag: schema.prefix,
                        param: spec.name,
                    })
                }
                Some(value) if value.kind() != spec.kind => {
                    return Err(CoreError::InvalidArgument {
                        tag: schema.prefix,
                        param: spec.name,
                        value: value.to_string(),
                        reason: format!("expected {:?}", spec.kind),
                    })
                }
                _ => {}
            }
        }

        Ok(Self { schema, args })
    }

    /// Build a directive whose arguments are all set
    ///
    /// # Errors
    ///
    /// Same as [`Directive::new`].
    pub fn with_values<I>(schema: &'static TagSchema, values: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = Value>,
    {
        Self::new(schema, values.into_iter().map(Some).collect())
    }

    /// Decode the text that follows the prefix
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingParameter`] for an absent required
    /// parameter and [`CoreError::InvalidArgument`] for a token that does
    /// not decode as its parameter kind.
    pub fn decode(schema: &'static TagSchema, rest: &str) -> Result<Self, CoreError> {
        let tokens: Vec<&str> = match schema.bracket {
            BracketStyle::Bare => vec![rest],
            BracketStyle::Parenthesized => {
                let inner = rest.trim();
                let inner = inner.strip_prefix('(').unwrap_or(inner);
                let inner = inner.strip_suffix(')').unwrap_or(inner);
                inner.splitn(schema.params.len().max(1), ',').collect()
            }
        };

        let mut args = Vec::with_capacity(schema.params.len());
        for (index, spec) in schema.params.iter().enumerate() {
            let token = tokens.get(index).map_or("", |t| t.trim());
            if token.is_empty() {
                if spec.required {
                    return Err(CoreError::MissingParameter {
                        tag: schema.prefix,
                        param: spec.name,
                    });
                }
                args.push(None);
                continue;
            }

            let value = Value::decode(spec.kind, token).map_err(|err| CoreError::InvalidArgument {
                tag: schema.prefix,
                param: spec.name,
                value: token.to_string(),
                reason: err.to_string(),
            })?;
            args.push(Some(value));
        }

        Ok(Self { schema, args })
    }

    /// Schema this directive was decoded against
    #[must_use]
    pub const fn schema(&self) -> &'static TagSchema {
        self.schema
    }

    /// Tag name, e.g. `Bold`
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.schema.name
    }

    /// Tag prefix, e.g. `b`
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.schema.prefix
    }

    /// How the arguments are written
    #[must_use]
    pub const fn bracket(&self) -> BracketStyle {
        self.schema.bracket
    }

    /// Positional arguments, one slot per schema parameter
    #[must_use]
    pub fn args(&self) -> &[Option<Value>] {
        &self.args
    }

    /// Argument by parameter name
    #[must_use]
    pub fn get(&self, param: &str) -> Option<&Value> {
        self.schema
            .param_index(param)
            .and_then(|index| self.args[index].as_ref())
    }

    /// Sub-code text without the leading backslash
    #[must_use]
    pub fn encode(&self) -> String {
        let used = self
            .args
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1);

        let body = self.args[..used]
            .iter()
            .map(|arg| arg.as_ref().map(ToString::to_string).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",");

        match self.schema.bracket {
            BracketStyle::Bare => format!("{}{body}", self.schema.prefix),
            BracketStyle::Parenthesized => format!("{}({body})", self.schema.prefix),
        }
    }
}

impl PartialEq for Directive {
    fn eq(&self, other: &Self) -> bool {
        self.schema.prefix == other.schema.prefix && self.args == other.args
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}", self.encode())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Directive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Directive", 2)?;
        state.serialize_field("tag", self.schema.prefix)?;
        state.serialize_field("args", &self.args)?;
        state.end()
    }
}

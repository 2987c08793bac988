//! Font selection tags: `fn`, `fs`, `fs+`, `fs-` and `fe`

use crate::plugin::{ParamSpec, TagSchema, ValueKind};

/// Font face (`\fnArial`); the name may contain spaces
pub static FONT_NAME: TagSchema = TagSchema::bare(
    "FontName",
    "fn",
    &[ParamSpec::optional("name", ValueKind::Text)],
);

/// Absolute font size (`\fs20`)
pub static FONT_SIZE: TagSchema = TagSchema::bare(
    "FontSize",
    "fs",
    &[ParamSpec::optional("size", ValueKind::Real)],
);

/// Relative font size increase (`\fs+2`)
pub static FONT_SIZE_UP: TagSchema = TagSchema::bare(
    "FontSizeUp",
    "fs+",
    &[ParamSpec::required("step", ValueKind::Real)],
);

/// Relative font size decrease (`\fs-2`)
pub static FONT_SIZE_DOWN: TagSchema = TagSchema::bare(
    "FontSizeDown",
    "fs-",
    &[ParamSpec::required("step", ValueKind::Real)],
);

/// Font charset (`\fe0`)
pub static FONT_ENCODING: TagSchema = TagSchema::bare(
    "FontEncoding",
    "fe",
    &[ParamSpec::optional("charset", ValueKind::Int)],
);

/// Every schema in this module
pub static SCHEMAS: [&TagSchema; 5] = [
    &FONT_NAME,
    &FONT_SIZE,
    &FONT_SIZE_UP,
    &FONT_SIZE_DOWN,
    &FONT_ENCODING,
];

#[cfg(test)]
mod tests {
    use crate::plugin::{TagRegistry, Value};

    #[test]
    fn relative_sizes_resolve_before_absolute() {
        let registry = TagRegistry::standard();
        let up = registry.resolve("fs+4").unwrap();
        assert_eq!(up.name(), "FontSizeUp");
        assert_eq!(up.get("step"), Some(&Value::Real(4.0)));
        assert_eq!(registry.resolve("fs-1").unwrap().name(), "FontSizeDown");
        assert_eq!(registry.resolve("fs30").unwrap().name(), "FontSize");
    }

    #[test]
    fn relative_size_requires_step() {
        assert!(TagRegistry::standard().resolve("fs+").is_err());
    }
}

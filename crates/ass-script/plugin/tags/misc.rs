//! Style reset and drawing mode

use crate::plugin::{ParamSpec, TagSchema, ValueKind};

/// Reset to the line style, or to a named style (`\r`, `\rAlt`)
pub static RESET: TagSchema = TagSchema::bare(
    "Reset",
    "r",
    &[ParamSpec::optional("style", ValueKind::Text)],
);

/// Drawing mode scale; `\p0` ends drawing
pub static DRAW: TagSchema = TagSchema::bare(
    "Draw",
    "p",
    &[ParamSpec::required("level", ValueKind::Int)],
);

/// Every schema in this module
pub static SCHEMAS: [&TagSchema; 2] = [&RESET, &DRAW];

#[cfg(test)]
mod tests {
    use crate::plugin::{TagRegistry, Value};

    #[test]
    fn reset_with_and_without_style() {
        let registry = TagRegistry::standard();
        assert_eq!(registry.resolve("r").unwrap().get("style"), None);
        assert_eq!(
            registry.resolve("rAlt Style").unwrap().get("style"),
            Some(&Value::Text("Alt Style".into()))
        );
    }

    #[test]
    fn draw_is_not_position() {
        let registry = TagRegistry::standard();
        assert_eq!(registry.resolve("p1").unwrap().name(), "Draw");
        assert_eq!(registry.resolve("pos(1,2)").unwrap().name(), "Position");
    }
}

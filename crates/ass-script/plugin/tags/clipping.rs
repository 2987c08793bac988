//! Clipping tags: `clip` and `iclip`
//!
//! The rectangle form fills all four slots. The vector form (`\clip(m 0 0
//! l 10 0 10 10)` or `\clip(2,m ...)`) uses the first one or two.

use crate::plugin::{ParamSpec, TagSchema, ValueKind};

/// Rectangle corners, or a drawing in the first slot
const AREA: &[ParamSpec] = &[
    ParamSpec::required("x1", ValueKind::Text),
    ParamSpec::optional("y1", ValueKind::Text),
    ParamSpec::optional("x2", ValueKind::Text),
    ParamSpec::optional("y2", ValueKind::Text),
];

/// Show only inside the area (`\clip`)
pub static CLIP: TagSchema = TagSchema::parenthesized("Clip", "clip", AREA);
/// Show only outside the area (`\iclip`)
pub static INVERSE_CLIP: TagSchema = TagSchema::parenthesized("InverseClip", "iclip", AREA);

/// Every schema in this module
pub static SCHEMAS: [&TagSchema; 2] = [&CLIP, &INVERSE_CLIP];

#[cfg(test)]
mod tests {
    use crate::plugin::{TagRegistry, Value};

    #[test]
    fn rectangle_and_vector_forms() {
        let registry = TagRegistry::standard();
        let rect = registry.resolve("clip(0,0,320,240)").unwrap();
        assert_eq!(rect.get("x2"), Some(&Value::Text("320".into())));
        assert_eq!(rect.encode(), "clip(0,0,320,240)");

        let vector = registry.resolve("iclip(m 0 0 l 10 0 10 10)").unwrap();
        assert_eq!(vector.name(), "InverseClip");
        assert_eq!(vector.encode(), "iclip(m 0 0 l 10 0 10 10)");
    }

    #[test]
    fn iclip_is_not_italic() {
        assert_eq!(
            TagRegistry::standard().resolve("i1").unwrap().name(),
            "Italic"
        );
    }
}

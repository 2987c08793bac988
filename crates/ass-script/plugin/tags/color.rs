//! Color and alpha tags
//!
//! `c` and `1c`..`4c` take an optional `&HBBGGRR&` color. `alpha` and
//! `1a`..`4a` keep their `&HAA&` argument as text.

use crate::plugin::{ParamSpec, TagSchema, ValueKind};

/// One optional color
const COLOR: &[ParamSpec] = &[ParamSpec::optional("color", ValueKind::Color)];
/// One optional alpha, kept as written
const ALPHA: &[ParamSpec] = &[ParamSpec::optional("value", ValueKind::Text)];

/// Primary color, short form (`\c`)
pub static COLOR_SHORT: TagSchema = TagSchema::bare("Color", "c", COLOR);
/// Fill color (`\1c`)
pub static PRIMARY_COLOR: TagSchema = TagSchema::bare("PrimaryColor", "1c", COLOR);
/// Karaoke pre-highlight color (`\2c`)
pub static SECONDARY_COLOR: TagSchema = TagSchema::bare("SecondaryColor", "2c", COLOR);
/// Border color (`\3c`)
pub static OUTLINE_COLOR: TagSchema = TagSchema::bare("OutlineColor", "3c", COLOR);
/// Shadow color (`\4c`)
pub static BACK_COLOR: TagSchema = TagSchema::bare("BackColor", "4c", COLOR);

/// Alpha of every component (`\alpha`)
pub static ALPHA_ALL: TagSchema = TagSchema::bare("Alpha", "alpha", ALPHA);
/// Fill alpha (`\1a`)
pub static PRIMARY_ALPHA: TagSchema = TagSchema::bare("PrimaryAlpha", "1a", ALPHA);
/// Pre-highlight alpha (`\2a`)
pub static SECONDARY_ALPHA: TagSchema = TagSchema::bare("SecondaryAlpha", "2a", ALPHA);
/// Border alpha (`\3a`)
pub static OUTLINE_ALPHA: TagSchema = TagSchema::bare("OutlineAlpha", "3a", ALPHA);
/// Shadow alpha (`\4a`)
pub static BACK_ALPHA: TagSchema = TagSchema::bare("BackAlpha", "4a", ALPHA);

/// Every schema in this module
pub static SCHEMAS: [&TagSchema; 10] = [
    &COLOR_SHORT,
    &PRIMARY_COLOR,
    &SECONDARY_COLOR,
    &OUTLINE_COLOR,
    &BACK_COLOR,
    &ALPHA_ALL,
    &PRIMARY_ALPHA,
    &SECONDARY_ALPHA,
    &OUTLINE_ALPHA,
    &BACK_ALPHA,
];

#[cfg(test)]
mod tests {
    use crate::plugin::{TagRegistry, Value};
    use crate::utils::Color;

    #[test]
    fn numbered_color_decodes() {
        let d = TagRegistry::standard().resolve("1c&HFF0000&").unwrap();
        assert_eq!(d.name(), "PrimaryColor");
        assert_eq!(
            d.get("color"),
            Some(&Value::Color(Color::from_channels(0, 0, 0xFF, 0)))
        );
    }

    #[test]
    fn alpha_is_not_align() {
        let registry = TagRegistry::standard();
        let d = registry.resolve("alpha&H80&").unwrap();
        assert_eq!(d.name(), "Alpha");
        assert_eq!(d.get("value"), Some(&Value::Text("&H80&".into())));
        assert_eq!(d.encode(), "alpha&H80&");
        assert_eq!(registry.resolve("3a&HFF&").unwrap().name(), "OutlineAlpha");
    }

    #[test]
    fn bad_color_is_value_error() {
        assert!(TagRegistry::standard().resolve("c&Hzz&").is_err());
    }
}

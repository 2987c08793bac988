//! Scaling, spacing, rotation and shearing tags

use crate::plugin::{ParamSpec, TagSchema, ValueKind};

/// One optional percentage
const PERCENT: &[ParamSpec] = &[ParamSpec::optional("percent", ValueKind::Real)];
/// One optional angle
const DEGREES: &[ParamSpec] = &[ParamSpec::optional("degrees", ValueKind::Real)];
/// One optional shear factor
const FACTOR: &[ParamSpec] = &[ParamSpec::optional("factor", ValueKind::Real)];

/// Horizontal scale (`\fscx`)
pub static SCALE_X: TagSchema = TagSchema::bare("ScaleX", "fscx", PERCENT);
/// Vertical scale (`\fscy`)
pub static SCALE_Y: TagSchema = TagSchema::bare("ScaleY", "fscy", PERCENT);

/// Letter spacing in pixels (`\fsp`)
pub static SPACING: TagSchema = TagSchema::bare(
    "Spacing",
    "fsp",
    &[ParamSpec::optional("pixels", ValueKind::Real)],
);

/// Z rotation, short form (`\fr`)
pub static ROTATION: TagSchema = TagSchema::bare("Rotation", "fr", DEGREES);
/// Rotation around the X axis (`\frx`)
pub static ROTATION_X: TagSchema = TagSchema::bare("RotationX", "frx", DEGREES);
/// Rotation around the Y axis (`\fry`)
pub static ROTATION_Y: TagSchema = TagSchema::bare("RotationY", "fry", DEGREES);
/// Rotation around the Z axis (`\frz`)
pub static ROTATION_Z: TagSchema = TagSchema::bare("RotationZ", "frz", DEGREES);

/// Horizontal shear (`\fax`)
pub static SHEAR_X: TagSchema = TagSchema::bare("ShearX", "fax", FACTOR);
/// Vertical shear (`\fay`)
pub static SHEAR_Y: TagSchema = TagSchema::bare("ShearY", "fay", FACTOR);

/// Every schema in this module
pub static SCHEMAS: [&TagSchema; 9] = [
    &SCALE_X,
    &SCALE_Y,
    &SPACING,
    &ROTATION,
    &ROTATION_X,
    &ROTATION_Y,
    &ROTATION_Z,
    &SHEAR_X,
    &SHEAR_Y,
];

#[cfg(test)]
mod tests {
    use crate::plugin::{TagRegistry, Value};

    #[test]
    fn scale_is_not_font_size() {
        let registry = TagRegistry::standard();
        let d = registry.resolve("fscx120").unwrap();
        assert_eq!(d.name(), "ScaleX");
        assert_eq!(d.get("percent"), Some(&Value::Real(120.0)));
        assert_eq!(registry.resolve("fsp2").unwrap().name(), "Spacing");
    }

    #[test]
    fn rotations() {
        let registry = TagRegistry::standard();
        assert_eq!(registry.resolve("fr45").unwrap().name(), "Rotation");
        assert_eq!(registry.resolve("frz-10").unwrap().name(), "RotationZ");
        assert_eq!(
            registry.resolve("fax0.25").unwrap().get("factor"),
            Some(&Value::Real(0.25))
        );
    }
}

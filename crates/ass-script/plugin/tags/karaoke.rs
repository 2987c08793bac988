//! Karaoke timing tags, durations in centiseconds
//!
//! `k` highlights instantly, `kf` and `K` sweep the fill and `ko` highlights
//! the outline. Prefixes are case sensitive.

use crate::plugin::{ParamSpec, TagSchema, ValueKind};

/// One required duration
const DURATION: &[ParamSpec] = &[ParamSpec::required("duration", ValueKind::Int)];

/// Instant highlight (`\k`)
pub static KARAOKE: TagSchema = TagSchema::bare("Karaoke", "k", DURATION);
/// Sweeping fill (`\kf`)
pub static KARAOKE_FILL: TagSchema = TagSchema::bare("KaraokeFill", "kf", DURATION);
/// Sweeping fill, legacy spelling (`\K`)
pub static KARAOKE_SWEEP: TagSchema = TagSchema::bare("KaraokeSweep", "K", DURATION);
/// Outline highlight (`\ko`)
pub static KARAOKE_OUTLINE: TagSchema = TagSchema::bare("KaraokeOutline", "ko", DURATION);

/// Every schema in this module
pub static SCHEMAS: [&TagSchema; 4] = [&KARAOKE, &KARAOKE_FILL, &KARAOKE_SWEEP, &KARAOKE_OUTLINE];

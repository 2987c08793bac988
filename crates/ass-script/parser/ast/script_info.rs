//! `[Script Info]` metadata
//!
//! The metadata section is a flat `Key: value` list. Known keys are decoded
//! into typed fields of [`ScriptInfo`]; unknown keys are kept verbatim so a
//! round trip does not lose them, and `;` comment lines are kept as well.

use crate::parser::options::DumpFlags;
use crate::parser::table::Attribute;
use crate::parser::{IssueCategory, ParseIssue};
use crate::utils::{format_real, parse_numeric, CoreError};
use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// How colliding subtitles are stacked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Collisions {
    /// Later lines are placed below earlier ones
    #[default]
    Normal,
    /// Later lines push earlier ones upward
    Reverse,
}

impl Collisions {
    /// Parse `Normal` or `Reverse`, ignoring case
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidEnumValue`] for any other text.
    pub fn parse(src: &str) -> Result<Self, CoreError> {
        let src = src.trim();
        if src.eq_ignore_ascii_case("Normal") {
            Ok(Self::Normal)
        } else if src.eq_ignore_ascii_case("Reverse") {
            Ok(Self::Reverse)
        } else {
            Err(CoreError::invalid_enum("Collisions", src))
        }
    }

    /// Written form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Reverse => "Reverse",
        }
    }
}

/// Line wrapping mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum WrapStyle {
    /// Smart wrapping, upper line wider
    #[default]
    Smart = 0,
    /// Wrap only at the end of line
    EndOfLine = 1,
    /// No wrapping, only `\N` breaks
    NoWrap = 2,
    /// Smart wrapping, lower line wider
    SmartLowerWide = 3,
}

impl WrapStyle {
    /// Mode for its written digit
    #[must_use]
    pub const fn from_int(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Smart),
            1 => Some(Self::EndOfLine),
            2 => Some(Self::NoWrap),
            3 => Some(Self::SmartLowerWide),
            _ => None,
        }
    }

    /// Parse the numeric form `0`..`3`
    ///
    /// # Errors
    ///
    /// Returns a numeric error for non-integers and
    /// [`CoreError::InvalidEnumValue`] for integers out of range.
    pub fn parse(src: &str) -> Result<Self, CoreError> {
        let value: i64 = parse_numeric(src)?;
        Self::from_int(value).ok_or_else(|| CoreError::invalid_enum("WrapStyle", value))
    }
}

/// Whether borders and shadows scale with the script resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ScaledBorderAndShadow {
    /// Scale with the script resolution
    Yes,
    /// Keep sizes in video pixels
    No,
}

impl ScaledBorderAndShadow {
    /// Parse `Yes` or `No`, ignoring case
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidEnumValue`] for any other text.
    pub fn parse(src: &str) -> Result<Self, CoreError> {
        let src = src.trim();
        if src.eq_ignore_ascii_case("Yes") {
            Ok(Self::Yes)
        } else if src.eq_ignore_ascii_case("No") {
            Ok(Self::No)
        } else {
            Err(CoreError::invalid_enum("ScaledBorderAndShadow", src))
        }
    }

    /// Written form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// Known metadata keys in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoKey {
    /// `ScriptType`, the format version
    ScriptType,
    /// `Title`
    Title,
    /// `PlayResX`, script width
    PlayResX,
    /// `PlayResY`, script height
    PlayResY,
    /// `Collisions`
    Collisions,
    /// `PlayDepth`, color depth
    PlayDepth,
    /// `Timer`, speed in percent
    Timer,
    /// `WrapStyle`
    WrapStyle,
    /// `ScaledBorderAndShadow`
    ScaledBorderAndShadow,
    /// `OriginalScript`, the author
    OriginalScript,
    /// `OriginalTranslation`
    OriginalTranslation,
    /// `OriginalEditing`
    OriginalEditing,
    /// `OriginalTiming`
    OriginalTiming,
    /// `SynchPoint`
    SynchPoint,
    /// `ScriptUpdatedBy`
    ScriptUpdatedBy,
    /// `UpdateDetails`
    UpdateDetails,
}

impl Attribute for InfoKey {
    const ALL: &'static [Self] = &[
        Self::ScriptType,
        Self::Title,
        Self::PlayResX,
        Self::PlayResY,
        Self::Collisions,
        Self::PlayDepth,
        Self::Timer,
        Self::WrapStyle,
        Self::ScaledBorderAndShadow,
        Self::OriginalScript,
        Self::OriginalTranslation,
        Self::OriginalEditing,
        Self::OriginalTiming,
        Self::SynchPoint,
        Self::ScriptUpdatedBy,
        Self::UpdateDetails,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::ScriptType => "ScriptType",
            Self::Title => "Title",
            Self::PlayResX => "PlayResX",
            Self::PlayResY => "PlayResY",
            Self::Collisions => "Collisions",
            Self::PlayDepth => "PlayDepth",
            Self::Timer => "Timer",
            Self::WrapStyle => "WrapStyle",
            Self::ScaledBorderAndShadow => "ScaledBorderAndShadow",
            Self::OriginalScript => "OriginalScript",
            Self::OriginalTranslation => "OriginalTranslation",
            Self::OriginalEditing => "OriginalEditing",
            Self::OriginalTiming => "OriginalTiming",
            Self::SynchPoint => "SynchPoint",
            Self::ScriptUpdatedBy => "ScriptUpdatedBy",
            Self::UpdateDetails => "UpdateDetails",
        }
    }
}

impl fmt::Display for InfoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded `[Script Info]` section
///
/// # Examples
///
/// ```rust
/// use ass_script::parser::ast::ScriptInfo;
///
/// let mut info = ScriptInfo::default();
/// assert_eq!(info.title.as_deref(), Some("<untitled>"));
///
/// assert!(info.parse_line("PlayResX: 1920").is_empty());
/// assert_eq!(info.play_res_x, Some(1920));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScriptInfo {
    /// Format version, `V4.00+` for ASS
    pub script_type: Option<String>,
    /// Script title
    pub title: Option<String>,
    /// Width the script was authored against
    pub play_res_x: Option<u32>,
    /// Height the script was authored against
    pub play_res_y: Option<u32>,
    /// Stacking of overlapping lines
    pub collisions: Option<Collisions>,
    /// Color depth
    pub play_depth: Option<u32>,
    /// Timer speed in percent
    pub timer: Option<f64>,
    /// Default line wrapping
    pub wrap_style: Option<WrapStyle>,
    /// Whether borders follow the script resolution
    pub scaled_border_and_shadow: Option<ScaledBorderAndShadow>,
    /// Original author
    pub original_script: Option<String>,
    /// Translator
    pub original_translation: Option<String>,
    /// Editor
    pub original_editing: Option<String>,
    /// Timer
    pub original_timing: Option<String>,
    /// Where the script starts relative to the video
    pub synch_point: Option<String>,
    /// Last editor
    pub script_updated_by: Option<String>,
    /// Last change
    pub update_details: Option<String>,
    /// Keys outside the known set, in source order
    pub extra: Vec<(String, String)>,
    /// `;` comment lines, written back directly under the header
    pub comments: Vec<String>,
}

impl Default for ScriptInfo {
    fn default() -> Self {
        Self {
            script_type: Some("V4.00+".to_string()),
            title: Some("<untitled>".to_string()),
            play_res_x: None,
            play_res_y: None,
            collisions: None,
            play_depth: None,
            timer: None,
            wrap_style: None,
            scaled_border_and_shadow: None,
            original_script: None,
            original_translation: None,
            original_editing: None,
            original_timing: None,
            synch_point: None,
            script_updated_by: None,
            update_details: None,
            extra: Vec::new(),
            comments: Vec::new(),
        }
    }
}

impl ScriptInfo {
    /// Decode `value` into the field for `key`
    ///
    /// # Errors
    ///
    /// Returns the reason `value` is not valid for `key`.
    pub fn set(&mut self, key: InfoKey, value: &str) -> Result<(), CoreError> {
        let text = || Some(value.to_string());
        match key {
            InfoKey::ScriptType => self.script_type = text(),
            InfoKey::Title => self.title = text(),
            InfoKey::PlayResX => self.play_res_x = Some(parse_numeric(value)?),
            InfoKey::PlayResY => self.play_res_y = Some(parse_numeric(value)?),
            InfoKey::Collisions => self.collisions = Some(Collisions::parse(value)?),
            InfoKey::PlayDepth => self.play_depth = Some(parse_numeric(value)?),
            InfoKey::Timer => self.timer = Some(parse_numeric(value)?),
            InfoKey::WrapStyle => self.wrap_style = Some(WrapStyle::parse(value)?),
            InfoKey::ScaledBorderAndShadow => {
                self.scaled_border_and_shadow = Some(ScaledBorderAndShadow::parse(value)?);
            }
            InfoKey::OriginalScript => self.original_script = text(),
            InfoKey::OriginalTranslation => self.original_translation = text(),
            InfoKey::OriginalEditing => self.original_editing = text(),
            InfoKey::OriginalTiming => self.original_timing = text(),
            InfoKey::SynchPoint => self.synch_point = text(),
            InfoKey::ScriptUpdatedBy => self.script_updated_by = text(),
            InfoKey::UpdateDetails => self.update_details = text(),
        }
        Ok(())
    }

    /// Encoded value of `key`, `None` when unset
    #[must_use]
    pub fn get(&self, key: InfoKey) -> Option<String> {
        match key {
            InfoKey::ScriptType => self.script_type.clone(),
            InfoKey::Title => self.title.clone(),
            InfoKey::PlayResX => self.play_res_x.map(|v| v.to_string()),
            InfoKey::PlayResY => self.play_res_y.map(|v| v.to_string()),
            InfoKey::Collisions => self.collisions.map(|v| v.as_str().to_string()),
            InfoKey::PlayDepth => self.play_depth.map(|v| v.to_string()),
            InfoKey::Timer => self.timer.map(format_real),
            InfoKey::WrapStyle => self.wrap_style.map(|v| (v as u8).to_string()),
            InfoKey::ScaledBorderAndShadow => self
                .scaled_border_and_shadow
                .map(|v| v.as_str().to_string()),
            InfoKey::OriginalScript => self.original_script.clone(),
            InfoKey::OriginalTranslation => self.original_translation.clone(),
            InfoKey::OriginalEditing => self.original_editing.clone(),
            InfoKey::OriginalTiming => self.original_timing.clone(),
            InfoKey::SynchPoint => self.synch_point.clone(),
            InfoKey::ScriptUpdatedBy => self.script_updated_by.clone(),
            InfoKey::UpdateDetails => self.update_details.clone(),
        }
    }

    /// Value of an unknown key kept from the source
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Consume one body line of the section
    pub fn parse_line(&mut self, text: &str) -> Vec<ParseIssue> {
        let trimmed = text.trim();
        if trimmed.starts_with(';') {
            self.comments.push(trimmed.to_string());
            return Vec::new();
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            return vec![ParseIssue::error(
                IssueCategory::Syntax,
                format!("fail to parse `{text}` as script info"),
            )];
        };
        let key = key.trim();
        let value = value.trim();

        let Some(known) = InfoKey::from_name(key) else {
            self.extra.push((key.to_string(), value.to_string()));
            return vec![ParseIssue::warning(
                IssueCategory::Schema,
                format!("unknown script info key `{key}` kept verbatim"),
            )];
        };

        match self.set(known, value) {
            Ok(()) => Vec::new(),
            Err(err) => vec![ParseIssue::error(
                IssueCategory::Value,
                format!("could not parse `{value}` as script info `{known}`: {err}"),
            )],
        }
    }

    /// Serialize as header, comments, known keys, then unknown keys
    #[must_use]
    pub fn dump(&self, header: &str, flags: DumpFlags) -> (Vec<String>, Vec<ParseIssue>) {
        let sep = flags.title_separator();
        let mut lines = vec![header.to_string()];
        lines.extend(self.comments.iter().cloned());
        for &key in InfoKey::ALL {
            if let Some(value) = self.get(key) {
                lines.push(format!("{key}{sep}{value}"));
            }
        }
        for (key, value) in &self.extra {
            lines.push(format!("{key}{sep}{value}"));
        }
        (lines, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let info = ScriptInfo::default();
        assert_eq!(info.script_type.as_deref(), Some("V4.00+"));
        assert_eq!(info.title.as_deref(), Some("<untitled>"));
        assert!(info.play_res_x.is_none());
    }

    #[test]
    fn typed_values() {
        let mut info = ScriptInfo::default();
        for line in [
            "Title: Demo: part 2",
            "PlayResY: 1080",
            "collisions: reverse",
            "WrapStyle: 2",
            "ScaledBorderAndShadow: yes",
            "Timer: 100.0000",
        ] {
            assert!(info.parse_line(line).is_empty(), "{line}");
        }
        assert_eq!(info.title.as_deref(), Some("Demo: part 2"));
        assert_eq!(info.play_res_y, Some(1080));
        assert_eq!(info.collisions, Some(Collisions::Reverse));
        assert_eq!(info.wrap_style, Some(WrapStyle::NoWrap));
        assert_eq!(info.scaled_border_and_shadow, Some(ScaledBorderAndShadow::Yes));
        assert_eq!(info.get(InfoKey::Timer).as_deref(), Some("100"));
    }

    #[test]
    fn bad_values_are_reported() {
        let mut info = ScriptInfo::default();
        let issues = info.parse_line("WrapStyle: 7");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::Value);
        assert!(info.wrap_style.is_none());

        let issues = info.parse_line("PlayResX: wide");
        assert_eq!(issues[0].category, IssueCategory::Value);
    }

    #[test]
    fn unknown_keys_are_kept() {
        let mut info = ScriptInfo::default();
        let issues = info.parse_line("YCbCr Matrix: TV.709");
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert_eq!(info.extra("YCbCr Matrix"), Some("TV.709"));
    }

    #[test]
    fn missing_colon() {
        let mut info = ScriptInfo::default();
        let issues = info.parse_line("just text");
        assert_eq!(issues[0].category, IssueCategory::Syntax);
    }

    #[test]
    fn dump_order() {
        let mut info = ScriptInfo::default();
        info.parse_line("; Script generated by hand");
        info.parse_line("Custom: 1");
        info.parse_line("PlayResX: 640");
        let (lines, issues) = info.dump("[Script Info]", DumpFlags::default());
        assert!(issues.is_empty());
        assert_eq!(
            lines,
            [
                "[Script Info]",
                "; Script generated by hand",
                "ScriptType: V4.00+",
                "Title: <untitled>",
                "PlayResX: 640",
                "Custom: 1",
            ]
        );
    }
}

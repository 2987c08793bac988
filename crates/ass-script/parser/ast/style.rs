//! `[V4+ Styles]` records
//!
//! A [`StyleItem`] holds one `Style:` line. Every attribute is optional
//! because only the columns named by the section's `Format:` line are ever
//! filled.

use crate::parser::table::{Attribute, Decoded, Record};
use crate::plugin::TagRegistry;
use crate::utils::{format_real, parse_numeric, Color, CoreError};

#[cfg(feature = "serde")]
use serde::Serialize;

/// On/off style flag, written `-1` and `0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Toggle {
    /// Written `-1`
    #[default]
    Enabled = -1,
    /// Written `0`
    Disabled = 0,
}

impl Toggle {
    /// Flag for its written value, `None` outside `-1` and `0`
    #[must_use]
    pub const fn from_int(value: i64) -> Option<Self> {
        match value {
            -1 => Some(Self::Enabled),
            0 => Some(Self::Disabled),
            _ => None,
        }
    }
}

/// Border rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BorderStyle {
    /// Outline plus drop shadow
    #[default]
    OutlineAndShadow = 1,
    /// Opaque box behind the text
    OpaqueBox = 3,
}

impl BorderStyle {
    /// Mode for its written value, `None` for anything but `1` and `3`
    #[must_use]
    pub const fn from_int(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::OutlineAndShadow),
            3 => Some(Self::OpaqueBox),
            _ => None,
        }
    }
}

/// Numpad-style text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Alignment {
    /// `1`
    BottomLeft = 1,
    /// `2`
    BottomCenter = 2,
    /// `3`
    BottomRight = 3,
    /// `4`
    MiddleLeft = 4,
    /// `5`
    #[default]
    MiddleCenter = 5,
    /// `6`
    MiddleRight = 6,
    /// `7`
    TopLeft = 7,
    /// `8`
    TopCenter = 8,
    /// `9`
    TopRight = 9,
}

impl Alignment {
    /// Alignment for a numpad digit
    #[must_use]
    pub const fn from_int(value: i64) -> Option<Self> {
        Some(match value {
            1 => Self::BottomLeft,
            2 => Self::BottomCenter,
            3 => Self::BottomRight,
            4 => Self::MiddleLeft,
            5 => Self::MiddleCenter,
            6 => Self::MiddleRight,
            7 => Self::TopLeft,
            8 => Self::TopCenter,
            9 => Self::TopRight,
            _ => return None,
        })
    }

    /// Numpad digit
    #[must_use]
    pub const fn as_int(self) -> u8 {
        self as u8
    }
}

/// Style column names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleAttr {
    /// Style name referenced by events
    Name,
    /// Font family
    Fontname,
    /// Font size in points
    Fontsize,
    /// Fill color
    PrimaryColour,
    /// Karaoke pre-highlight color
    SecondaryColour,
    /// Border color
    OutlineColour,
    /// Shadow color
    BackColour,
    /// Bold flag
    Bold,
    /// Italic flag
    Italic,
    /// Underline flag
    Underline,
    /// Strike-through flag
    StrikeOut,
    /// Horizontal scale in percent
    ScaleX,
    /// Vertical scale in percent
    ScaleY,
    /// Extra letter spacing in pixels
    Spacing,
    /// Rotation in degrees
    Angle,
    /// Border rendering mode
    BorderStyle,
    /// Border width
    Outline,
    /// Shadow depth
    Shadow,
    /// Numpad alignment
    Alignment,
    /// Left margin in pixels
    MarginL,
    /// Right margin in pixels
    MarginR,
    /// Vertical margin in pixels
    MarginV,
    /// Font character set
    Encoding,
}

impl Attribute for StyleAttr {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Fontname,
        Self::Fontsize,
        Self::PrimaryColour,
        Self::SecondaryColour,
        Self::OutlineColour,
        Self::BackColour,
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::StrikeOut,
        Self::ScaleX,
        Self::ScaleY,
        Self::Spacing,
        Self::Angle,
        Self::BorderStyle,
        Self::Outline,
        Self::Shadow,
        Self::Alignment,
        Self::MarginL,
        Self::MarginR,
        Self::MarginV,
        Self::Encoding,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Fontname => "Fontname",
            Self::Fontsize => "Fontsize",
            Self::PrimaryColour => "PrimaryColour",
            Self::SecondaryColour => "SecondaryColour",
            Self::OutlineColour => "OutlineColour",
            Self::BackColour => "BackColour",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::StrikeOut => "StrikeOut",
            Self::ScaleX => "ScaleX",
            Self::ScaleY => "ScaleY",
            Self::Spacing => "Spacing",
            Self::Angle => "Angle",
            Self::BorderStyle => "BorderStyle",
            Self::Outline => "Outline",
            Self::Shadow => "Shadow",
            Self::Alignment => "Alignment",
            Self::MarginL => "MarginL",
            Self::MarginR => "MarginR",
            Self::MarginV => "MarginV",
            Self::Encoding => "Encoding",
        }
    }
}

/// One `Style:` line
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StyleItem {
    /// Style name referenced by events
    pub name: Option<String>,
    /// Font family
    pub fontname: Option<String>,
    /// Font size in points
    pub fontsize: Option<f64>,
    /// Fill color
    pub primary_colour: Option<Color>,
    /// Karaoke pre-highlight color
    pub secondary_colour: Option<Color>,
    /// Border color
    pub outline_colour: Option<Color>,
    /// Shadow color
    pub back_colour: Option<Color>,
    /// Bold
    pub bold: Option<Toggle>,
    /// Italic
    pub italic: Option<Toggle>,
    /// Underline
    pub underline: Option<Toggle>,
    /// Strike-through
    pub strike_out: Option<Toggle>,
    /// Horizontal scale in percent
    pub scale_x: Option<f64>,
    /// Vertical scale in percent
    pub scale_y: Option<f64>,
    /// Extra letter spacing in pixels
    pub spacing: Option<f64>,
    /// Rotation in degrees
    pub angle: Option<f64>,
    /// Border rendering mode
    pub border_style: Option<BorderStyle>,
    /// Border width
    pub outline: Option<f64>,
    /// Shadow depth
    pub shadow: Option<f64>,
    /// Numpad alignment
    pub alignment: Option<Alignment>,
    /// Left margin in pixels
    pub margin_l: Option<i32>,
    /// Right margin in pixels
    pub margin_r: Option<i32>,
    /// Vertical margin in pixels
    pub margin_v: Option<i32>,
    /// Font character set
    pub encoding: Option<i32>,
}

impl StyleItem {
    /// The `Default` style new scripts start with
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ass_script::parser::ast::{Alignment, StyleItem};
    /// use ass_script::utils::Color;
    ///
    /// let style = StyleItem::default_style();
    /// assert_eq!(style.fontname.as_deref(), Some("Arial"));
    /// assert_eq!(style.primary_colour, Some(Color::WHITE));
    /// assert_eq!(style.alignment, Some(Alignment::BottomCenter));
    /// ```
    #[must_use]
    pub fn default_style() -> Self {
        Self {
            name: Some("Default".to_string()),
            fontname: Some("Arial".to_string()),
            fontsize: Some(20.0),
            primary_colour: Some(Color::WHITE),
            secondary_colour: Some(Color::from_raw(0x0000_00FF)),
            outline_colour: Some(Color::BLACK),
            back_colour: Some(Color::BLACK),
            bold: Some(Toggle::Disabled),
            italic: Some(Toggle::Disabled),
            underline: Some(Toggle::Disabled),
            strike_out: Some(Toggle::Disabled),
            scale_x: Some(100.0),
            scale_y: Some(100.0),
            spacing: Some(0.0),
            angle: Some(0.0),
            border_style: Some(BorderStyle::OutlineAndShadow),
            outline: Some(2.0),
            shadow: Some(2.0),
            alignment: Some(Alignment::BottomCenter),
            margin_l: Some(10),
            margin_r: Some(10),
            margin_v: Some(10),
            encoding: Some(1),
        }
    }
}

/// Decode an integer-coded enumeration into `slot`
///
/// Values the enumeration does not define store its default and report the
/// substitution.
fn decode_enum<T: Default>(
    slot: &mut Option<T>,
    raw: &str,
    from_int: fn(i64) -> Option<T>,
) -> Result<Decoded, CoreError> {
    let value: i64 = parse_numeric(raw)?;
    Ok(match from_int(value) {
        Some(decoded) => {
            *slot = Some(decoded);
            Decoded::Exact
        }
        None => {
            *slot = Some(T::default());
            Decoded::Substituted
        }
    })
}

impl Record for StyleItem {
    type Attr = StyleAttr;

    const NOUN: &'static str = "style";
    const DEFAULT_FORMAT: &'static [StyleAttr] = StyleAttr::ALL;

    fn classify(title: &str) -> Option<Self> {
        title.eq_ignore_ascii_case("Style").then(Self::default)
    }

    fn title(&self) -> &'static str {
        "Style"
    }

    fn decode_field(
        &mut self,
        attr: StyleAttr,
        raw: &str,
        _: &TagRegistry,
    ) -> Result<Decoded, CoreError> {
        match attr {
            StyleAttr::Name => self.name = Some(raw.to_string()),
            StyleAttr::Fontname => self.fontname = Some(raw.to_string()),
            StyleAttr::Fontsize => self.fontsize = Some(parse_numeric(raw)?),
            StyleAttr::PrimaryColour => self.primary_colour = Some(Color::parse(raw)?),
            StyleAttr::SecondaryColour => self.secondary_colour = Some(Color::parse(raw)?),
            StyleAttr::OutlineColour => self.outline_colour = Some(Color::parse(raw)?),
            StyleAttr::BackColour => self.back_colour = Some(Color::parse(raw)?),
            StyleAttr::Bold => return decode_enum(&mut self.bold, raw, Toggle::from_int),
            StyleAttr::Italic => return decode_enum(&mut self.italic, raw, Toggle::from_int),
            StyleAttr::Underline => {
                return decode_enum(&mut self.underline, raw, Toggle::from_int)
            }
            StyleAttr::StrikeOut => {
                return decode_enum(&mut self.strike_out, raw, Toggle::from_int)
            }
            StyleAttr::ScaleX => self.scale_x = Some(parse_numeric(raw)?),
            StyleAttr::ScaleY => self.scale_y = Some(parse_numeric(raw)?),
            StyleAttr::Spacing => self.spacing = Some(parse_numeric(raw)?),
            StyleAttr::Angle => self.angle = Some(parse_numeric(raw)?),
            StyleAttr::BorderStyle => {
                return decode_enum(&mut self.border_style, raw, BorderStyle::from_int)
            }
            StyleAttr::Outline => self.outline = Some(parse_numeric(raw)?),
            StyleAttr::Shadow => self.shadow = Some(parse_numeric(raw)?),
            StyleAttr::Alignment => {
                return decode_enum(&mut self.alignment, raw, Alignment::from_int)
            }
            StyleAttr::MarginL => self.margin_l = Some(parse_numeric(raw)?),
            StyleAttr::MarginR => self.margin_r = Some(parse_numeric(raw)?),
            StyleAttr::MarginV => self.margin_v = Some(parse_numeric(raw)?),
            StyleAttr::Encoding => self.encoding = Some(parse_numeric(raw)?),
        }
        Ok(Decoded::Exact)
    }

    fn encode_field(&self, attr: StyleAttr) -> Option<String> {
        match attr {
            StyleAttr::Name => self.name.clone(),
            StyleAttr::Fontname => self.fontname.clone(),
            StyleAttr::Fontsize => self.fontsize.map(format_real),
            StyleAttr::PrimaryColour => self.primary_colour.map(Color::to_ass_string),
            StyleAttr::SecondaryColour => self.secondary_colour.map(Color::to_ass_string),
            StyleAttr::OutlineColour => self.outline_colour.map(Color::to_ass_string),
            StyleAttr::BackColour => self.back_colour.map(Color::to_ass_string),
            StyleAttr::Bold => self.bold.map(|t| (t as i8).to_string()),
            StyleAttr::Italic => self.italic.map(|t| (t as i8).to_string()),
            StyleAttr::Underline => self.underline.map(|t| (t as i8).to_string()),
            StyleAttr::StrikeOut => self.strike_out.map(|t| (t as i8).to_string()),
            StyleAttr::ScaleX => self.scale_x.map(format_real),
            StyleAttr::ScaleY => self.scale_y.map(format_real),
            StyleAttr::Spacing => self.spacing.map(format_real),
            StyleAttr::Angle => self.angle.map(format_real),
            StyleAttr::BorderStyle => self.border_style.map(|b| (b as u8).to_string()),
            StyleAttr::Outline => self.outline.map(format_real),
            StyleAttr::Shadow => self.shadow.map(format_real),
            StyleAttr::Alignment => self.alignment.map(|a| a.as_int().to_string()),
            StyleAttr::MarginL => self.margin_l.map(|v| v.to_string()),
            StyleAttr::MarginR => self.margin_r.map(|v| v.to_string()),
            StyleAttr::MarginV => self.margin_v.map(|v| v.to_string()),
            StyleAttr::Encoding => self.encoding.map(|v| v.to_string()),
        }
    }
}

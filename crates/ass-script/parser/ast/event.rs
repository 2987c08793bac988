//! `[Events]` records
//!
//! Each event line is one of six kinds, named by its title. All kinds share
//! the same columns; the `Text` column is decoded into an [`OverrideText`].

use super::text::OverrideText;
use crate::parser::table::{Attribute, Decoded, Record};
use crate::plugin::TagRegistry;
use crate::utils::{parse_numeric, CoreError, Timestamp};
use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Event line kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum EventKind {
    /// Displayed subtitle
    #[default]
    Dialogue,
    /// Commented-out line, not displayed
    Comment,
    /// Displays an image
    Picture,
    /// Plays a sound file
    Sound,
    /// Plays a video file
    Movie,
    /// Runs a program
    Command,
}

impl EventKind {
    /// Every kind, in the order they are matched
    pub const ALL: [Self; 6] = [
        Self::Dialogue,
        Self::Comment,
        Self::Picture,
        Self::Sound,
        Self::Movie,
        Self::Command,
    ];

    /// Kind for a line title, ignoring ASCII case
    #[must_use]
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(title.trim()))
    }

    /// Line title
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dialogue => "Dialogue",
            Self::Comment => "Comment",
            Self::Picture => "Picture",
            Self::Sound => "Sound",
            Self::Movie => "Movie",
            Self::Command => "Command",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event column names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAttr {
    /// SSA marked flag
    Marked,
    /// Stacking layer
    Layer,
    /// Start time
    Start,
    /// End time
    End,
    /// Style name
    Style,
    /// Speaker name
    Name,
    /// Left margin override
    MarginL,
    /// Right margin override
    MarginR,
    /// Vertical margin override
    MarginV,
    /// Transition effect
    Effect,
    /// Displayed text with override codes
    Text,
}

impl Attribute for EventAttr {
    const ALL: &'static [Self] = &[
        Self::Marked,
        Self::Layer,
        Self::Start,
        Self::End,
        Self::Style,
        Self::Name,
        Self::MarginL,
        Self::MarginR,
        Self::MarginV,
        Self::Effect,
        Self::Text,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Marked => "Marked",
            Self::Layer => "Layer",
            Self::Start => "Start",
            Self::End => "End",
            Self::Style => "Style",
            Self::Name => "Name",
            Self::MarginL => "MarginL",
            Self::MarginR => "MarginR",
            Self::MarginV => "MarginV",
            Self::Effect => "Effect",
            Self::Text => "Text",
        }
    }
}

/// Canonical V4+ event columns; `Marked` belongs to the older V4 layout
const V4_PLUS_EVENT_FORMAT: &[EventAttr] = &[
    EventAttr::Layer,
    EventAttr::Start,
    EventAttr::End,
    EventAttr::Style,
    EventAttr::Name,
    EventAttr::MarginL,
    EventAttr::MarginR,
    EventAttr::MarginV,
    EventAttr::Effect,
    EventAttr::Text,
];

/// One event line
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EventItem {
    /// Line kind
    pub kind: EventKind,
    /// SSA marked flag
    pub marked: Option<i32>,
    /// Stacking layer, higher is drawn on top
    pub layer: Option<i32>,
    /// Start time
    pub start: Option<Timestamp>,
    /// End time
    pub end: Option<Timestamp>,
    /// Style name
    pub style: Option<String>,
    /// Speaker name
    pub name: Option<String>,
    /// Left margin, `0` keeps the style value
    pub margin_l: Option<i32>,
    /// Right margin, `0` keeps the style value
    pub margin_r: Option<i32>,
    /// Vertical margin, `0` keeps the style value
    pub margin_v: Option<i32>,
    /// Transition effect
    pub effect: Option<String>,
    /// Decoded text
    pub text: Option<OverrideText>,
}

impl EventItem {
    /// Empty event of the given kind
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Duration in milliseconds, when both ends are set and ordered
    #[must_use]
    pub fn duration_millis(&self) -> Option<u32> {
        let (start, end) = (self.start?, self.end?);
        end.as_millis().checked_sub(start.as_millis())
    }
}

impl Record for EventItem {
    type Attr = EventAttr;

    const NOUN: &'static str = "event";
    const DEFAULT_FORMAT: &'static [EventAttr] = V4_PLUS_EVENT_FORMAT;

    fn classify(title: &str) -> Option<Self> {
        EventKind::from_title(title).map(Self::new)
    }

    fn title(&self) -> &'static str {
        self.kind.as_str()
    }

    fn decode_field(
        &mut self,
        attr: EventAttr,
        raw: &str,
        registry: &TagRegistry,
    ) -> Result<Decoded, CoreError> {
        match attr {
            EventAttr::Marked => {
                // SSA v4 writes `Marked=0`
                let digits = raw.strip_prefix("Marked=").unwrap_or(raw);
                self.marked = Some(parse_numeric(digits)?);
            }
            EventAttr::Layer => self.layer = Some(parse_numeric(raw)?),
            EventAttr::Start => self.start = Some(Timestamp::parse(raw)?),
            EventAttr::End => self.end = Some(Timestamp::parse(raw)?),
            EventAttr::Style => self.style = Some(raw.to_string()),
            EventAttr::Name => self.name = Some(raw.to_string()),
            EventAttr::MarginL => self.margin_l = Some(parse_numeric(raw)?),
            EventAttr::MarginR => self.margin_r = Some(parse_numeric(raw)?),
            EventAttr::MarginV => self.margin_v = Some(parse_numeric(raw)?),
            EventAttr::Effect => self.effect = Some(raw.to_string()),
            EventAttr::Text => self.text = Some(OverrideText::parse_with(raw, registry)?),
        }
        Ok(Decoded::Exact)
    }

    fn encode_field(&self, attr: EventAttr) -> Option<String> {
        match attr {
            EventAttr::Marked => self.marked.map(|v| v.to_string()),
            EventAttr::Layer => self.layer.map(|v| v.to_string()),
            EventAttr::Start => self.start.map(|t| t.to_string()),
            EventAttr::End => self.end.map(|t| t.to_string()),
            EventAttr::Style => self.style.clone(),
            EventAttr::Name => self.name.clone(),
            EventAttr::MarginL => self.margin_l.map(|v| v.to_string()),
            EventAttr::MarginR => self.margin_r.map(|v| v.to_string()),
            EventAttr::MarginV => self.margin_v.map(|v| v.to_string()),
            EventAttr::Effect => self.effect.clone(),
            EventAttr::Text => self.text.as_ref().map(OverrideText::dump),
        }
    }

    fn keeps_whitespace(attr: EventAttr) -> bool {
        attr == EventAttr::Text
    }
}

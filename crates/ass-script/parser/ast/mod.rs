//! Document model for the three script sections
//!
//! [`ScriptInfo`] holds the metadata key/value pairs. [`StyleItem`] and
//! [`EventItem`] are the rows of the two declared-format tables, and
//! [`OverrideText`] is the decoded form of an event's `Text` column.

pub mod event;
pub mod script_info;
pub mod section;
pub mod style;
pub mod text;

pub use event::{EventAttr, EventItem, EventKind};
pub use script_info::{Collisions, InfoKey, ScaledBorderAndShadow, ScriptInfo, WrapStyle};
pub use section::{header_title, SectionType};
pub use style::{Alignment, BorderStyle, StyleAttr, StyleItem, Toggle};
pub use text::{OverrideText, TextElement};

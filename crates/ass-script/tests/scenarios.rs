//! End-to-end scenarios for the document parser and the override-tag engine.
//!
//! Each test drives the public API the way a host application would: raw
//! script text in, records and diagnostics out.

use ass_script::parser::ast::{Alignment, StyleItem, TextElement, Toggle};
use ass_script::parser::{FormatDeclaration, RecordTable};
use ass_script::plugin::tags::{alignment::ALIGN, font::FONT_SIZE, formatting};
use ass_script::plugin::{Directive, Value};
use ass_script::{Color, Document, IssueCategory, IssueSeverity, OverrideText, TagRegistry};

const STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// `xbord3.5` must resolve to the X border tag, not a shorter prefix
    #[test]
    fn test_xbord_resolves_to_x_border() {
        let directive = TagRegistry::standard().resolve("xbord3.5").unwrap();
        assert_eq!(directive.name(), "BorderX");
        assert_eq!(directive.get("size"), Some(&Value::Real(3.5)));
        assert_eq!(directive.to_string(), "\\xbord3.5");
    }

    /// `1c&HFF0000&` is a primary color with blue at full intensity
    #[test]
    fn test_numbered_color_tag() {
        let directive = TagRegistry::standard().resolve("1c&HFF0000&").unwrap();
        assert_eq!(directive.name(), "PrimaryColor");
        let Some(Value::Color(color)) = directive.get("color") else {
            panic!("expected a color argument, got {:?}", directive.args());
        };
        assert_eq!(*color, Color::from_raw(0x00FF_0000));
        assert_eq!(color.blue(), 0xFF);
        assert_eq!(directive.encode(), "1c&HFF0000&");
    }

    /// Consecutive directives are written inside one brace group
    #[test]
    fn test_bold_italic_hello() {
        let text = OverrideText::from_elements([
            TextElement::Directive(Directive::with_values(&formatting::BOLD, [Value::Int(1)]).unwrap()),
            TextElement::Directive(
                Directive::with_values(&formatting::ITALIC, [Value::Int(1)]).unwrap(),
            ),
            TextElement::Literal("hello".to_string()),
        ]);
        assert_eq!(text.dump(), "{\\b1\\i1}hello");
    }

    /// The Text column takes everything after the ninth comma
    #[test]
    fn test_text_column_bounded_split() {
        let script = "[Events]\n\
            Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n\
            Dialogue: 0,0:00:00.00,0:00:02.00,Default,,0,0,0,,one, two,three ,\n";
        let (document, issues) = Document::parse(script);
        assert!(issues.is_empty(), "{issues:?}");
        let text = document.events.items()[0].text.as_ref().unwrap();
        assert_eq!(text.plain_text(), "one, two,three ,");
    }

    /// A shadowless default style line decodes into its documented values
    #[test]
    fn test_default_style_line() {
        let script = format!(
            "[V4+ Styles]\n{STYLE_FORMAT}\nStyle: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1\n"
        );
        let (document, issues) = Document::parse(&script);
        assert!(issues.is_empty(), "{issues:?}");

        let style = &document.styles.items()[0];
        assert_eq!(style.fontname.as_deref(), Some("Arial"));
        assert_eq!(style.fontsize, Some(20.0));
        assert_eq!(style.primary_colour, Some(Color::WHITE));
        assert_eq!(style.alignment, Some(Alignment::BottomCenter));
        assert_eq!(style.bold, Some(Toggle::Disabled));
        assert_eq!(style.shadow, Some(0.0));
        assert_eq!(
            *style,
            StyleItem {
                shadow: Some(0.0),
                ..StyleItem::default_style()
            }
        );
    }

    /// Undefined enumeration values fall back to defaults but are reported
    #[test]
    fn test_out_of_range_style_values_are_reported() {
        let script = "[V4+ Styles]\n\
            Format: Name, Bold, BorderStyle, Alignment\n\
            Style: A,700,2,12\n";
        let (document, issues) = Document::parse(script);
        assert_eq!(issues.len(), 3, "{issues:?}");
        assert!(issues.iter().all(|issue| {
            issue.severity == IssueSeverity::Warning && issue.category == IssueCategory::Value
        }));
        assert_eq!(issues[0].line, Some(3));
        assert!(issues[2].message.contains("`12`"));
        assert!(issues[2].message.contains("`Alignment`"));

        let (dumped, dump_issues) = document.dump();
        assert!(dump_issues.is_empty());
        assert!(dumped.contains(&"Style: A,-1,1,5".to_string()));
    }

    /// Alignment and size codes decode and re-serialize unchanged
    #[test]
    fn test_an8_fs30_round_trip() {
        let source = "{\\an8\\fs30}Hello, world!";
        let text = OverrideText::parse(source).unwrap();
        assert_eq!(
            text.elements(),
            [
                TextElement::Directive(Directive::with_values(&ALIGN, [Value::Int(8)]).unwrap()),
                TextElement::Directive(
                    Directive::with_values(&FONT_SIZE, [Value::Real(30.0)]).unwrap()
                ),
                TextElement::Literal("Hello, world!".to_string()),
            ]
        );
        assert_eq!(text.dump(), source);
        let align = text.directives().next().unwrap();
        assert_eq!(align.get("side"), Some(&Value::Int(8)));
    }

    /// An unknown Format attribute is one schema error and changes nothing
    #[test]
    fn test_unknown_format_attribute() {
        let mut table: RecordTable<StyleItem> = RecordTable::new();
        assert!(table
            .parse_line("Format: Name, Fontname", TagRegistry::standard())
            .is_empty());
        let before = table.format().cloned();

        let issues = table.parse_line("Format: Name, Fontname, Sparkle", TagRegistry::standard());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::Schema);
        assert_eq!(issues[0].severity, IssueSeverity::Error);
        assert_eq!(table.format().cloned(), before);
        assert_eq!(
            table.format().map(FormatDeclaration::len),
            Some(2),
            "declaration must keep its two columns"
        );
    }

    /// Diagnostics from every section are concatenated in source order
    #[test]
    fn test_diagnostics_are_collected_not_fatal() {
        let script = "[Script Info]\n\
            PlayResX: wide\n\
            [V4+ Styles]\n\
            Style: NoFormatYet\n\
            [Events]\n\
            Format: Start, End, Text\n\
            Dialogue: 0:00:00.00,0:00:01.00,{\\nope}x\n\
            Dialogue: 0:00:01.00,0:00:02.00,fine\n";
        let (document, issues) = Document::parse(script);
        let summary: Vec<(Option<usize>, IssueCategory)> =
            issues.iter().map(|i| (i.line, i.category)).collect();
        assert_eq!(
            summary,
            [
                (Some(2), IssueCategory::Value),
                (Some(4), IssueCategory::Schema),
                (Some(7), IssueCategory::Schema),
            ]
        );
        assert!(document.styles.is_empty());
        assert_eq!(document.events.len(), 2);
        assert_eq!(
            document.events.items()[1]
                .text
                .as_ref()
                .map(OverrideText::plain_text)
                .as_deref(),
            Some("fine")
        );
    }

    /// Issues render the way a CLI would print them
    #[test]
    fn test_issue_display() {
        let (_, issues) = Document::parse("[Events]\nDialogue: x\n");
        assert_eq!(issues.len(), 1);
        let shown = issues[0].format_for_display();
        assert!(shown.starts_with("error: schema at line 2:"), "{shown}");
    }
}

//! Parse and dump throughput benchmarks
//!
//! Scripts are generated in memory at three levels of override-tag density
//! so the cost of the text engine can be told apart from the table code.

use ass_script::{Document, OverrideText};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write;

/// How much markup each generated event carries
#[derive(Debug, Clone, Copy)]
enum Markup {
    /// Plain dialogue
    Plain,
    /// A few formatting groups per line
    Tagged,
    /// Positioned, colored karaoke
    Karaoke,
}

impl Markup {
    const ALL: [Self; 3] = [Self::Plain, Self::Tagged, Self::Karaoke];

    const fn label(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Tagged => "tagged",
            Self::Karaoke => "karaoke",
        }
    }

    fn text(self, index: usize) -> String {
        let line = format!("Line number {}, spoken aloud", index + 1);
        match self {
            Self::Plain => line,
            Self::Tagged => format!(r"{{\b1}}{line}{{\b0}} with {{\i1}}some{{\i0}} emphasis\Nand a break"),
            Self::Karaoke => format!(
                r"{{\an8\pos(960,80)\1c&H00FF00&\bord2.5\shad1\fad(200,200)}}{{\k25}}{line} {{\kf40}}sung {{\ko30}}here"
            ),
        }
    }
}

/// Generate a complete script with `events` dialogue lines
fn generate_script(events: usize, markup: Markup) -> String {
    let mut script = String::with_capacity(600 + events * 160);
    script.push_str(
        "[Script Info]\n\
        Title: Benchmark\n\
        PlayResX: 1920\n\
        PlayResY: 1080\n\n\
        [V4+ Styles]\n\
        Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n\
        Style: Default,Arial,48,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1\n\n\
        [Events]\n\
        Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n",
    );

    for index in 0..events {
        let start = index * 300;
        let end = start + 250;
        let _ = writeln!(
            script,
            "Dialogue: 0,{},{},Default,,0,0,0,,{}",
            format_centis(start),
            format_centis(end),
            markup.text(index)
        );
    }
    script
}

fn format_centis(centis: usize) -> String {
    let (hours, rest) = (centis / 360_000, centis % 360_000);
    let (minutes, rest) = (rest / 6_000, rest % 6_000);
    format!("{hours}:{minutes:02}:{:02}.{:02}", rest / 100, rest % 100)
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for events in [10, 100, 1000] {
        for markup in Markup::ALL {
            let script = generate_script(events, markup);
            group.throughput(Throughput::Bytes(script.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(markup.label(), events),
                &script,
                |b, script| b.iter(|| black_box(Document::parse(black_box(script)))),
            );
        }
    }
    group.finish();
}

fn bench_dumping(c: &mut Criterion) {
    let mut group = c.benchmark_group("dump");
    for events in [10, 100, 1000] {
        for markup in Markup::ALL {
            let (document, _) = Document::parse(&generate_script(events, markup));
            group.bench_with_input(
                BenchmarkId::new(markup.label(), events),
                &document,
                |b, document| b.iter(|| black_box(document.dump_string())),
            );
        }
    }
    group.finish();
}

fn bench_override_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("override_text");
    for markup in Markup::ALL {
        let text = markup.text(0);
        group.bench_with_input(BenchmarkId::new("parse", markup.label()), &text, |b, text| {
            b.iter(|| black_box(OverrideText::parse(black_box(text))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parsing, bench_dumping, bench_override_text);
criterion_main!(benches);

//! Fancy diagnostics support using `ariadne`.
//!
//! Parse warnings carry a 1-based line number; this module maps that line
//! back to a byte span of the source text and renders a labeled report, so
//! tools can show the offending line instead of a bare message.
//!
//! # Usage Example
//!
//! ```rust
//! use osu_rs::{diagnostics::emit_beatmap_warnings, parse_beatmap};
//!
//! let source = "osu file format v14\nAudioLeadIn: banana\n";
//! let output = parse_beatmap(source).expect("version header is valid");
//!
//! // Render every warning against the source text.
//! emit_beatmap_warnings("chart.osu", source, &output.warnings);
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::parse::ParseWarning;

/// Simple source container that holds the filename and source text.
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Creates a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Gets the source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Gets the source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting line-numbered warnings to [`ariadne::Report`].
pub trait ToAriadne {
    /// Converts the warning to an ariadne report spanning its source line.
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

impl ToAriadne for ParseWarning {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let span = line_span(src.text(), self.line());
        Report::build(
            ReportKind::Warning,
            (src.name().to_owned(), span.clone()),
        )
        .with_message(self.to_string())
        .with_label(
            Label::new((src.name().to_owned(), span))
                .with_message("this line decoded with a fallback value")
                .with_color(Color::Yellow),
        )
        .finish()
    }
}

/// Convenience method: batch render a [`ParseWarning`] list to stderr-style
/// terminal output.
pub fn emit_beatmap_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a ParseWarning>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for warning in warnings {
        let report = warning.to_report(&simple);
        let _ = report.print((name.to_owned(), ariadne_source.clone()));
    }
}

/// The byte range of a 1-based line within `text`, without its newline.
fn line_span(text: &str, line: usize) -> std::ops::Range<usize> {
    let mut start = 0;
    for (index, content) in text.split('\n').enumerate() {
        let end = start + content.len();
        if index + 1 == line {
            return start..end;
        }
        start = end + 1;
    }
    text.len()..text.len()
}

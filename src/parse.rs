//! The section-dispatching line parser.
//!
//! Raw text goes through a single pass: the mandatory version header first,
//! then every line is trimmed, classified (blank, comment, section header or
//! content) and handed to the decoder of the current section. All decoders
//! write into one mutable parser state carrying the document in progress and
//! the warning log, so a malformed field never aborts anything beyond
//! itself.

mod events;
mod fields;
mod hit_object;
mod scalar;
mod timing_point;

use thiserror::Error;

use crate::{
    BeatmapOutput, ParseError,
    model::Beatmap,
};

/// A non-fatal problem encountered while decoding a field or record.
///
/// The decoder that hit the problem substituted a zero value and carried on;
/// the warning records where and why. `Display` renders the documented shape
/// `Line <n>: Error Parsing <label>: <detail>` with 1-based line numbers.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseWarning {
    /// An integer field failed to decode; 0 was stored instead.
    #[error("Line {line}: Error Parsing {field}: {message}")]
    InvalidInteger {
        /// The 1-based source line.
        line: usize,
        /// The key or context label of the field.
        field: String,
        /// The underlying decode error.
        message: String,
    },
    /// A decimal field failed to decode; 0.0 was stored instead.
    #[error("Line {line}: Error Parsing {field}: {message}")]
    InvalidDecimal {
        /// The 1-based source line.
        line: usize,
        /// The key or context label of the field.
        field: String,
        /// The underlying decode error.
        message: String,
    },
    /// A timing point line had fewer than two comma fields; no record was
    /// stored for it.
    #[error("Line {line}: Error Parsing [TimingPoints]: Incorrect formatting of timing point.")]
    MalformedTimingPoint {
        /// The 1-based source line.
        line: usize,
    },
}

impl ParseWarning {
    /// The 1-based source line the warning refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidInteger { line, .. }
            | Self::InvalidDecimal { line, .. }
            | Self::MalformedTimingPoint { line } => *line,
        }
    }
}

/// Characters stripped from both ends of every line before classification.
const LINE_PADDING: &[char] = &['\t', '\r', ' '];

/// The mandatory first-line prefix.
const VERSION_PREFIX: &str = "osu file format v";

/// Which section the current line belongs to.
///
/// `[General]` is conventionally the first section, so it doubles as the
/// initial state; content seen before any header is decoded under it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Section {
    #[default]
    General,
    Editor,
    Metadata,
    Difficulty,
    Events,
    TimingPoints,
    HitObjects,
}

impl Section {
    /// Recognizes a section header line. Bracketed lines that are not one of
    /// the seven known headers return `None` and fall through to the current
    /// section's decoder.
    fn from_header(line: &str) -> Option<Self> {
        match line {
            "[General]" => Some(Self::General),
            "[Editor]" => Some(Self::Editor),
            "[Metadata]" => Some(Self::Metadata),
            "[Difficulty]" => Some(Self::Difficulty),
            "[Events]" => Some(Self::Events),
            "[TimingPoints]" => Some(Self::TimingPoints),
            "[HitObjects]" => Some(Self::HitObjects),
            _ => None,
        }
    }
}

/// The mutable state threaded through every decoder: the document in
/// progress, the warning log and the section cursor.
pub(crate) struct Parser {
    pub(crate) beatmap: Beatmap,
    pub(crate) warnings: Vec<ParseWarning>,
    section: Section,
}

impl Parser {
    fn new(version: i32) -> Self {
        Self {
            beatmap: Beatmap::new(version),
            warnings: Vec::new(),
            section: Section::default(),
        }
    }

    fn consume_line(&mut self, number: usize, line: &str) {
        if line.is_empty() || line.starts_with("//") {
            return;
        }
        if let Some(section) = Section::from_header(line) {
            self.section = section;
            return;
        }
        match self.section {
            Section::General => {
                let (key, value) = split_key_value(line);
                self.general_line(number, key, value);
            }
            Section::Editor => {
                let (key, value) = split_key_value(line);
                self.editor_line(number, key, value);
            }
            Section::Metadata => {
                let (key, value) = split_key_value(line);
                self.metadata_line(number, key, value);
            }
            Section::Difficulty => {
                let (key, value) = split_key_value(line);
                self.difficulty_line(number, key, value);
            }
            Section::Events => self.event_line(number, line),
            Section::TimingPoints => self.timing_point_line(number, line),
            Section::HitObjects => self.hit_object_line(number, line),
        }
    }

    fn finish(self) -> BeatmapOutput {
        BeatmapOutput {
            beatmap: self.beatmap,
            warnings: self.warnings,
        }
    }
}

/// Splits a scalar-section line at the first colon; the value is the whole
/// trimmed remainder. A line without a colon is all key.
fn split_key_value(line: &str) -> (&str, &str) {
    match line.split_once(':') {
        Some((key, value)) => (key, value.trim()),
        None => (line, ""),
    }
}

fn parse_version(header: &str) -> Result<i32, ParseError> {
    if header.is_empty() {
        return Err(ParseError::MissingHeader);
    }
    let version = header.strip_prefix(VERSION_PREFIX).unwrap_or(header);
    match version.parse::<i64>() {
        Ok(parsed) => Ok(parsed as i32),
        Err(err) => Err(ParseError::InvalidVersion {
            version: version.to_owned(),
            message: err.to_string(),
        }),
    }
}

/// Runs the single-pass parse over the whole source text.
pub(crate) fn parse_source(source: &str) -> Result<BeatmapOutput, ParseError> {
    let mut lines = source.split('\n');
    let header = lines.next().unwrap_or("").trim_matches(LINE_PADDING);
    let version = parse_version(header)?;

    let mut parser = Parser::new(version);
    for (index, raw) in lines.enumerate() {
        // The header was line 1, so content lines number from 2.
        parser.consume_line(index + 2, raw.trim_matches(LINE_PADDING));
    }
    Ok(parser.finish())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn headers_switch_sections() {
        assert_eq!(Section::from_header("[General]"), Some(Section::General));
        assert_eq!(Section::from_header("[HitObjects]"), Some(Section::HitObjects));
        assert_eq!(Section::from_header("[Colours]"), None);
        assert_eq!(Section::from_header("General"), None);
    }

    #[test]
    fn key_value_splits_at_first_colon() {
        assert_eq!(split_key_value("Title:A:B"), ("Title", "A:B"));
        assert_eq!(split_key_value("Title:  spaced  "), ("Title", "spaced"));
        assert_eq!(split_key_value("NoColon"), ("NoColon", ""));
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let output = parse_source("osu file format v14\n\n   \t\n// Mode: 3\n").expect("must parse");
        assert_eq!(output.warnings, vec![]);
        assert_eq!(output.beatmap, Beatmap::new(14));
    }

    #[test]
    fn unknown_bracket_lines_fall_through_to_the_section() {
        // `[Colours]` is not a known header; as a General line it carries no
        // known key and is ignored without a warning.
        let output = parse_source("osu file format v14\n[Colours]\nCombo1 : 255,128,0\n")
            .expect("must parse");
        assert_eq!(output.warnings, vec![]);
    }

    #[test]
    fn version_prefix_is_optional_around_the_integer() {
        // A bare integer first line decodes as the version, matching the
        // lenient prefix strip.
        assert_eq!(parse_version("14"), Ok(14));
        assert_eq!(parse_version("osu file format v128"), Ok(128));
        assert!(parse_version("osu file format v").is_err());
    }

    #[test]
    fn warning_display_shape() {
        let warning = ParseWarning::InvalidInteger {
            line: 3,
            field: "AudioLeadIn".into(),
            message: "invalid digit found in string".into(),
        };
        assert_eq!(
            warning.to_string(),
            "Line 3: Error Parsing AudioLeadIn: invalid digit found in string"
        );
        let malformed = ParseWarning::MalformedTimingPoint { line: 7 };
        assert_eq!(
            malformed.to_string(),
            "Line 7: Error Parsing [TimingPoints]: Incorrect formatting of timing point."
        );
        assert_eq!(malformed.line(), 7);
    }
}

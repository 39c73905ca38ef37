//! The osu! beatmap (.osu) format parser.
//!
//! The `.osu` format is a line-oriented, section-structured text format that
//! describes one rhythm-game chart: bracketed section headers followed by
//! `key: value` attributes or comma-delimited records. The format has drifted
//! for decades with no formal grammar, so this parser is built to tolerate it:
//! every field decodes best-effort, and problems are collected as warnings
//! instead of aborting the parse.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input).
//! - The only fatal condition is a missing or non-numeric `osu file format v`
//!   header; everything after it degrades field-by-field.
//! - A malformed numeric field yields a warning and a zero value, never an
//!   error. Callers inspect [`BeatmapOutput::warnings`] to learn which fields
//!   are approximate.
//! - Do not validate chart plausibility (chronological hit object order,
//!   slider curve geometry) and do not compute derived timing (BPM, star
//!   rating).
//! - Do not support writing back into the `.osu` text format.
//!
//! # Example
//!
//! ```
//! use osu_rs::{parse_beatmap, BeatmapOutput};
//!
//! let source = "osu file format v14\n[Metadata]\nTitle:Tutorial\n";
//! let BeatmapOutput { beatmap, warnings } = parse_beatmap(source)?;
//! assert_eq!(beatmap.version, 14);
//! assert_eq!(beatmap.metadata.title, "Tutorial");
//! assert!(warnings.is_empty());
//! # Ok::<(), osu_rs::ParseError>(())
//! ```

pub mod command;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod model;
pub mod parse;
pub mod prelude;

use std::path::Path;

use thiserror::Error;

use self::{model::Beatmap, parse::ParseWarning};

/// An error that aborts the whole parse.
///
/// The version header is the only construct the parser refuses to live
/// without; every other malformed line degrades into a [`ParseWarning`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    /// The first line was empty, so there is no version header to read.
    #[error("missing `osu file format v` header")]
    MissingHeader,
    /// The version header did not end in a base-10 integer.
    #[error("invalid format version `{version}`: {message}")]
    InvalidVersion {
        /// The header remainder that failed to parse.
        version: String,
        /// The underlying integer decode error.
        message: String,
    },
}

/// An error occurred when loading a beatmap from the filesystem.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the file failed, or its bytes were not valid UTF-8.
    #[error("failed to read beatmap file: {0}")]
    Io(#[from] std::io::Error),
    /// The text was read but its version header could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Output of parsing a beatmap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct BeatmapOutput {
    /// The parsed beatmap data.
    pub beatmap: Beatmap,
    /// Warnings that occurred during parsing, in source order.
    pub warnings: Vec<ParseWarning>,
}

/// Parses a beatmap from source text.
///
/// # Errors
///
/// Returns [`ParseError`] when the mandatory version header on the first line
/// is missing or not an integer. No partial beatmap is produced in that case.
pub fn parse_beatmap(source: &str) -> Result<BeatmapOutput, ParseError> {
    parse::parse_source(source)
}

/// Reads a `.osu` file and parses it with [`parse_beatmap`].
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read as UTF-8 text, and
/// [`LoadError::Parse`] when its version header is invalid.
pub fn parse_beatmap_file(path: impl AsRef<Path>) -> Result<BeatmapOutput, LoadError> {
    let source = std::fs::read_to_string(path)?;
    Ok(parse_beatmap(&source)?)
}

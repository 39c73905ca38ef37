//! Prelude module for the crate.
//!
//! This module re-exports the whole public surface for convenient access.
//! You can use `use osu_rs::prelude::*;` to import everything at once.

pub use crate::{
    BeatmapOutput, LoadError, ParseError,
    command::{
        CurveType, CustomSampleSet, EventKind, HitSound, PlayMode, Position, SampleSet,
        TimeSignature, TimingPointFlag,
    },
    model::{
        Beatmap, Difficulty, Editor, Event, General, HitObject, HitObjectKind, HitSample,
        Metadata, Slider, TimingPoint,
    },
    parse::ParseWarning,
    parse_beatmap, parse_beatmap_file,
};

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_beatmap_warnings};

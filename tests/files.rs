//! Loading charts through the filesystem entry point.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use osu_rs::{LoadError, parse_beatmap_file, prelude::*};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/files")
        .join(name)
}

#[test]
fn loads_a_chart_from_disk() {
    let BeatmapOutput { beatmap, warnings } =
        parse_beatmap_file(fixture("tutorial.osu")).expect("fixture must load");
    assert_eq!(warnings, vec![]);

    assert_eq!(beatmap.version, 12);
    assert_eq!(beatmap.general.audio_filename, "tutorial.mp3");
    assert_eq!(beatmap.general.mode, PlayMode::Mania);
    // Version 12 floors fractional difficulty values.
    assert_eq!(beatmap.difficulty.hp_drain_rate, 3.0);
    assert_eq!(beatmap.difficulty.overall_difficulty, 2.0);
    assert_eq!(beatmap.difficulty.slider_multiplier, 1.4);

    assert_eq!(beatmap.timing_points.len(), 2);
    // The full-arity point defaults to Normal; the minimal 2-field point
    // inherits the Drum set configured in `[General]`.
    assert_eq!(beatmap.timing_points[0].sample_set, SampleSet::Normal);
    assert_eq!(beatmap.timing_points[1].sample_set, SampleSet::Drum);
    assert_eq!(beatmap.timing_points[1].volume, 100);

    assert_eq!(beatmap.circle_count(), 2);
    assert_eq!(beatmap.hold_count(), 1);
}

#[test]
fn missing_files_surface_the_io_error() {
    let err = parse_beatmap_file(fixture("missing.osu")).expect_err("must fail");
    assert!(matches!(err, LoadError::Io(_)));
}

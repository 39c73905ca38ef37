//! Decoders for the `key: value` sections: `[General]`, `[Editor]`,
//! `[Metadata]` and `[Difficulty]`.
//!
//! Unknown keys are ignored without a warning — the format grew keys for two
//! decades and old readers were expected to skip what they did not know.
//! Boolean attributes are true only for the literal value `1`. A repeated
//! key overwrites the earlier occurrence.

use crate::command::{PlayMode, SampleSet};

use super::Parser;

impl Parser {
    pub(crate) fn general_line(&mut self, line: usize, key: &str, value: &str) {
        match key {
            "AudioFilename" => self.beatmap.general.audio_filename = value.to_owned(),
            "AudioLeadIn" => {
                self.beatmap.general.audio_lead_in = self.read_integer(line, key, value);
            }
            "AudioHash" => self.beatmap.general.audio_hash = value.to_owned(),
            "PreviewTime" => {
                self.beatmap.general.preview_time = self.read_integer(line, key, value);
            }
            "Countdown" => self.beatmap.general.countdown = self.read_integer(line, key, value),
            "CountdownOffset" => {
                self.beatmap.general.countdown_offset = self.read_integer(line, key, value);
            }
            "SampleSet" => {
                if let Some(set) = SampleSet::from_name(value) {
                    self.beatmap.general.sample_set = set;
                }
            }
            "SampleVolume" => {
                self.beatmap.general.sample_volume = self.read_integer(line, key, value);
            }
            "StackLeniency" => {
                self.beatmap.general.stack_leniency = self.read_decimal(line, key, value);
            }
            "Mode" => {
                if let Some(mode) = PlayMode::from_token(value) {
                    self.beatmap.general.mode = mode;
                }
            }
            "LetterboxInBreaks" => self.beatmap.general.letterbox_in_breaks = value == "1",
            "WidescreenStoryboard" => self.beatmap.general.widescreen_storyboard = value == "1",
            "AlwaysShowPlayfield" => self.beatmap.general.always_show_playfield = value == "1",
            "EpilepsyWarning" => self.beatmap.general.epilepsy_warning = value == "1",
            "SamplesMatchPlaybackRate" => {
                self.beatmap.general.samples_match_playback_rate = value == "1";
            }
            "SkinPreference" => self.beatmap.general.skin_preference = value.to_owned(),
            "TimelineZoom" => {
                self.beatmap.general.timeline_zoom = self.read_decimal(line, key, value);
            }
            _ => {}
        }
    }

    pub(crate) fn editor_line(&mut self, line: usize, key: &str, value: &str) {
        match key {
            "DistanceSpacing" => {
                self.beatmap.editor.distance_spacing = self.read_decimal(line, key, value);
            }
            "BeatDivisor" => self.beatmap.editor.beat_divisor = self.read_integer(line, key, value),
            "GridSize" => self.beatmap.editor.grid_size = self.read_integer(line, key, value),
            "TimelineZoom" => {
                self.beatmap.editor.timeline_zoom = self.read_decimal(line, key, value);
            }
            _ => {}
        }
    }

    pub(crate) fn metadata_line(&mut self, line: usize, key: &str, value: &str) {
        match key {
            "Title" => self.beatmap.metadata.title = value.to_owned(),
            "TitleUnicode" => self.beatmap.metadata.title_unicode = value.to_owned(),
            "Artist" => self.beatmap.metadata.artist = value.to_owned(),
            "ArtistUnicode" => self.beatmap.metadata.artist_unicode = value.to_owned(),
            "Creator" => self.beatmap.metadata.creator = value.to_owned(),
            "Version" => self.beatmap.metadata.version = value.to_owned(),
            "Source" => self.beatmap.metadata.source = value.to_owned(),
            "Tags" => self.beatmap.metadata.tags = value.to_owned(),
            "BeatmapID" => {
                self.beatmap.metadata.beatmap_id = self.read_integer(line, key, value);
            }
            "BeatmapSetID" => {
                self.beatmap.metadata.beatmap_set_id = self.read_integer(line, key, value);
            }
            _ => {}
        }
    }

    pub(crate) fn difficulty_line(&mut self, line: usize, key: &str, value: &str) {
        // Version 13 introduced decimal difficulty values; older files only
        // ever stored whole numbers, so their values are floored. The value
        // is decoded once up front regardless of the key.
        let parsed = self.read_decimal(line, key, value);
        let gated = if self.beatmap.version < 13 {
            parsed.floor()
        } else {
            parsed
        };

        match key {
            "HPDrainRate" => self.beatmap.difficulty.hp_drain_rate = gated,
            "CircleSize" => self.beatmap.difficulty.circle_size = gated,
            "OverallDifficulty" => self.beatmap.difficulty.overall_difficulty = gated,
            "ApproachRate" => self.beatmap.difficulty.approach_rate = gated,
            // The slider fields were never version-gated; they go through
            // the plain decoder like any other decimal.
            "SliderMultiplier" => {
                self.beatmap.difficulty.slider_multiplier = self.read_decimal(line, key, value);
            }
            "SliderTickRate" => {
                self.beatmap.difficulty.slider_tick_rate = self.read_decimal(line, key, value);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{BeatmapOutput, command::PlayMode, parse_beatmap};

    fn parse_ok(source: &str) -> BeatmapOutput {
        parse_beatmap(source).expect("must parse")
    }

    #[test]
    fn mode_token_map() {
        let output = parse_ok("osu file format v14\nMode: 3\n");
        assert_eq!(output.beatmap.general.mode, PlayMode::Mania);

        let output = parse_ok("osu file format v14\nMode: 9\n");
        assert_eq!(output.beatmap.general.mode, PlayMode::Osu);
        assert_eq!(output.warnings, vec![]);
    }

    #[test]
    fn booleans_require_the_literal_one() {
        let output = parse_ok(
            "osu file format v14\nLetterboxInBreaks: 1\nWidescreenStoryboard: true\nEpilepsyWarning: 0\n",
        );
        assert!(output.beatmap.general.letterbox_in_breaks);
        assert!(!output.beatmap.general.widescreen_storyboard);
        assert!(!output.beatmap.general.epilepsy_warning);
    }

    #[test]
    fn repeated_keys_last_occurrence_wins() {
        let output = parse_ok("osu file format v14\n[Metadata]\nTitle:First\nTitle:Second\n");
        assert_eq!(output.beatmap.metadata.title, "Second");
    }

    #[test]
    fn old_versions_floor_difficulty_values() {
        let source = "osu file format v12\n[Difficulty]\nCircleSize:5.7\nSliderMultiplier:1.7\n";
        let output = parse_ok(source);
        assert_eq!(output.beatmap.difficulty.circle_size, 5.0);
        // Slider fields stay unfloored even below version 13.
        assert_eq!(output.beatmap.difficulty.slider_multiplier, 1.7);

        let source = "osu file format v13\n[Difficulty]\nCircleSize:5.7\n";
        let output = parse_ok(source);
        assert_eq!(output.beatmap.difficulty.circle_size, 5.7);
    }

    #[test]
    fn difficulty_warns_even_for_unknown_keys() {
        // The one-shot value decode runs before key dispatch, so a malformed
        // value on a key nobody stores still leaves a trace.
        let output = parse_ok("osu file format v14\n[Difficulty]\nMystery:abc\n");
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(
            output.warnings[0].to_string(),
            "Line 3: Error Parsing Mystery: invalid float literal"
        );
    }

    #[test]
    fn unknown_keys_elsewhere_are_silent() {
        let output = parse_ok("osu file format v14\n[Metadata]\nMystery:abc\n");
        assert_eq!(output.warnings, vec![]);
    }

    #[test]
    fn values_keep_everything_after_the_first_colon() {
        let output = parse_ok("osu file format v14\n[Metadata]\nSource:https://example.com\n");
        assert_eq!(output.beatmap.metadata.source, "https://example.com");
    }
}

use crate::command::{PlayMode, SampleSet};

/// The `[General]` section: audio, presentation and mode attributes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct General {
    /// The audio file path, relative to the beatmap directory.
    pub audio_filename: String,
    /// Milliseconds of silence before the audio starts.
    pub audio_lead_in: i32,
    /// The deprecated audio file hash.
    pub audio_hash: String,
    /// The song-select preview start time in milliseconds.
    pub preview_time: i32,
    /// The countdown speed before the first object.
    pub countdown: i32,
    /// Countdown offset in beats.
    pub countdown_offset: i32,
    /// The default sample set for the whole chart.
    pub sample_set: SampleSet,
    /// The deprecated global sample volume.
    pub sample_volume: i32,
    /// How aggressively overlapping objects stack, 0 to 1.
    pub stack_leniency: f64,
    /// The play mode the chart is built for.
    pub mode: PlayMode,
    /// Whether breaks are letterboxed.
    pub letterbox_in_breaks: bool,
    /// Whether the storyboard targets a widescreen aspect.
    pub widescreen_storyboard: bool,
    /// Whether the playfield stays visible under the storyboard.
    pub always_show_playfield: bool,
    /// Whether the chart shows an epilepsy warning.
    pub epilepsy_warning: bool,
    /// Whether sample playback rate follows the music rate.
    pub samples_match_playback_rate: bool,
    /// The preferred skin name.
    pub skin_preference: String,
    /// The deprecated editor timeline zoom stored in this section.
    pub timeline_zoom: f64,
}

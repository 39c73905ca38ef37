use crate::command::{CurveType, CustomSampleSet, HitSound, Position, SampleSet};

/// A timed interactive element of the chart.
///
/// All four kinds share the prefix fields below; everything kind-specific
/// lives in [`HitObjectKind`]. Objects are stored exactly in file order with
/// no monotonicity check.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    /// The playfield position.
    pub position: Position,
    /// The hit time in milliseconds.
    pub time: f64,
    /// Whether this object starts a new combo.
    pub new_combo: bool,
    /// How many combo colors to skip when a new combo starts, 0 to 7.
    pub combo_color_offset: u8,
    /// The shared hit sound flags.
    pub hit_sound: HitSound,
    /// The per-object sample overrides.
    pub sample: HitSample,
    /// The kind-specific payload.
    pub kind: HitObjectKind,
}

/// The kind-specific payload of a hit object.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObjectKind {
    /// A single tap.
    #[default]
    Circle,
    /// A tap followed along a path.
    Slider(Slider),
    /// A sustained spin.
    Spinner {
        /// When the spin ends, in milliseconds.
        end_time: i32,
    },
    /// A sustained key press (mania mode only).
    Hold {
        /// When the press ends, in milliseconds.
        end_time: i32,
    },
}

/// The path and per-edge sound data of a slider.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slider {
    /// The curve interpretation of the control points.
    pub curve: CurveType,
    /// The control points after the head position, in file order.
    pub control_points: Vec<Position>,
    /// How many times the path is traversed.
    pub repeat_count: i32,
    /// The path length in playfield pixels.
    pub length: f64,
    /// Per-edge hit sounds, reconciled against `repeat_count + 1` edges when
    /// the file provides the list at all.
    pub edge_sounds: Vec<HitSound>,
    /// Per-edge sample sets, stored as provided with no length
    /// reconciliation.
    pub edge_sample_sets: Vec<SampleSet>,
    /// Per-edge addition sample sets, parallel to `edge_sample_sets`.
    pub edge_addition_sets: Vec<SampleSet>,
}

/// The per-object sample override tail shared by all hit object kinds.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitSample {
    /// The sample set for the normal sound.
    pub sample_set: SampleSet,
    /// The sample set for addition sounds.
    pub addition_set: SampleSet,
    /// The custom sample set index.
    pub custom_set: CustomSampleSet,
    /// The sample volume, 0 meaning inherit.
    pub volume: i32,
    /// A sample file played instead of the set sounds.
    pub filename: String,
}

use crate::command::{CustomSampleSet, SampleSet, TimeSignature, TimingPointFlag};

/// A timeline marker establishing tempo and sample defaults from its offset
/// onward.
///
/// Timing points are stored exactly in file order; the parser neither sorts
/// nor deduplicates them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    /// The event time in milliseconds on the chart timeline.
    pub offset: f64,
    /// Milliseconds per beat, stored raw.
    ///
    /// Related tooling overloads the sign of this field: positive values are
    /// a base tempo, while inherited points store a velocity multiplier under
    /// a negative convention. The parser keeps whatever the file said.
    pub beat_length: f64,
    /// The time signature from this point onward.
    pub time_signature: TimeSignature,
    /// The default sample set from this point onward.
    pub sample_set: SampleSet,
    /// The custom sample set override.
    pub custom_sample_set: CustomSampleSet,
    /// The sample volume, nominally 0 to 100 but not clamped.
    pub volume: i32,
    /// Whether this point inherits its tempo from an earlier one.
    pub inherited: bool,
    /// The special flag (kiai, bar line omission).
    pub flag: TimingPointFlag,
}

impl Default for TimingPoint {
    fn default() -> Self {
        Self {
            offset: 0.0,
            beat_length: 0.0,
            time_signature: TimeSignature::default(),
            sample_set: SampleSet::Normal,
            custom_sample_set: CustomSampleSet::default(),
            volume: 100,
            inherited: false,
            flag: TimingPointFlag::default(),
        }
    }
}

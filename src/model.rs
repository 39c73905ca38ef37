//! Definitions of the output beatmap model.
//!
//! One flat record per file section, all owned exclusively by [`Beatmap`].
//! Every field starts at its documented default and is overwritten as the
//! parser encounters its key or record; a repeated key simply wins over the
//! earlier occurrence.

pub mod difficulty;
pub mod editor;
pub mod events;
pub mod general;
pub mod hit_object;
pub mod metadata;
pub mod timing_point;

pub use self::{
    difficulty::Difficulty,
    editor::Editor,
    events::Event,
    general::General,
    hit_object::{HitObject, HitObjectKind, HitSample, Slider},
    metadata::Metadata,
    timing_point::TimingPoint,
};

/// A parsed beatmap document.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// The integer format version from the `osu file format v` header.
    pub version: i32,
    /// The `[General]` section.
    pub general: General,
    /// The `[Editor]` section.
    pub editor: Editor,
    /// The `[Metadata]` section.
    pub metadata: Metadata,
    /// The `[Difficulty]` section.
    pub difficulty: Difficulty,
    /// The `[Events]` section records, in file order.
    pub events: Vec<Event>,
    /// The `[TimingPoints]` section records, in file order.
    pub timing_points: Vec<TimingPoint>,
    /// The `[HitObjects]` section records, in file order.
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Creates an empty beatmap of the given format version.
    #[must_use]
    pub fn new(version: i32) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    /// The number of circle objects in the chart.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.hit_objects
            .iter()
            .filter(|obj| matches!(obj.kind, HitObjectKind::Circle))
            .count()
    }

    /// The number of slider objects in the chart.
    #[must_use]
    pub fn slider_count(&self) -> usize {
        self.hit_objects
            .iter()
            .filter(|obj| matches!(obj.kind, HitObjectKind::Slider(_)))
            .count()
    }

    /// The number of spinner objects in the chart.
    #[must_use]
    pub fn spinner_count(&self) -> usize {
        self.hit_objects
            .iter()
            .filter(|obj| matches!(obj.kind, HitObjectKind::Spinner { .. }))
            .count()
    }

    /// The number of mania hold objects in the chart.
    #[must_use]
    pub fn hold_count(&self) -> usize {
        self.hit_objects
            .iter()
            .filter(|obj| matches!(obj.kind, HitObjectKind::Hold { .. }))
            .count()
    }
}

/// The `[Difficulty]` section: gameplay tuning values.
///
/// Format versions below 13 only stored whole numbers here; the parser floors
/// the first four fields for such files to reproduce that era.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Difficulty {
    /// Health drain rate, 0 to 10.
    pub hp_drain_rate: f64,
    /// Circle size, 0 to 10.
    pub circle_size: f64,
    /// Overall difficulty (hit window tightness), 0 to 10.
    pub overall_difficulty: f64,
    /// Approach rate, 0 to 10.
    pub approach_rate: f64,
    /// Base slider velocity in hundreds of playfield pixels per beat.
    pub slider_multiplier: f64,
    /// Slider ticks per beat.
    pub slider_tick_rate: f64,
}

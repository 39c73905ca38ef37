/// The `[Editor]` section: saved editor view state.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Editor {
    /// The distance-snap multiplier.
    pub distance_spacing: f64,
    /// The beat snap divisor.
    pub beat_divisor: i32,
    /// The grid size.
    pub grid_size: i32,
    /// The timeline zoom factor.
    pub timeline_zoom: f64,
}

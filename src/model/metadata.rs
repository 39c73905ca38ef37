/// The `[Metadata]` section: song and chart identification.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// The romanized song title.
    pub title: String,
    /// The song title in its original script.
    pub title_unicode: String,
    /// The romanized artist name.
    pub artist: String,
    /// The artist name in its original script.
    pub artist_unicode: String,
    /// The chart author.
    pub creator: String,
    /// The difficulty name of this chart.
    pub version: String,
    /// Where the song comes from.
    pub source: String,
    /// Search tags, space separated.
    pub tags: String,
    /// The online chart id.
    pub beatmap_id: i32,
    /// The online chart set id.
    pub beatmap_set_id: i32,
}

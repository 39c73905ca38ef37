/// A stored `[Events]` record.
///
/// Storyboard event codes (color, sprite, sample, animation) are recognized
/// by the parser but intentionally dropped, so no variant exists for them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A background image display.
    Background {
        /// When the background appears, in milliseconds.
        time: i32,
        /// The image file path.
        filename: String,
    },
    /// A background video.
    Video {
        /// When the video starts, in milliseconds.
        time: i32,
        /// The video file path.
        filename: String,
    },
    /// A gameplay break.
    Break {
        /// When the break starts, in milliseconds.
        start: i32,
        /// When the break ends, in milliseconds.
        end: i32,
    },
}

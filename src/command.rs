//! Definitions of field value data.
//!
//! Types in this module are the vocabulary shared between the parser and the
//! output model: play modes, sample sets, hit sound bit sets, timing point
//! attributes and curve kinds, along with the raw-code conversions the text
//! format uses for each of them.

/// A play mode of the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayMode {
    /// The standard circle-clicking mode.
    #[default]
    Osu,
    /// The drum mode.
    Taiko,
    /// The fruit-catching mode.
    Catch,
    /// The piano-style key mode.
    Mania,
}

impl PlayMode {
    /// Maps a `Mode` attribute token. Unrecognized tokens map to nothing so
    /// that the field keeps its previous value.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0" => Some(Self::Osu),
            "1" => Some(Self::Taiko),
            "2" => Some(Self::Catch),
            "3" => Some(Self::Mania),
            _ => None,
        }
    }
}

/// A named set of hit sound samples.
///
/// Hit objects carry this as a raw integer code, and files in the wild carry
/// codes outside the defined range; those are preserved in [`Self::Other`]
/// rather than folded into a defined set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleSet {
    /// No set specified, inherit from the surrounding context.
    #[default]
    None,
    /// The normal sample set.
    Normal,
    /// The soft sample set.
    Soft,
    /// The drum sample set.
    Drum,
    /// A code outside the defined range, kept verbatim.
    Other(i32),
}

impl SampleSet {
    /// Converts a raw integer code from a hit object or timing point.
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Normal,
            2 => Self::Soft,
            3 => Self::Drum,
            other => Self::Other(other),
        }
    }

    /// Maps a `[General]` `SampleSet` name token. Unrecognized names map to
    /// nothing so that the field keeps its previous value.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Normal" => Some(Self::Normal),
            "Soft" => Some(Self::Soft),
            "Drum" => Some(Self::Drum),
            _ => None,
        }
    }
}

/// A numbered custom sample set override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomSampleSet {
    /// No custom set.
    #[default]
    None,
    /// Custom set 1.
    Custom1,
    /// Custom set 2.
    Custom2,
    /// A code outside the defined range, kept verbatim.
    Other(i32),
}

impl CustomSampleSet {
    /// Converts a raw integer code from a hit object sample tail.
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Custom1,
            2 => Self::Custom2,
            other => Self::Other(other),
        }
    }

    /// Maps a timing point custom-set token. Only `0`, `1` and `2` are
    /// defined there; anything else maps to nothing.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0" => Some(Self::None),
            "1" => Some(Self::Custom1),
            "2" => Some(Self::Custom2),
            _ => None,
        }
    }
}

/// A packed set of hit sound flags.
///
/// The raw code is preserved bit-for-bit; undefined bits survive a round trip
/// through this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitSound(i32);

impl HitSound {
    /// No additional sound.
    pub const NONE: Self = Self(0);
    /// The normal hit sound.
    pub const NORMAL: Self = Self(1);
    /// The whistle sound.
    pub const WHISTLE: Self = Self(1 << 1);
    /// The finish (cymbal) sound.
    pub const FINISH: Self = Self(1 << 2);
    /// The clap sound.
    pub const CLAP: Self = Self(1 << 3);

    /// Wraps a raw hit sound code.
    #[must_use]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Returns the raw hit sound code.
    #[must_use]
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// Whether every flag of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// A time signature attached to a timing point.
///
/// The format only ever wrote these five values; everything else in the
/// signature field falls back to [`Self::Quadruple`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeSignature {
    /// 4/4 time.
    #[default]
    Quadruple,
    /// 3/4 time.
    Triplet,
    /// 5/4 time.
    Five,
    /// 6/4 time.
    Six,
    /// 7/4 time.
    Seven,
}

impl TimeSignature {
    /// Maps a timing point signature token, defaulting to 4/4.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "1" => Self::Triplet,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            _ => Self::Quadruple,
        }
    }
}

/// A special flag on a timing point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimingPointFlag {
    /// No special behavior.
    #[default]
    None,
    /// The segment is kiai time.
    Kiai,
    /// Taiko/mania bar line omission.
    OmitBarLine,
}

impl TimingPointFlag {
    /// Maps a timing point flag token. Only `0`, `1` and `8` are defined;
    /// anything else maps to nothing.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0" => Some(Self::None),
            "1" => Some(Self::Kiai),
            "8" => Some(Self::OmitBarLine),
            _ => None,
        }
    }
}

/// A slider curve kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveType {
    /// A Catmull-Rom spline, the oldest curve kind and the fallback for
    /// unrecognized letters.
    #[default]
    Catmull,
    /// A Bézier curve.
    Bezier,
    /// A sequence of straight segments.
    Linear,
    /// A circular arc through three points.
    Perfect,
}

impl CurveType {
    /// Maps the single-letter curve token at the head of a slider path field.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "B" => Self::Bezier,
            "L" => Self::Linear,
            "P" => Self::Perfect,
            _ => Self::Catmull,
        }
    }
}

/// A declared event type code in the `[Events]` section.
///
/// All seven codes are recognized; only backgrounds, videos and breaks
/// produce stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A background image.
    Background,
    /// A background video.
    Video,
    /// A gameplay break.
    Break,
    /// A storyboard color transform.
    Color,
    /// A storyboard sprite.
    Sprite,
    /// A storyboard sample.
    Sample,
    /// A storyboard animation.
    Animation,
}

impl EventKind {
    /// Maps a raw event type code.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Background),
            1 => Some(Self::Video),
            2 => Some(Self::Break),
            3 => Some(Self::Color),
            4 => Some(Self::Sprite),
            5 => Some(Self::Sample),
            6 => Some(Self::Animation),
            _ => None,
        }
    }
}

/// A 2D point in playfield coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// The horizontal coordinate.
    pub x: f64,
    /// The vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_mode_tokens() {
        assert_eq!(PlayMode::from_token("3"), Some(PlayMode::Mania));
        assert_eq!(PlayMode::from_token("9"), None);
        assert_eq!(PlayMode::from_token("Taiko"), None);
    }

    #[test]
    fn sample_set_raw_codes_round_trip() {
        assert_eq!(SampleSet::from_raw(0), SampleSet::None);
        assert_eq!(SampleSet::from_raw(3), SampleSet::Drum);
        assert_eq!(SampleSet::from_raw(7), SampleSet::Other(7));
        assert_eq!(SampleSet::from_name("Soft"), Some(SampleSet::Soft));
        assert_eq!(SampleSet::from_name("soft"), None);
    }

    #[test]
    fn hit_sound_flags() {
        let sound = HitSound::from_bits(10);
        assert!(sound.contains(HitSound::WHISTLE));
        assert!(sound.contains(HitSound::CLAP));
        assert!(!sound.contains(HitSound::FINISH));
        assert_eq!(sound.bits(), 10);
    }

    #[test]
    fn curve_letters() {
        assert_eq!(CurveType::from_token("P"), CurveType::Perfect);
        assert_eq!(CurveType::from_token("B"), CurveType::Bezier);
        assert_eq!(CurveType::from_token("L"), CurveType::Linear);
        assert_eq!(CurveType::from_token("C"), CurveType::Catmull);
        assert_eq!(CurveType::from_token("X"), CurveType::Catmull);
    }

    #[test]
    fn signature_tokens_fall_back_to_quadruple() {
        assert_eq!(TimeSignature::from_token("7"), TimeSignature::Seven);
        assert_eq!(TimeSignature::from_token("2"), TimeSignature::Quadruple);
    }
}

//! Decoder for `[TimingPoints]` records.
//!
//! Timing point lines grew fields over the format's life, so every field
//! past the second is optional: whatever the line carries is decoded in
//! order and everything beyond it keeps its default. A 2-field line is the
//! oldest minimal form and inherits the `[General]` sample set.

use crate::{
    command::{CustomSampleSet, TimingPointFlag, TimeSignature},
    model::TimingPoint,
};

use super::{ParseWarning, Parser};

/// Context label for numeric fields of timing point records.
const TIMING_POINTS: &str = "[TimingPoints]";

impl Parser {
    pub(crate) fn timing_point_line(&mut self, line: usize, content: &str) {
        let fields: Vec<&str> = content.split(',').collect();
        if fields.len() < 2 {
            self.warnings
                .push(ParseWarning::MalformedTimingPoint { line });
            return;
        }

        let mut point = TimingPoint {
            offset: self.read_decimal(line, TIMING_POINTS, fields[0]),
            beat_length: self.read_decimal(line, TIMING_POINTS, fields[1]),
            ..TimingPoint::default()
        };

        if fields.len() == 2 {
            point.sample_set = self.beatmap.general.sample_set;
        } else {
            point.time_signature = TimeSignature::from_token(fields[2]);
            // Field 3 (the named sample set) was never read by this format's
            // reference reader; field 4 onward picks up again.
            if let Some(token) = fields.get(4)
                && let Some(set) = CustomSampleSet::from_token(token)
            {
                point.custom_sample_set = set;
            }
            if let Some(token) = fields.get(5) {
                point.volume = self.read_integer(line, TIMING_POINTS, token);
            }
            if let Some(token) = fields.get(6) {
                // A literal `1` here marks an uninherited base point, so the
                // stored flag is the negation of that exact comparison.
                point.inherited = *token != "1";
            }
            if let Some(token) = fields.get(7)
                && let Some(flag) = TimingPointFlag::from_token(token)
            {
                point.flag = flag;
            }
        }

        self.beatmap.timing_points.push(point);
    }
}

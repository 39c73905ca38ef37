//! Decoder for `[HitObjects]` records.
//!
//! A hit object line is five comma fields of shared prefix (position, time,
//! a packed type code and a packed hit sound code) followed by fields whose
//! meaning depends on the kind encoded in the type code. The type code packs
//! three things at once: the kind bits, the new-combo bit and a three-bit
//! combo color offset. Everything is decomposed once here, then exactly one
//! branch builds the kind payload, and every line yields exactly one stored
//! record no matter how mangled its tail is.

use itertools::Itertools;

use crate::{
    command::{CurveType, CustomSampleSet, HitSound, Position, SampleSet},
    model::{HitObject, HitObjectKind, HitSample, Slider},
};

use super::Parser;

/// Context label for the shared prefix fields.
const HIT_OBJECTS: &str = "HitObjects";

/// Bit layout of the packed type code.
const CIRCLE_BIT: i32 = 1;
const SLIDER_BIT: i32 = 1 << 1;
const NEW_COMBO_BIT: i32 = 1 << 2;
const SPINNER_BIT: i32 = 1 << 3;
const HOLD_BIT: i32 = 1 << 7;

/// Warning labels for one kind's colon-delimited sample tail.
struct SampleTailLabels {
    set: &'static str,
    addition: &'static str,
    custom: &'static str,
    volume: &'static str,
}

const CIRCLE_TAIL: SampleTailLabels = SampleTailLabels {
    set: "HitObjects: Per-object hitsounds 0",
    addition: "HitObjects: Per-object hitsounds 1",
    custom: "HitObjects: Per-object hitsounds 2",
    volume: "HitObjects: Per-object hitsounds 3",
};

const SLIDER_TAIL: SampleTailLabels = SampleTailLabels {
    set: "HitObjects Slider: Per-object hitsounds 0",
    addition: "HitObjects Slider: Per-object hitsounds 1",
    custom: "HitObjects Slider: Per-object hitsounds 2",
    volume: "HitObjects Slider: Per-object hitsounds 3",
};

const SPINNER_TAIL: SampleTailLabels = SampleTailLabels {
    set: "HitObjects Spinner: Per-object hitsounds 0",
    addition: "HitObjects Spinner: Per-object hitsounds 1",
    custom: "HitObjects Spinner: Per-object hitsounds 2",
    volume: "HitObjects Spinner: Per-object hitsounds 3",
};

/// The kind selected from the type code, before any payload is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectedKind {
    Circle,
    Slider,
    Spinner,
    Hold,
}

impl SelectedKind {
    /// Decides the kind from the packed type code.
    ///
    /// Exactly one kind bit should be set; when a broken code carries more
    /// than one, the later check in this fixed order wins. A code with no
    /// kind bit at all falls back to a circle.
    fn from_type_code(type_code: i32) -> Self {
        let mut selected = Self::Circle;
        if type_code & CIRCLE_BIT != 0 {
            selected = Self::Circle;
        }
        if type_code & SLIDER_BIT != 0 {
            selected = Self::Slider;
        }
        if type_code & SPINNER_BIT != 0 {
            selected = Self::Spinner;
        }
        if type_code & HOLD_BIT != 0 {
            selected = Self::Hold;
        }
        selected
    }
}

impl Parser {
    pub(crate) fn hit_object_line(&mut self, line: usize, content: &str) {
        let fields: Vec<&str> = content.split(',').collect();
        let prefix = |index: usize| fields.get(index).copied().unwrap_or("");

        let x = self.read_decimal(line, HIT_OBJECTS, prefix(0));
        let y = self.read_decimal(line, HIT_OBJECTS, prefix(1));
        let time = self.read_decimal(line, HIT_OBJECTS, prefix(2));
        let type_code = self.read_integer(line, HIT_OBJECTS, prefix(3));
        let sound_code = self.read_integer(line, HIT_OBJECTS, prefix(4));

        let combo_color_offset = ((type_code >> 4) & 7) as u8;
        let new_combo = type_code & NEW_COMBO_BIT != 0;
        let hit_sound = HitSound::from_bits(sound_code);
        let selected = SelectedKind::from_type_code(type_code);

        let mut sample = HitSample::default();
        let has_payload = fields.len() > 5 && !fields[5].is_empty();
        let kind = if has_payload {
            match selected {
                SelectedKind::Circle => {
                    self.read_sample_tail(line, &CIRCLE_TAIL, fields[5], &mut sample);
                    HitObjectKind::Circle
                }
                SelectedKind::Slider => {
                    HitObjectKind::Slider(self.read_slider(line, &fields, hit_sound, &mut sample))
                }
                SelectedKind::Spinner => {
                    let end_time =
                        self.read_integer(line, "HitObjects Spinner: Spinner End time", fields[5]);
                    if let Some(tail) = fields.get(6) {
                        self.read_sample_tail(line, &SPINNER_TAIL, tail, &mut sample);
                    }
                    HitObjectKind::Spinner { end_time }
                }
                SelectedKind::Hold => {
                    let end_time = self.read_hold(line, fields[5], &mut sample);
                    HitObjectKind::Hold { end_time }
                }
            }
        } else {
            // Degenerate line: the kind still comes from the type code, the
            // payload stays at its defaults.
            match selected {
                SelectedKind::Circle => HitObjectKind::Circle,
                SelectedKind::Slider => HitObjectKind::Slider(Slider::default()),
                SelectedKind::Spinner => HitObjectKind::Spinner { end_time: 0 },
                SelectedKind::Hold => HitObjectKind::Hold { end_time: 0 },
            }
        };

        self.beatmap.hit_objects.push(HitObject {
            position: Position::new(x, y),
            time,
            new_combo,
            combo_color_offset,
            hit_sound,
            sample,
            kind,
        });
    }

    /// Decodes the colon-delimited sample override tail shared by circles,
    /// sliders and spinners. Subfields beyond the tail's length keep their
    /// defaults.
    fn read_sample_tail(
        &mut self,
        line: usize,
        labels: &SampleTailLabels,
        token: &str,
        sample: &mut HitSample,
    ) {
        let parts: Vec<&str> = token.split(':').collect();
        if let Some(part) = parts.first() {
            sample.sample_set = SampleSet::from_raw(self.read_integer(line, labels.set, part));
        }
        if let Some(part) = parts.get(1) {
            sample.addition_set =
                SampleSet::from_raw(self.read_integer(line, labels.addition, part));
        }
        if let Some(part) = parts.get(2) {
            sample.custom_set =
                CustomSampleSet::from_raw(self.read_integer(line, labels.custom, part));
        }
        if let Some(part) = parts.get(3) {
            sample.volume = self.read_integer(line, labels.volume, part);
        }
        if let Some(part) = parts.get(4) {
            sample.filename = (*part).to_owned();
        }
    }

    fn read_slider(
        &mut self,
        line: usize,
        fields: &[&str],
        shared_sound: HitSound,
        sample: &mut HitSample,
    ) -> Slider {
        let mut path_tokens = fields[5].split('|');
        let curve = CurveType::from_token(path_tokens.next().unwrap_or(""));

        let mut control_points = Vec::new();
        for token in path_tokens {
            // A control point is exactly `x:y`; anything else is skipped.
            let Some((raw_x, raw_y)) = token.split(':').collect_tuple() else {
                continue;
            };
            let x = self.read_decimal(line, "HitObjects Slider: Slider Points", raw_x);
            let y = self.read_decimal(line, "HitObjects Slider: Slider Points", raw_y);
            control_points.push(Position::new(x, y));
        }

        let repeat_count = match fields.get(6) {
            Some(token) => self.read_integer(line, "HitObjects Slider: Slider repeat count", token),
            None => 0,
        };
        let length = match fields.get(7) {
            Some(token) => self.read_decimal(line, "HitObjects Slider: Slider length", token),
            None => 0.0,
        };

        let mut edge_sounds = Vec::new();
        if let Some(list) = fields.get(8).copied().filter(|list| !list.is_empty()) {
            // One sound per edge: the head plus one per repeat. Entries past
            // the edge count are dropped, missing edges take the shared
            // sound. A negative repeat count reconciles to no edges at all.
            let edge_total = (repeat_count + 1).max(0) as usize;
            for entry in list.split('|').take(edge_total) {
                let code =
                    self.read_integer(line, "HitObjects Slider: Slider per-thing hitsounds", entry);
                edge_sounds.push(HitSound::from_bits(code));
            }
            edge_sounds.resize(edge_total, shared_sound);
        }

        let mut edge_sample_sets = Vec::new();
        let mut edge_addition_sets = Vec::new();
        if let Some(list) = fields.get(9).copied().filter(|list| !list.is_empty()) {
            let entries: Vec<&str> = list.split('|').collect();
            if entries.len() > 1 {
                for entry in entries {
                    let mut pair = entry.split(':');
                    let set = self.read_integer(
                        line,
                        "HitObjects Slider: Slider SampleSets",
                        pair.next().unwrap_or(""),
                    );
                    let addition = self.read_integer(
                        line,
                        "HitObjects Slider: Slider SampleSets",
                        pair.next().unwrap_or(""),
                    );
                    edge_sample_sets.push(SampleSet::from_raw(set));
                    edge_addition_sets.push(SampleSet::from_raw(addition));
                }
            }
        }

        if let Some(tail) = fields.get(10) {
            self.read_sample_tail(line, &SLIDER_TAIL, tail, sample);
        }

        Slider {
            curve,
            control_points,
            repeat_count,
            length,
            edge_sounds,
            edge_sample_sets,
            edge_addition_sets,
        }
    }

    fn read_hold(&mut self, line: usize, token: &str, sample: &mut HitSample) -> i32 {
        let parts: Vec<&str> = token.split(':').collect();
        let part = |index: usize| parts.get(index).copied().unwrap_or("");

        // Subfield 1 carries both the end time and the sample set in this
        // tail; mania files in the wild were written against that layout.
        let end_time = self.read_integer(line, "HitObjects Hold: Hold Endtime", part(1));
        sample.sample_set = SampleSet::from_raw(self.read_integer(
            line,
            "HitObjects Hold: Per-object hitsounds 0",
            part(1),
        ));
        sample.addition_set = SampleSet::from_raw(self.read_integer(
            line,
            "HitObjects Hold: Per-object hitsounds 1",
            part(2),
        ));
        if parts.len() > 3 {
            sample.custom_set = CustomSampleSet::from_raw(self.read_integer(
                line,
                "HitObjects Hold: Per-object hitsounds 2",
                parts[3],
            ));
            if parts.len() > 4 {
                sample.volume =
                    self.read_integer(line, "HitObjects Hold: Per-object hitsounds 3", parts[4]);
                if parts.len() > 5 {
                    sample.filename = parts[5].to_owned();
                }
            }
        }
        end_time
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse_beatmap;

    fn single_object(source: &str) -> HitObject {
        let output = parse_beatmap(source).expect("must parse");
        assert_eq!(output.beatmap.hit_objects.len(), 1);
        output.beatmap.hit_objects.into_iter().next().expect("one object")
    }

    #[test]
    fn kind_priority_order() {
        assert_eq!(SelectedKind::from_type_code(1), SelectedKind::Circle);
        assert_eq!(SelectedKind::from_type_code(2), SelectedKind::Slider);
        assert_eq!(SelectedKind::from_type_code(8), SelectedKind::Spinner);
        assert_eq!(SelectedKind::from_type_code(128), SelectedKind::Hold);
        // More than one kind bit: the later check wins.
        assert_eq!(SelectedKind::from_type_code(1 | 2), SelectedKind::Slider);
        assert_eq!(SelectedKind::from_type_code(2 | 8), SelectedKind::Spinner);
        assert_eq!(
            SelectedKind::from_type_code(1 | 2 | 8 | 128),
            SelectedKind::Hold
        );
        // No kind bit at all: circle.
        assert_eq!(SelectedKind::from_type_code(4), SelectedKind::Circle);
    }

    #[test]
    fn spinner_with_new_combo_bits() {
        let object = single_object(
            "osu file format v14\n[HitObjects]\n256,192,948,12,2,1693,0:0:0:0:\n",
        );
        assert_eq!(object.kind, HitObjectKind::Spinner { end_time: 1693 });
        assert!(object.new_combo);
        assert_eq!(object.combo_color_offset, 0);
        assert_eq!(object.hit_sound, HitSound::WHISTLE);
        assert_eq!(object.sample, HitSample::default());
    }

    #[test]
    fn combo_color_offset_bits() {
        // 0b0110_0101: circle, new combo, color offset 0b110 = 6.
        let object = single_object("osu file format v14\n[HitObjects]\n0,0,10,101,0\n");
        assert_eq!(object.kind, HitObjectKind::Circle);
        assert!(object.new_combo);
        assert_eq!(object.combo_color_offset, 6);
    }

    #[test]
    fn circle_sample_tail() {
        let object =
            single_object("osu file format v14\n[HitObjects]\n60,88,1200,1,0,2:1:3:70:hit.wav\n");
        assert_eq!(
            object.sample,
            HitSample {
                sample_set: SampleSet::Soft,
                addition_set: SampleSet::Normal,
                custom_set: CustomSampleSet::Other(3),
                volume: 70,
                filename: "hit.wav".into(),
            }
        );
    }

    #[test]
    fn short_circle_tail_defaults_silently() {
        let object = single_object("osu file format v14\n[HitObjects]\n60,88,1200,1,0,2\n");
        assert_eq!(object.sample.sample_set, SampleSet::Soft);
        assert_eq!(object.sample.addition_set, SampleSet::None);
        assert_eq!(object.sample.volume, 0);
        assert_eq!(object.sample.filename, "");
    }

    #[test]
    fn degenerate_lines_still_store_one_object() {
        let source = "osu file format v14\n[HitObjects]\n100,100,500,2,0\n100,100,900,8,0\n";
        let output = parse_beatmap(source).expect("must parse");
        assert_eq!(
            output.beatmap.hit_objects[0].kind,
            HitObjectKind::Slider(Slider::default())
        );
        assert_eq!(
            output.beatmap.hit_objects[1].kind,
            HitObjectKind::Spinner { end_time: 0 }
        );
        assert_eq!(output.warnings, vec![]);
    }

    #[test]
    fn slider_curve_and_control_points() {
        let object = single_object(
            "osu file format v14\n[HitObjects]\n96,64,12500,2,0,P|224:80|262:122,1,172.5\n",
        );
        let HitObjectKind::Slider(slider) = object.kind else {
            panic!("expected a slider");
        };
        assert_eq!(slider.curve, CurveType::Perfect);
        assert_eq!(
            slider.control_points,
            vec![Position::new(224.0, 80.0), Position::new(262.0, 122.0)]
        );
        assert_eq!(slider.repeat_count, 1);
        assert_eq!(slider.length, 172.5);
    }

    #[test]
    fn malformed_control_point_tokens_are_skipped() {
        let object = single_object(
            "osu file format v14\n[HitObjects]\n96,64,12500,2,0,B|224:80|300|10:20:30|262:122\n",
        );
        let HitObjectKind::Slider(slider) = object.kind else {
            panic!("expected a slider");
        };
        // `300` has no colon and `10:20:30` has too many parts; both skip.
        assert_eq!(
            slider.control_points,
            vec![Position::new(224.0, 80.0), Position::new(262.0, 122.0)]
        );
        assert!(parse_beatmap(
            "osu file format v14\n[HitObjects]\n96,64,12500,2,0,B|224:80|300|262:122\n"
        )
        .expect("must parse")
        .warnings
        .is_empty());
    }

    #[test]
    fn slider_edge_sounds_reconcile_against_repeats() {
        // Two repeats mean three edges; the file lists one sound, the rest
        // take the shared sound from field 4.
        let object = single_object(
            "osu file format v14\n[HitObjects]\n96,64,12500,2,8,L|200:64,2,100,4\n",
        );
        let HitObjectKind::Slider(slider) = object.kind else {
            panic!("expected a slider");
        };
        assert_eq!(
            slider.edge_sounds,
            vec![HitSound::FINISH, HitSound::CLAP, HitSound::CLAP]
        );
    }

    #[test]
    fn slider_edge_sound_surplus_is_dropped() {
        let object = single_object(
            "osu file format v14\n[HitObjects]\n96,64,12500,2,0,L|200:64,1,100,2|4|8|2\n",
        );
        let HitObjectKind::Slider(slider) = object.kind else {
            panic!("expected a slider");
        };
        assert_eq!(slider.edge_sounds, vec![HitSound::WHISTLE, HitSound::FINISH]);
    }

    #[test]
    fn slider_edge_sample_sets_need_two_entries() {
        // A single-entry list is ignored outright.
        let object = single_object(
            "osu file format v14\n[HitObjects]\n96,64,12500,2,0,L|200:64,1,100,0|0,1:2\n",
        );
        let HitObjectKind::Slider(slider) = object.kind else {
            panic!("expected a slider");
        };
        assert_eq!(slider.edge_sample_sets, vec![]);
        assert_eq!(slider.edge_addition_sets, vec![]);

        let object = single_object(
            "osu file format v14\n[HitObjects]\n96,64,12500,2,0,L|200:64,1,100,0|0,1:2|3:0\n",
        );
        let HitObjectKind::Slider(slider) = object.kind else {
            panic!("expected a slider");
        };
        assert_eq!(
            slider.edge_sample_sets,
            vec![SampleSet::Normal, SampleSet::Drum]
        );
        assert_eq!(
            slider.edge_addition_sets,
            vec![SampleSet::Soft, SampleSet::None]
        );
    }

    #[test]
    fn slider_sample_tail_in_field_ten() {
        let object = single_object(
            "osu file format v14\n[HitObjects]\n96,64,12500,2,0,L|200:64,1,100,0|0,0:0|0:0,1:2:0:60:slide.wav\n",
        );
        assert_eq!(object.sample.sample_set, SampleSet::Normal);
        assert_eq!(object.sample.addition_set, SampleSet::Soft);
        assert_eq!(object.sample.volume, 60);
        assert_eq!(object.sample.filename, "slide.wav");
    }

    #[test]
    fn hold_end_time_and_sample_set_share_a_subfield() {
        // A real mania line writes the end time at subfield 0, but this tail
        // is decoded from subfield 1 onward: the value at index 1 becomes
        // both the end time and the sample set code.
        let object = single_object(
            "osu file format v14\n[HitObjects]\n64,192,3200,128,0,3500:2:1:0:40:end.wav\n",
        );
        assert_eq!(object.kind, HitObjectKind::Hold { end_time: 2 });
        assert_eq!(object.sample.sample_set, SampleSet::Soft);
        assert_eq!(object.sample.addition_set, SampleSet::Normal);
        assert_eq!(object.sample.custom_set, CustomSampleSet::None);
        assert_eq!(object.sample.volume, 40);
        assert_eq!(object.sample.filename, "end.wav");
    }

    #[test]
    fn missing_prefix_fields_warn_and_zero() {
        let output = parse_beatmap("osu file format v14\n[HitObjects]\n256,192\n").expect("must parse");
        let object = &output.beatmap.hit_objects[0];
        assert_eq!(object.time, 0.0);
        assert_eq!(object.kind, HitObjectKind::Circle);
        // time, type and hit sound were all missing.
        assert_eq!(output.warnings.len(), 3);
        assert_eq!(
            output.warnings[0].to_string(),
            "Line 3: Error Parsing HitObjects: invalid float literal"
        );
        assert_eq!(
            output.warnings[1].to_string(),
            "Line 3: Error Parsing HitObjects: cannot parse integer from empty string"
        );
    }
}

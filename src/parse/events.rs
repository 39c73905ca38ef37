//! Decoder for `[Events]` records.
//!
//! Only backgrounds, videos and breaks are stored. Storyboard codes (color,
//! sprite, sample, animation) are recognized and dropped; unknown codes fall
//! through silently.

use crate::{command::EventKind, model::Event};

use super::Parser;

/// Context label for numeric fields of event records.
const EVENTS: &str = "[Events]";

impl Parser {
    pub(crate) fn event_line(&mut self, line: usize, content: &str) {
        let fields: Vec<&str> = content.split(',').collect();
        let code = self.read_integer(line, EVENTS, fields.first().copied().unwrap_or(""));
        let time = self.read_integer(line, EVENTS, fields.get(1).copied().unwrap_or(""));
        let third = fields.get(2).copied().unwrap_or("");

        match EventKind::from_code(code) {
            Some(EventKind::Background) => {
                let filename = trim_filename(third);
                self.beatmap.events.push(Event::Background { time, filename });
            }
            Some(EventKind::Video) => {
                let filename = trim_filename(third);
                self.beatmap.events.push(Event::Video { time, filename });
            }
            Some(EventKind::Break) => {
                let end = self.read_integer(line, EVENTS, third);
                self.beatmap.events.push(Event::Break { start: time, end });
            }
            _ => {}
        }
    }
}

/// Strips the space and quote padding some editors wrap around file paths.
/// Embedded comma escaping is not interpreted.
fn trim_filename(raw: &str) -> String {
    raw.trim_matches([' ', '"']).to_owned()
}

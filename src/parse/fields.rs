//! Primitive field decoders.
//!
//! Both decoders implement the same degrade-and-continue contract: on
//! success the decoded value comes back, on failure a warning is appended to
//! the log and the zero value comes back. No token ever aborts the parse.

use super::{ParseWarning, Parser};

impl Parser {
    /// Decodes a base-10 integer token.
    ///
    /// The full 64-bit range is accepted and narrowed to `i32`, matching the
    /// historical reader of this format.
    pub(crate) fn read_integer(&mut self, line: usize, field: &str, token: &str) -> i32 {
        match token.parse::<i64>() {
            Ok(parsed) => parsed as i32,
            Err(err) => {
                self.warnings.push(ParseWarning::InvalidInteger {
                    line,
                    field: field.to_owned(),
                    message: err.to_string(),
                });
                0
            }
        }
    }

    /// Decodes a decimal token.
    pub(crate) fn read_decimal(&mut self, line: usize, field: &str, token: &str) -> f64 {
        match token.parse::<f64>() {
            Ok(parsed) => parsed,
            Err(err) => {
                self.warnings.push(ParseWarning::InvalidDecimal {
                    line,
                    field: field.to_owned(),
                    message: err.to_string(),
                });
                0.0
            }
        }
    }
}

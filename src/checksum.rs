//! Line checksum and structural validation
use log::debug;
use thiserror::Error;

use crate::{
    fields::{Field, Line},
    tle::{parse_tle, Tle, TleInput},
    Error,
};

/// Reason a record was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Invalidity {
    #[error("expecting 2 lines, got {0}")]
    LineCount(usize),
    #[error("{line} starts with line number {found}")]
    LineNumber { line: Line, found: String },
    #[error("{line} checksum mismatch: computed {expected}, stored {found}")]
    Checksum { line: Line, expected: u8, found: String },
    #[error("{0} is missing or malformed")]
    Field(Field),
}

/// Computes the modulo 10 checksum of a TLE line.
/// The last character (stored checksum) is not accounted for:
/// digits count for their value, '-' counts for 1, anything else for 0.
pub fn checksum(line: &str) -> Result<u8, Error> {
    let mut chars = line.chars();
    chars.next_back();
    let body = chars.as_str();
    if body.is_empty() {
        return Err(Error::EmptyLine);
    }
    let sum = body
        .chars()
        .map(|c| match c {
            '0'..='9' => c as u32 - '0' as u32,
            '-' => 1,
            _ => 0,
        })
        .sum::<u32>();
    Ok((sum % 10) as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum State {
    /// Record must hold two lines
    #[default]
    LineCount,
    /// Line number fields
    LineNumbers,
    /// Line checksums
    Checksums,
    /// All checks passed
    Valid,
}

impl Tle {
    /// Verifies line count, line numbers and both checksums.
    /// Any single failure rejects the whole record.
    pub fn validate(&self) -> Result<(), Error> {
        let mut state = State::default();
        loop {
            state = match state {
                State::LineCount => {
                    if self.lines.len() != 2 {
                        return Err(Error::InvalidTle(Invalidity::LineCount(self.lines.len())));
                    }
                    State::LineNumbers
                },
                State::LineNumbers => {
                    for (field, expected) in [(Field::LineNumber1, 1.0), (Field::LineNumber2, 2.0)]
                    {
                        let raw = self
                            .raw(field)
                            .map_err(|_| Error::InvalidTle(Invalidity::Field(field)))?;
                        if raw.trim().parse::<f64>().ok() != Some(expected) {
                            return Err(Error::InvalidTle(Invalidity::LineNumber {
                                line: field.spec().line,
                                found: raw.to_string(),
                            }));
                        }
                    }
                    State::Checksums
                },
                State::Checksums => {
                    for field in [Field::Checksum1, Field::Checksum2] {
                        let line = field.spec().line;
                        let stored = self
                            .raw(field)
                            .map_err(|_| Error::InvalidTle(Invalidity::Field(field)))?;
                        let expected = checksum(&self.lines[line.index()])?;
                        if stored.parse::<u8>().ok() != Some(expected) {
                            return Err(Error::InvalidTle(Invalidity::Checksum {
                                line,
                                expected,
                                found: stored.to_string(),
                            }));
                        }
                    }
                    State::Valid
                },
                State::Valid => return Ok(()),
            };
            debug!("\"{}\" - {:?}", self.name, state);
        }
    }
}

/// Returns true if input parses to a valid TLE
pub fn is_valid_tle<'a>(input: impl Into<TleInput<'a>>) -> bool {
    match parse_tle(input) {
        Ok(tle) => tle.validate().is_ok(),
        Err(_) => false,
    }
}

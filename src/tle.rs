//! Canonical two-line records
use log::trace;
use std::str::FromStr;

use crate::Error;

/// Satellite name used when the input carries no name line
pub const UNKNOWN_NAME: &str = "Unknown";

/// Canonical TLE record: optional satellite name and the (trimmed) element lines.
/// A well formed record holds exactly two lines, which is checked by
/// [Tle::validate] rather than at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tle {
    /// Satellite name
    pub(crate) name: String,
    /// Element lines
    pub(crate) lines: Vec<String>,
}

impl Tle {
    /// Satellite name, "Unknown" when none was provided
    pub fn satellite_name(&self) -> &str {
        &self.name
    }
    /// Element lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
    /// Returns line 1 and line 2, if present
    pub(crate) fn line_pair(&self) -> Option<(&str, &str)> {
        match self.lines.as_slice() {
            [l1, l2, ..] => Some((l1.as_str(), l2.as_str())),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for Tle {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tle(s)
    }
}

/// Accepted input shapes
#[derive(Debug, Clone)]
pub enum TleInput<'a> {
    /// 2 or 3 newline separated lines
    Text(&'a str),
    /// 2 or 3 lines
    Lines(Vec<&'a str>),
    /// Already canonical record
    Record(Tle),
}

impl<'a> From<&'a str> for TleInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for TleInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_str())
    }
}

impl<'a> From<&'a [&'a str]> for TleInput<'a> {
    fn from(lines: &'a [&'a str]) -> Self {
        Self::Lines(lines.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for TleInput<'a> {
    fn from(lines: [&'a str; N]) -> Self {
        Self::Lines(lines.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for TleInput<'a> {
    fn from(lines: Vec<&'a str>) -> Self {
        Self::Lines(lines)
    }
}

impl<'a> From<&'a [String]> for TleInput<'a> {
    fn from(lines: &'a [String]) -> Self {
        Self::Lines(lines.iter().map(|l| l.as_str()).collect())
    }
}

impl From<Tle> for TleInput<'_> {
    fn from(tle: Tle) -> Self {
        Self::Record(tle)
    }
}

impl From<&Tle> for TleInput<'_> {
    fn from(tle: &Tle) -> Self {
        Self::Record(tle.clone())
    }
}

/// Normalizes any accepted input into a canonical [Tle].
/// Canonical records are returned as is. When three lines are provided,
/// the first one is the satellite name. Line count is not verified here.
/// Text input may end with a line terminator.
pub fn parse_tle<'a>(input: impl Into<TleInput<'a>>) -> Result<Tle, Error> {
    let mut lines = match input.into() {
        TleInput::Record(tle) => return Ok(tle),
        TleInput::Text(text) => text.lines().collect::<Vec<_>>(),
        TleInput::Lines(lines) => lines,
    };

    if lines.iter().all(|l| l.trim().is_empty()) {
        return Err(Error::InvalidInputType(
            "expecting TLE text or line sequence, got nothing".to_string(),
        ));
    }

    let name = if lines.len() == 3 {
        lines.remove(0).trim().to_string()
    } else {
        UNKNOWN_NAME.to_string()
    };

    let lines = lines
        .iter()
        .map(|l| l.trim().to_string())
        .collect::<Vec<_>>();

    trace!("parsed \"{}\": {} line(s)", name, lines.len());
    Ok(Tle { name, lines })
}

#[cfg(test)]
mod test {
    use super::{parse_tle, Tle, TleInput};
    use crate::Error;
    use rstest::*;

    const L1: &str = "1 25544U 98067A   21275.52719505  .00002182  00000-0  49422-4 0  9992";
    const L2: &str = "2 25544  51.6442  40.7625 0003438 154.0455 306.1756 15.48783287303095";

    #[rstest]
    #[case(format!("{}\n{}", L1, L2), "Unknown")]
    #[case(format!("ISS (ZARYA)\n{}\n{}", L1, L2), "ISS (ZARYA)")]
    #[case(format!("  ISS (ZARYA)  \r\n  {}\r\n{}  ", L1, L2), "ISS (ZARYA)")]
    fn text_input(#[case] text: String, #[case] name: &str) {
        let tle = parse_tle(&text).unwrap();
        assert_eq!(tle.satellite_name(), name);
        assert_eq!(tle.lines()[0], L1);
        assert_eq!(tle.lines()[1], L2);
    }

    #[rstest]
    #[case(format!("{}\n{}\n", L1, L2), "Unknown")]
    #[case(format!("{}\r\n{}\r\n", L1, L2), "Unknown")]
    #[case(format!("ISS (ZARYA)\n{}\n{}\n", L1, L2), "ISS (ZARYA)")]
    fn trailing_newline(#[case] text: String, #[case] name: &str) {
        let tle = parse_tle(&text).unwrap();
        assert_eq!(tle.satellite_name(), name);
        assert_eq!(tle.lines(), &[L1.to_string(), L2.to_string()]);
    }

    #[test]
    fn line_sequences() {
        let tle = parse_tle([L1, L2]).unwrap();
        assert_eq!(tle.satellite_name(), "Unknown");
        assert_eq!(tle.lines(), &[L1.to_string(), L2.to_string()]);

        let tle = parse_tle(vec!["ISS (ZARYA)", L1, L2]).unwrap();
        assert_eq!(tle.satellite_name(), "ISS (ZARYA)");
        assert_eq!(tle.lines().len(), 2);
    }

    #[test]
    fn idempotent() {
        for input in [
            TleInput::Text("NAME\n1 2 3\n2 3 4"),
            TleInput::Lines(vec![L1, L2]),
        ] {
            let once = parse_tle(input).unwrap();
            let twice = parse_tle(&once).unwrap();
            assert_eq!(once, twice);
            let thrice: Tle = parse_tle(twice.clone()).unwrap();
            assert_eq!(thrice, twice);
        }
    }

    #[test]
    fn empty_inputs() {
        for input in [TleInput::Text(""), TleInput::Text(" \n "), TleInput::Lines(vec![])] {
            match parse_tle(input) {
                Err(Error::InvalidInputType(_)) => {},
                other => panic!("unexpected result {:?}", other),
            }
        }
    }
}

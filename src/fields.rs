//! TLE fixed-column layout
use std::str::FromStr;

/// Physical line of a two-line element set
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    Line1,
    Line2,
}

impl Line {
    /// Index of this line in a canonical record
    pub fn index(&self) -> usize {
        match self {
            Self::Line1 => 0,
            Self::Line2 => 1,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Line1 => write!(f, "line1"),
            Self::Line2 => write!(f, "line2"),
        }
    }
}

/// Column span of one field
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Line this field lives on
    pub line: Line,
    /// 0-based column offset
    pub start: usize,
    /// Number of columns
    pub length: usize,
}

impl FieldSpec {
    const fn new(line: Line, start: usize, length: usize) -> Self {
        Self {
            line,
            start,
            length,
        }
    }
    /// Exclusive end column
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Named TLE fields
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    LineNumber1,
    SatelliteNumber,
    Classification,
    IntDesignatorYear,
    IntDesignatorLaunchNumber,
    IntDesignatorPieceOfLaunch,
    EpochYear,
    EpochDay,
    FirstTimeDerivative,
    SecondTimeDerivative,
    BstarDrag,
    NumZero,
    TleSetNumber,
    Checksum1,
    LineNumber2,
    SatelliteNumber2,
    Inclination,
    RightAscension,
    Eccentricity,
    Perigee,
    MeanAnomaly,
    MeanMotion,
    RevNumberAtEpoch,
    Checksum2,
}

impl Field {
    /// Every field, line 1 first, in column order
    pub const ALL: [Field; 24] = [
        Self::LineNumber1,
        Self::SatelliteNumber,
        Self::Classification,
        Self::IntDesignatorYear,
        Self::IntDesignatorLaunchNumber,
        Self::IntDesignatorPieceOfLaunch,
        Self::EpochYear,
        Self::EpochDay,
        Self::FirstTimeDerivative,
        Self::SecondTimeDerivative,
        Self::BstarDrag,
        Self::NumZero,
        Self::TleSetNumber,
        Self::Checksum1,
        Self::LineNumber2,
        Self::SatelliteNumber2,
        Self::Inclination,
        Self::RightAscension,
        Self::Eccentricity,
        Self::Perigee,
        Self::MeanAnomaly,
        Self::MeanMotion,
        Self::RevNumberAtEpoch,
        Self::Checksum2,
    ];

    /// Returns the column span of this field
    pub const fn spec(&self) -> FieldSpec {
        use Line::{Line1, Line2};
        match self {
            Self::LineNumber1 => FieldSpec::new(Line1, 0, 1),
            Self::SatelliteNumber => FieldSpec::new(Line1, 2, 5),
            Self::Classification => FieldSpec::new(Line1, 7, 1),
            Self::IntDesignatorYear => FieldSpec::new(Line1, 9, 2),
            Self::IntDesignatorLaunchNumber => FieldSpec::new(Line1, 11, 3),
            Self::IntDesignatorPieceOfLaunch => FieldSpec::new(Line1, 14, 3),
            Self::EpochYear => FieldSpec::new(Line1, 18, 2),
            Self::EpochDay => FieldSpec::new(Line1, 20, 12),
            Self::FirstTimeDerivative => FieldSpec::new(Line1, 33, 11),
            Self::SecondTimeDerivative => FieldSpec::new(Line1, 44, 8),
            Self::BstarDrag => FieldSpec::new(Line1, 53, 8),
            Self::NumZero => FieldSpec::new(Line1, 62, 1),
            Self::TleSetNumber => FieldSpec::new(Line1, 64, 4),
            Self::Checksum1 => FieldSpec::new(Line1, 68, 1),
            Self::LineNumber2 => FieldSpec::new(Line2, 0, 1),
            Self::SatelliteNumber2 => FieldSpec::new(Line2, 2, 5),
            Self::Inclination => FieldSpec::new(Line2, 8, 8),
            Self::RightAscension => FieldSpec::new(Line2, 17, 8),
            Self::Eccentricity => FieldSpec::new(Line2, 26, 7),
            Self::Perigee => FieldSpec::new(Line2, 34, 8),
            Self::MeanAnomaly => FieldSpec::new(Line2, 43, 8),
            Self::MeanMotion => FieldSpec::new(Line2, 52, 11),
            Self::RevNumberAtEpoch => FieldSpec::new(Line2, 63, 5),
            Self::Checksum2 => FieldSpec::new(Line2, 68, 1),
        }
    }

    /// Field identifier, as used in TLE documentation
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LineNumber1 => "lineNumber1",
            Self::SatelliteNumber => "satelliteNumber",
            Self::Classification => "classification",
            Self::IntDesignatorYear => "intDesignatorYear",
            Self::IntDesignatorLaunchNumber => "intDesignatorLaunchNumber",
            Self::IntDesignatorPieceOfLaunch => "intDesignatorPieceOfLaunch",
            Self::EpochYear => "epochYear",
            Self::EpochDay => "epochDay",
            Self::FirstTimeDerivative => "firstTimeDerivative",
            Self::SecondTimeDerivative => "secondTimeDerivative",
            Self::BstarDrag => "bstarDrag",
            Self::NumZero => "numZero",
            Self::TleSetNumber => "tleSetNumber",
            Self::Checksum1 => "checksum1",
            Self::LineNumber2 => "lineNumber2",
            Self::SatelliteNumber2 => "satelliteNumber2",
            Self::Inclination => "inclination",
            Self::RightAscension => "rightAscension",
            Self::Eccentricity => "eccentricity",
            Self::Perigee => "perigee",
            Self::MeanAnomaly => "meanAnomaly",
            Self::MeanMotion => "meanMotion",
            Self::RevNumberAtEpoch => "revNumberAtEpoch",
            Self::Checksum2 => "checksum2",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Field {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|field| field.name() == s)
            .copied()
            .ok_or(format!("unknown field \"{}\"", s))
    }
}

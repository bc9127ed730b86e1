//! Field extraction
use crate::{fields::Field, tle::Tle, Error};

/// Extracted field: numeric when the column text parses to
/// a finite number, raw column text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric value, if any
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Decodes the TLE "assumed decimal point" notation, for example
/// " 49422-4" = 0.49422E-4 and "-11606-4" = -0.11606E-4.
fn implied_decimal(raw: &str) -> Option<f64> {
    let text = raw.trim();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };
    let split = digits.rfind(|c: char| c == '-' || c == '+').unwrap_or(digits.len());
    let (mantissa, exponent) = digits.split_at(split);
    let mantissa = format!("0.{}", mantissa.trim()).parse::<f64>().ok()?;
    let exponent = if exponent.is_empty() {
        0
    } else {
        exponent.parse::<i32>().ok()?
    };
    Some(sign * mantissa * 10.0_f64.powi(exponent))
}

impl Tle {
    /// Returns raw column text of given field. Spaces are preserved.
    pub fn raw(&self, field: Field) -> Result<&str, Error> {
        let spec = field.spec();
        let line = self
            .lines
            .get(spec.line.index())
            .ok_or(Error::FieldOutOfRange { field, line_len: 0 })?;
        line.get(spec.start..spec.end())
            .ok_or(Error::FieldOutOfRange {
                field,
                line_len: line.len(),
            })
    }
    /// Extracts given field and coerces it to a number, when feasible.
    pub fn get(&self, field: Field) -> Result<FieldValue, Error> {
        let raw = self.raw(field)?;
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(FieldValue::Number(value)),
            _ => Ok(FieldValue::Text(raw.to_string())),
        }
    }
    /// Extracts a field that must be numeric
    pub fn number(&self, field: Field) -> Result<f64, Error> {
        match self.get(field)? {
            FieldValue::Number(value) => Ok(value),
            FieldValue::Text(value) => Err(Error::NotNumeric { field, value }),
        }
    }
    /// NORAD catalog number
    pub fn catalog_number(&self) -> Result<u32, Error> {
        let raw = self.raw(Field::SatelliteNumber)?;
        raw.trim().parse::<u32>().map_err(|_| Error::NotNumeric {
            field: Field::SatelliteNumber,
            value: raw.to_string(),
        })
    }
    /// 2-digit epoch year
    pub fn epoch_year(&self) -> Result<f64, Error> {
        self.number(Field::EpochYear)
    }
    /// Fractional day of year of the epoch (1.0 = January 1st, 00:00)
    pub fn epoch_day(&self) -> Result<f64, Error> {
        self.number(Field::EpochDay)
    }
    /// Mean motion [rev/day]
    pub fn mean_motion(&self) -> Result<f64, Error> {
        self.number(Field::MeanMotion)
    }
    /// Inclination [deg]
    pub fn inclination(&self) -> Result<f64, Error> {
        self.number(Field::Inclination)
    }
    /// Eccentricity. Column holds the digits following an implied leading decimal point.
    pub fn eccentricity(&self) -> Result<f64, Error> {
        let raw = self.raw(Field::Eccentricity)?;
        format!("0.{}", raw.trim())
            .parse::<f64>()
            .map_err(|_| Error::NotNumeric {
                field: Field::Eccentricity,
                value: raw.to_string(),
            })
    }
    /// B* drag term [1/earth radii]
    pub fn bstar(&self) -> Result<f64, Error> {
        let raw = self.raw(Field::BstarDrag)?;
        implied_decimal(raw).ok_or(Error::NotNumeric {
            field: Field::BstarDrag,
            value: raw.to_string(),
        })
    }
    /// Second time derivative of mean motion, divided by 6 [rev/day^3]
    pub fn mean_motion_ddot(&self) -> Result<f64, Error> {
        let raw = self.raw(Field::SecondTimeDerivative)?;
        implied_decimal(raw).ok_or(Error::NotNumeric {
            field: Field::SecondTimeDerivative,
            value: raw.to_string(),
        })
    }
    /// COSPAR international designator, for example "1998-067A"
    pub fn cospar_id(&self) -> Result<String, Error> {
        let year = self.raw(Field::IntDesignatorYear)?.trim();
        let launch = self.raw(Field::IntDesignatorLaunchNumber)?.trim();
        let piece = self.raw(Field::IntDesignatorPieceOfLaunch)?.trim();
        let year = year.parse::<u16>().map_err(|_| Error::NotNumeric {
            field: Field::IntDesignatorYear,
            value: year.to_string(),
        })?;
        let year = crate::epoch::full_year(year as i32);
        Ok(format!("{}-{}{}", year, launch, piece))
    }
}

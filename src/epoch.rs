//! TLE epoch resolution
use hifitime::{Epoch, Unit};

use crate::{tle::Tle, Error};

/// 2-digit years at or above this pivot belong to the 1900s
pub const CENTURY_PIVOT: i32 = 57;

/// Resolves a 2-digit TLE year: 57..=99 are 1957..=1999, 0..=56 are 2000..=2056.
/// Values outside 0..=99 are considered complete already.
pub fn full_year(year: i32) -> i32 {
    match year {
        CENTURY_PIVOT..=99 => 1900 + year,
        0..CENTURY_PIVOT => 2000 + year,
        _ => year,
    }
}

/// Converts a fractional day of year (1.0 = January 1st 00:00:00 UTC)
/// to an [Epoch]. Days are exactly 86400 seconds long.
pub fn day_of_year_to_epoch(day: f64, year: i32) -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(year, 1, 1) + (day - 1.0) * Unit::Day
}

/// Same as [day_of_year_to_epoch], expressed in milliseconds since the Unix epoch
pub fn day_of_year_to_unix_ms(day: f64, year: i32) -> f64 {
    day_of_year_to_epoch(day, year).to_unix_milliseconds()
}

impl Tle {
    /// Epoch of this element set
    pub fn epoch(&self) -> Result<Epoch, Error> {
        let year = full_year(self.epoch_year()? as i32);
        Ok(day_of_year_to_epoch(self.epoch_day()?, year))
    }
}

use hifitime::{Duration, Unit};

use crate::observer::ObserverPosition;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// [crate::prelude::Tracker] configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Observer used when none is specified, for example by [crate::prelude::Tracker::lat_lon]
    pub observer: ObserverPosition,
    /// Default ground track sampling period
    pub ground_track_step: Duration,
    /// Ground track spans from `center - half_window` to `center + half_window`
    pub ground_track_half_window: Duration,
    /// Finite difference period used in ground speed estimates
    pub ground_speed_dt: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            observer: ObserverPosition::default(),
            ground_track_step: 1.0 * Unit::Minute,
            ground_track_half_window: 3.0 * Unit::Hour,
            ground_speed_dt: 10.0 * Unit::Second,
        }
    }
}

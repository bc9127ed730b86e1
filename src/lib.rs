#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod accessor;
mod cfg;
mod checksum;
mod epoch;
mod fields;
mod frame;
mod metrics;
mod observation;
mod observer;
mod orbit;
mod tle;
mod tracker;

// pub export
pub use tracker::Error;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::accessor::FieldValue;
    pub use crate::cfg::Config;
    pub use crate::checksum::{checksum, is_valid_tle, Invalidity};
    pub use crate::epoch::{day_of_year_to_epoch, day_of_year_to_unix_ms, full_year};
    pub use crate::fields::{Field, FieldSpec, Line};
    pub use crate::frame::{ecef_to_geodetic, gmst, look_angles, teme_to_ecef};
    pub use crate::metrics::{
        average_orbit_period_minutes, great_circle_distance_km, EARTH_MEAN_RADIUS_KM,
        MAX_TRACK_SAMPLES,
    };
    pub use crate::observation::{LatLon, LookAngles, Observation};
    pub use crate::observer::ObserverPosition;
    pub use crate::orbit::{Propagator, Sgp4Propagator, StateVector};
    pub use crate::tle::{parse_tle, Tle, TleInput, UNKNOWN_NAME};
    pub use crate::tracker::Tracker;
    // re-export
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
    pub use nalgebra::Vector3;
}

//! Memoized satellite tracker
use log::{debug, warn};
use std::collections::HashMap;
use thiserror::Error;

use hifitime::Epoch;

use crate::{
    cfg::Config,
    checksum::Invalidity,
    fields::Field,
    frame,
    observation::{LatLon, LookAngles, Observation},
    observer::ObserverPosition,
    orbit::{Propagator, Sgp4Propagator},
    tle::Tle,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid input type: {0}")]
    InvalidInputType(String),
    #[error("no characters to checksum")]
    EmptyLine,
    #[error("invalid tle: {0}")]
    InvalidTle(Invalidity),
    #[error("propagation error: {0}")]
    Propagation(String),
    #[error("{field} out of range (line length {line_len})")]
    FieldOutOfRange { field: Field, line_len: usize },
    #[error("{field} is not numeric: \"{value}\"")]
    NotNumeric { field: Field, value: String },
    #[error("time step should be positive")]
    InvalidStep,
    #[error("time error: {0}")]
    Time(String),
}

/// Observations are memoized per (element lines, instant, observer)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    line1: String,
    line2: String,
    /// Instant as TAI nanoseconds
    t_ns: i128,
    observer: [u64; 3],
}

impl CacheKey {
    fn new(tle: &Tle, t: Epoch, observer: &ObserverPosition) -> Self {
        let line = |i: usize| tle.lines().get(i).cloned().unwrap_or_default();
        Self {
            line1: line(0),
            line2: line(1),
            t_ns: t.to_tai_duration().total_nanoseconds(),
            observer: observer.key(),
        }
    }
}

/// Satellite Tracker: resolves [Observation]s from element sets
/// and memoizes them for the lifetime of Self.
/// The cache is never evicted, use [Tracker::clear_cache] to release it.
#[derive(Debug)]
pub struct Tracker<P: Propagator = Sgp4Propagator> {
    /// Tracker configuration
    cfg: Config,
    /// Orbital state provider
    propagator: P,
    /// Resolved observations
    cache: HashMap<CacheKey, Observation>,
}

impl Tracker<Sgp4Propagator> {
    /// Builds new [Tracker] propagating with SGP4
    pub fn sgp4(cfg: Config) -> Self {
        Self::new(cfg, Sgp4Propagator::default())
    }
}

impl Default for Tracker<Sgp4Propagator> {
    fn default() -> Self {
        Self::sgp4(Config::default())
    }
}

impl<P: Propagator> Tracker<P> {
    /// Builds new [Tracker] using given Configuration settings and orbital state provider.
    pub fn new(cfg: Config, propagator: P) -> Self {
        Self {
            cfg,
            propagator,
            cache: HashMap::with_capacity(128),
        }
    }
    /// Configuration
    pub fn config(&self) -> &Config {
        &self.cfg
    }
    /// Orbital state provider
    pub fn propagator(&self) -> &P {
        &self.propagator
    }
    /// Number of memoized observations
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
    /// Drops all memoized observations
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
    /// Resolves satellite position seen from given observer at instant `t`.
    /// The element set is not validated here, see [Tracker::lat_lon].
    pub fn satellite_info(
        &mut self,
        tle: &Tle,
        t: Epoch,
        observer: &ObserverPosition,
    ) -> Result<Observation, Error> {
        let key = CacheKey::new(tle, t, observer);
        if let Some(observation) = self.cache.get(&key) {
            debug!("{:?} ({}) - cache hit", t, tle.satellite_name());
            return Ok(*observation);
        }

        let state = self.propagator.propagate(tle, t)?;

        let ecef = frame::teme_to_ecef(&state.position, frame::gmst(t));
        let (lat, lng, height_km) = frame::ecef_to_geodetic(&ecef);
        let angles = frame::look_angles(&ecef, observer);

        let observation = Observation {
            lat,
            lng,
            height_km,
            elevation_deg: angles.elevation_deg,
            azimuth_deg: angles.azimuth_deg,
            range_km: angles.range_km,
            velocity_km_s: state.velocity.norm(),
        };

        debug!("{:?} ({}) - new {:?}", t, tle.satellite_name(), observation);
        self.cache.insert(key, observation);
        Ok(observation)
    }
    /// Validates the element set, then resolves the sub-satellite point at instant `t`.
    pub fn lat_lon(&mut self, tle: &Tle, t: Epoch) -> Result<LatLon, Error> {
        if let Err(e) = tle.validate() {
            warn!("{:?} ({}) - {}", t, tle.satellite_name(), e);
            return Err(e);
        }
        let observer = self.cfg.observer;
        Ok(self.satellite_info(tle, t, &observer)?.lat_lon())
    }
    /// Resolves look angles from given observer at instant `t`
    pub fn look_angles(
        &mut self,
        tle: &Tle,
        t: Epoch,
        observer: &ObserverPosition,
    ) -> Result<LookAngles, Error> {
        Ok(self.satellite_info(tle, t, observer)?.look_angles())
    }
}

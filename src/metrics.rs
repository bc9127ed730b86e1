//! Ground tracks and derived quantities
use hifitime::{Duration, Epoch};
use log::{debug, trace};

use crate::{orbit::Propagator, tle::Tle, tracker::Tracker, Error};

/// Mean Earth radius [km]
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Minutes in a day
const MINUTES_PER_DAY: f64 = 1440.0;

/// Maximal number of samples in a single track
pub const MAX_TRACK_SAMPLES: usize = 1_000_000;

/// Haversine distance between two points given in decimal degrees [km]
pub fn great_circle_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();
    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_MEAN_RADIUS_KM * c
}

/// Mean orbital period [min]
pub fn average_orbit_period_minutes(tle: &Tle) -> Result<f64, Error> {
    Ok(MINUTES_PER_DAY / tle.mean_motion()?)
}

impl<P: Propagator> Tracker<P> {
    /// Ground speed [km/s], approximated as the great circle distance covered
    /// by the sub-satellite point over the configured finite difference period.
    pub fn ground_speed_km_s(&mut self, tle: &Tle, t: Epoch) -> Result<f64, Error> {
        let dt = self.config().ground_speed_dt;
        if dt <= Duration::ZERO {
            return Err(Error::InvalidStep);
        }
        let p1 = self.lat_lon(tle, t)?;
        let p2 = self.lat_lon(tle, t + dt)?;
        Ok(great_circle_distance_km(p1.lat, p1.lng, p2.lat, p2.lng) / dt.to_seconds())
    }
    /// Samples [lat, lng] points every `step`, across the configured window centered on `center`.
    /// Sample count is ceil(window / step), steps that would exceed [MAX_TRACK_SAMPLES]
    /// are rejected.
    pub fn ground_track(
        &mut self,
        tle: &Tle,
        center: Epoch,
        step: Duration,
    ) -> Result<Vec<[f64; 2]>, Error> {
        let half = self.config().ground_track_half_window;
        let step_ns = step.total_nanoseconds();
        if step_ns <= 0 {
            return Err(Error::InvalidStep);
        }
        let window_ns = (half + half).total_nanoseconds();
        let count = (window_ns + step_ns - 1) / step_ns;
        if count > MAX_TRACK_SAMPLES as i128 {
            return Err(Error::InvalidStep);
        }
        debug!(
            "{:?} ({}) - ground track: {} samples every {}",
            center,
            tle.satellite_name(),
            count,
            step
        );

        let mut track = Vec::with_capacity(count as usize);
        let mut t = center - half;
        for _ in 0..count {
            let p = self.lat_lon(tle, t)?;
            trace!("{:?} - {:?}", t, p);
            track.push([p.lat, p.lng]);
            t += step;
        }
        Ok(track)
    }
    /// [Tracker::ground_track] centered on current time, using the configured step.
    pub fn ground_track_now(&mut self, tle: &Tle) -> Result<Vec<[f64; 2]>, Error> {
        let now = Epoch::now().map_err(|e| Error::Time(e.to_string()))?;
        let step = self.config().ground_track_step;
        self.ground_track(tle, now, step)
    }
    /// Samples [lat, lng] points every `step` starting at `start`, until
    /// the track crosses the antimeridian or `max_points` is reached.
    /// The first point past the antimeridian is not included.
    pub fn orbit_track(
        &mut self,
        tle: &Tle,
        start: Epoch,
        step: Duration,
        max_points: usize,
    ) -> Result<Vec<[f64; 2]>, Error> {
        if step <= Duration::ZERO {
            return Err(Error::InvalidStep);
        }
        let mut track = Vec::<[f64; 2]>::with_capacity(max_points.min(MAX_TRACK_SAMPLES));
        let mut t = start;
        while track.len() < max_points {
            let p = self.lat_lon(tle, t)?;
            if let Some([_, lng]) = track.last() {
                if (p.lng - lng).abs() > 180.0 {
                    debug!("{:?} ({}) - antimeridian crossing", t, tle.satellite_name());
                    break;
                }
            }
            track.push([p.lat, p.lng]);
            t += step;
        }
        Ok(track)
    }
}
